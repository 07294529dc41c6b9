//! Server-side rendering of the landing page and the validation widget

pub mod page;
pub mod widget;

pub use page::{PageRenderer, RenderError};
pub use widget::{error_message, ResultCard, WidgetView};
