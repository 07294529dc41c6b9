pub mod cors;
pub mod request_context;
pub mod security;

pub use cors::*;
pub use request_context::*;
pub use security::*;
