//! Handlebars rendering of the landing page
//!
//! Templates are compiled into the binary and registered once at startup.
//! The widget form and results are partials so the results region can be
//! rendered on its own for in-page updates.

use handlebars::Handlebars;
use serde::Serialize;

use pv_shared::Language;

use crate::i18n::{PageContent, WidgetMessages};

use super::widget::WidgetView;

pub use handlebars::{RenderError, TemplateError};

const LANDING_TEMPLATE: &str = "landing";
const WIDGET_FORM_TEMPLATE: &str = "widget_form";
const WIDGET_RESULTS_TEMPLATE: &str = "widget_results";

#[derive(Serialize)]
struct LandingContext<'a> {
    lang: &'static str,
    page: &'a PageContent,
    messages: &'a WidgetMessages,
    view: &'a WidgetView,
}

#[derive(Serialize)]
struct WidgetContext<'a> {
    lang: &'static str,
    messages: &'a WidgetMessages,
    view: &'a WidgetView,
}

/// Renders the landing page and widget fragments
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        registry.register_template_string(
            WIDGET_FORM_TEMPLATE,
            include_str!("../../templates/widget_form.hbs"),
        )?;
        registry.register_template_string(
            WIDGET_RESULTS_TEMPLATE,
            include_str!("../../templates/widget_results.hbs"),
        )?;
        registry.register_template_string(
            LANDING_TEMPLATE,
            include_str!("../../templates/landing.hbs"),
        )?;

        Ok(Self { registry })
    }

    /// Full landing page with the widget in the given view
    pub fn render_landing(
        &self,
        language: Language,
        page: &PageContent,
        messages: &WidgetMessages,
        view: &WidgetView,
    ) -> Result<String, RenderError> {
        self.registry.render(
            LANDING_TEMPLATE,
            &LandingContext {
                lang: language.code(),
                page,
                messages,
                view,
            },
        )
    }

    /// Only the results region: loading indicator, error or result card
    pub fn render_widget_results(
        &self,
        language: Language,
        messages: &WidgetMessages,
        view: &WidgetView,
    ) -> Result<String, RenderError> {
        self.registry.render(
            WIDGET_RESULTS_TEMPLATE,
            &WidgetContext {
                lang: language.code(),
                messages,
                view,
            },
        )
    }
}
