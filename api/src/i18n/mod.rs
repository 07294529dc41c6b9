//! Localized page copy and widget messages
//!
//! The catalog ships embedded in the binary. A `i18n/messages.toml` file in
//! the working directory replaces it at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pv_shared::Language;

/// Path checked for a catalog override, relative to the working directory
pub const CATALOG_OVERRIDE_PATH: &str = "i18n/messages.toml";

const EMBEDDED_CATALOG: &str = include_str!("../../i18n/messages.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read message catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid message catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Messages used by the validation widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetMessages {
    pub input_placeholder: String,
    pub submit: String,
    pub submitting: String,
    pub loading: String,
    pub empty_input: String,
    pub request_failed: String,
    pub card_title: String,
    pub valid_label: String,
    pub country_label: String,
    pub carrier_label: String,
    pub line_type_label: String,
    pub yes: String,
    pub no: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessages {
    pub not_found: String,
    pub internal_error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub cta: String,
}

/// Static landing page copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub brand: String,
    pub nav_home: String,
    pub nav_pricing: String,
    pub nav_contact: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub benefits_title: String,
    pub pricing_title: String,
    pub footer_copyright: String,
    pub footer_links: String,
    pub benefits: Vec<Benefit>,
    pub plans: Vec<Plan>,
}

/// Everything rendered in one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    pub widget: WidgetMessages,
    pub errors: ErrorMessages,
    pub page: PageContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    es: Messages,
    en: Messages,
}

impl Catalog {
    /// Load the override file when it exists, the embedded catalog otherwise
    pub fn load(override_path: Option<&Path>) -> Result<Self, CatalogError> {
        match override_path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                tracing::info!(path = %path.display(), "Loaded message catalog override");
                Self::parse(&content)
            }
            _ => Self::embedded(),
        }
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse(EMBEDDED_CATALOG)
    }

    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    pub fn messages(&self, language: Language) -> &Messages {
        match language {
            Language::Spanish => &self.es,
            Language::English => &self.en,
        }
    }

    pub fn widget(&self, language: Language) -> &WidgetMessages {
        &self.messages(language).widget
    }

    pub fn errors(&self, language: Language) -> &ErrorMessages {
        &self.messages(language).errors
    }

    pub fn page(&self, language: Language) -> &PageContent {
        &self.messages(language).page
    }
}
