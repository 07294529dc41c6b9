//! Display language of the landing page and widget

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported page languages; Spanish unless the visitor asks otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code, also used as the `lang` query value
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Best supported match for an `Accept-Language` header.
    ///
    /// Entries are ranked by their `q` weight; ties keep the earlier entry.
    /// `"en;q=0.5,es;q=0.8"` yields Spanish. Nothing usable yields the default.
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .filter_map(weighted_tag)
            .fold(None, |best: Option<(Language, f32)>, (language, weight)| match best {
                Some((_, best_weight)) if best_weight >= weight => best,
                _ if weight > 0.0 => Some((language, weight)),
                _ => best,
            })
            .map(|(language, _)| language)
            .unwrap_or_default()
    }

    fn from_primary_tag(tag: &str) -> Option<Self> {
        let primary = tag.split('-').next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("es") {
            Some(Language::Spanish)
        } else if primary.eq_ignore_ascii_case("en") {
            Some(Language::English)
        } else {
            None
        }
    }
}

/// `en-US;q=0.7` -> `(English, 0.7)`; unsupported tags are skipped
fn weighted_tag(entry: &str) -> Option<(Language, f32)> {
    let mut params = entry.split(';').map(str::trim);
    let language = Language::from_primary_tag(params.next()?)?;
    let weight = params
        .find_map(|param| param.strip_prefix("q="))
        .map_or(Some(1.0), |q| q.parse::<f32>().ok())?;
    Some((language, weight))
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spa" | "spanish" | "español" => Ok(Language::Spanish),
            "en" | "eng" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language {:?}", other)),
        }
    }
}
