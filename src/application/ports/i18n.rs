// src/application/ports/i18n.rs
use crate::domain::message::Message;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Picks the best supported locale from an `Accept-Language` header,
    /// honouring quality values. Unsupported or malformed entries are skipped.
    pub fn negotiate(header: &str, fallback: Self) -> Self {
        let mut best: Option<(Self, f32)> = None;
        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let Some(tag) = parts.next().map(str::trim).filter(|t| !t.is_empty()) else {
                continue;
            };
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok());
            let Some(quality) = quality.filter(|q| *q > 0.0) else {
                continue;
            };
            let primary = tag.split(['-', '_']).next().unwrap_or(tag);
            let Ok(locale) = primary.parse::<Self>() else {
                continue;
            };
            if best.is_none_or(|(_, q)| quality > q) {
                best = Some((locale, quality));
            }
        }
        best.map_or(fallback, |(locale, _)| locale)
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(format!("unsupported locale `{other}`")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a message key and its arguments in a locale.
pub trait Translator: Send + Sync {
    fn translate(&self, message: &Message, locale: Locale) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negotiation_prefers_highest_quality_supported_tag() {
        assert_eq!(Locale::negotiate("ar-SA,ar;q=0.9,en;q=0.8", Locale::En), Locale::Ar);
        assert_eq!(Locale::negotiate("fr-FR, en;q=0.5, ar;q=0.4", Locale::Ar), Locale::En);
        assert_eq!(Locale::negotiate("de", Locale::En), Locale::En);
        assert_eq!(Locale::negotiate("", Locale::Ar), Locale::Ar);
        assert_eq!(Locale::negotiate("ar;q=0", Locale::En), Locale::En);
    }
}
