use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "pt_BR")]
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::PtBr];

    pub const FALLBACK: Locale = Locale::EnUs;

    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::PtBr => "pt_BR",
        }
    }

    /// Name shown in the language dropdown, always in the locale's own language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::PtBr => "Português",
        }
    }

    /// Accepts `pt_BR`, `pt-BR` and `pt_br` alike.
    pub fn from_code(code: &str) -> Option<Locale> {
        let normalized = code.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().to_ascii_lowercase() == normalized)
    }

    pub fn from_display_name(name: &str) -> Option<Locale> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.display_name() == name.trim())
    }

    /// Resolves either a code or a display name, falling back to [`Locale::FALLBACK`].
    pub fn resolve(value: &str) -> (Locale, bool) {
        match Self::from_code(value).or_else(|| Self::from_display_name(value)) {
            Some(locale) => (locale, true),
            None => (Self::FALLBACK, false),
        }
    }
}
