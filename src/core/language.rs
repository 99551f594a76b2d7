//! DeepL language codes

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A DeepL language code such as `DE` or `EN-GB`.
///
/// DeepL adds languages independently of this crate, so any code is accepted;
/// the associated constants cover the documented set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(Cow<'static, str>);

#[allow(missing_docs)]
impl Language {
    pub const ARABIC: Language = Language::from_static("AR");
    pub const BULGARIAN: Language = Language::from_static("BG");
    pub const CHINESE_SIMPLIFIED: Language = Language::from_static("ZH-HANS");
    pub const CHINESE_TRADITIONAL: Language = Language::from_static("ZH-HANT");
    pub const CZECH: Language = Language::from_static("CS");
    pub const DANISH: Language = Language::from_static("DA");
    pub const DUTCH: Language = Language::from_static("NL");
    pub const ENGLISH_AMERICAN: Language = Language::from_static("EN-US");
    pub const ENGLISH_BRITISH: Language = Language::from_static("EN-GB");
    pub const ESTONIAN: Language = Language::from_static("ET");
    pub const FINNISH: Language = Language::from_static("FI");
    pub const FRENCH: Language = Language::from_static("FR");
    pub const GERMAN: Language = Language::from_static("DE");
    pub const GREEK: Language = Language::from_static("EL");
    pub const HUNGARIAN: Language = Language::from_static("HU");
    pub const INDONESIAN: Language = Language::from_static("ID");
    pub const ITALIAN: Language = Language::from_static("IT");
    pub const JAPANESE: Language = Language::from_static("JA");
    pub const KOREAN: Language = Language::from_static("KO");
    pub const LATVIAN: Language = Language::from_static("LV");
    pub const LITHUANIAN: Language = Language::from_static("LT");
    pub const NORWEGIAN_BOKMAL: Language = Language::from_static("NB");
    pub const POLISH: Language = Language::from_static("PL");
    pub const PORTUGUESE_BRAZIL: Language = Language::from_static("PT-BR");
    pub const PORTUGUESE_PORTUGAL: Language = Language::from_static("PT-PT");
    pub const ROMANIAN: Language = Language::from_static("RO");
    pub const RUSSIAN: Language = Language::from_static("RU");
    pub const SLOVAK: Language = Language::from_static("SK");
    pub const SLOVENIAN: Language = Language::from_static("SL");
    pub const SPANISH: Language = Language::from_static("ES");
    pub const SWEDISH: Language = Language::from_static("SV");
    pub const TURKISH: Language = Language::from_static("TR");
    pub const UKRAINIAN: Language = Language::from_static("UK");

    /// English (unspecified). Not valid as a target; use `ENGLISH_AMERICAN`
    /// or `ENGLISH_BRITISH` instead.
    pub const ENGLISH: Language = Language::from_static("EN");
    /// Portuguese (unspecified). Not valid as a target; use
    /// `PORTUGUESE_BRAZIL` or `PORTUGUESE_PORTUGAL` instead.
    pub const PORTUGUESE: Language = Language::from_static("PT");
    /// Chinese (unspecified). Not valid as a target; use
    /// `CHINESE_SIMPLIFIED` or `CHINESE_TRADITIONAL` instead.
    pub const CHINESE: Language = Language::from_static("ZH");
}

impl Language {
    /// Wrap an arbitrary language code
    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// The code as sent to DeepL
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
