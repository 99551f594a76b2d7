//! Data returned by the DeepL API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::language::Language;

/// Envelope of a `/translate` response
#[derive(Debug, Deserialize)]
pub(crate) struct TranslateResponse {
    pub translations: Vec<Translation>,
}

/// Envelope of a `GET /glossaries` response
#[derive(Debug, Deserialize)]
pub(crate) struct GlossaryList {
    pub glossaries: Vec<Glossary>,
}

/// One translated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Language DeepL detected (or was told) the input is written in
    pub detected_source_language: Language,
    /// The translated text
    pub text: String,
    /// Characters billed for this text; only present when
    /// [`TranslateOption::ShowBilledCharacters`](crate::core::options::TranslateOption::ShowBilledCharacters)
    /// was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billed_characters: Option<u64>,
}

/// Glossary metadata as stored by DeepL
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    /// Identifier used by every other glossary call
    pub glossary_id: String,
    /// Display name
    pub name: String,
    /// Whether DeepL finished processing the glossary and it can be used
    pub ready: bool,
    pub source_lang: Language,
    pub target_lang: Language,
    pub creation_time: DateTime<Utc>,
    /// Number of entries in the glossary
    pub entry_count: u64,
}

/// A single source -> target glossary entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct GlossaryEntry {
    pub source: String,
    pub target: String,
}

impl GlossaryEntry {
    /// Create an entry mapping `source` to `target`
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_translation_without_billed_characters() {
        let translation: Translation = serde_json::from_value(json!({
            "detected_source_language": "EN",
            "text": "Hallo"
        }))
        .unwrap();

        assert_eq!(translation.detected_source_language, Language::ENGLISH);
        assert_eq!(translation.text, "Hallo");
        assert_eq!(translation.billed_characters, None);
    }

    #[test]
    fn test_translation_with_billed_characters() {
        let translation: Translation = serde_json::from_value(json!({
            "detected_source_language": "EN",
            "text": "Hallo",
            "billed_characters": 5
        }))
        .unwrap();

        assert_eq!(translation.billed_characters, Some(5));
    }

    #[test]
    fn test_glossary_round_trips_through_json() {
        let value = json!({
            "glossary_id": "def3a26b-3e84-45b3-84ae-0c0aaf3525f7",
            "name": "My Glossary",
            "ready": true,
            "source_lang": "EN",
            "target_lang": "DE",
            "creation_time": "2021-08-03T14:16:18.329Z",
            "entry_count": 1
        });

        let glossary: Glossary = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(glossary.name, "My Glossary");
        assert_eq!(glossary.source_lang, Language::ENGLISH);
        assert_eq!(glossary.target_lang, Language::GERMAN);
        assert_eq!(
            glossary.creation_time,
            Utc.with_ymd_and_hms(2021, 8, 3, 14, 16, 18).unwrap()
                + chrono::Duration::milliseconds(329)
        );

        assert_json_eq!(serde_json::to_value(&glossary).unwrap(), value);
    }
}
