//! Composable request and client options
//!
//! A translate call starts from a fresh [`FormParams`] bag and applies every
//! [`TranslateOption`] in the order given. Options overwrite their own field,
//! so the last one for a given parameter wins. Source texts are the one
//! exception: they are appended, never overwritten.
//!
//! [`ClientOption`] follows the same law for [`DeeplClient`](crate::core::client::DeeplClient)
//! construction.

use std::fmt;
use std::sync::Arc;

use crate::core::language::Language;
use crate::core::tokens::{Formality, SplitSentences, TagHandling};
use crate::core::transport::HttpTransport;

/// Form fields of one outbound request, before encoding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    fields: Vec<(String, String)>,
}

impl FormParams {
    /// Create an empty parameter bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value of `key` with `value`
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.remove(key);
        self.fields.push((key.to_string(), value.into()));
    }

    /// Add another value for `key`, keeping existing ones
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.fields.push((key.to_string(), value.into()));
    }

    /// Drop every value of `key`
    pub fn remove(&mut self, key: &str) {
        self.fields.retain(|(k, _)| k != key);
    }

    /// First value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `key`, in insertion order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

/// An optional `/translate` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateOption {
    /// Language of the input; DeepL detects it when absent
    SourceLang(Language),
    /// Ask DeepL to report billed characters per text
    ShowBilledCharacters(bool),
    /// Sentence splitting mode
    SplitSentences(SplitSentences),
    /// Keep the original formatting even where DeepL would correct it
    PreserveFormatting(bool),
    /// Formality of the output
    Formality(Formality),
    /// How tags in the input are handled
    TagHandling(TagHandling),
    /// Tags whose content is never translated
    IgnoreTags(Vec<String>),
    /// Glossary to use for the translation
    GlossaryId(String),
    /// Extra context that influences the translation but is not translated
    Context(String),
}

impl TranslateOption {
    /// `IgnoreTags` from anything that yields tag names
    pub fn ignore_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TranslateOption::IgnoreTags(tags.into_iter().map(Into::into).collect())
    }

    /// Apply this option to `params`, overwriting any earlier value
    pub fn apply(&self, params: &mut FormParams) {
        match self {
            TranslateOption::SourceLang(lang) => params.set("source_lang", lang.as_str()),
            TranslateOption::ShowBilledCharacters(show) => {
                params.set("show_billed_characters", bool_value(*show))
            }
            TranslateOption::SplitSentences(split) => params.set("split_sentences", split.value()),
            TranslateOption::PreserveFormatting(preserve) => {
                params.set("preserve_formatting", bool_value(*preserve))
            }
            TranslateOption::Formality(formality) => params.set("formality", formality.value()),
            TranslateOption::TagHandling(handling) => match handling.value() {
                // An empty tag_handling is the same as not sending one
                "" => params.remove("tag_handling"),
                value => params.set("tag_handling", value),
            },
            TranslateOption::IgnoreTags(tags) => params.set("ignore_tags", tags.join(",")),
            TranslateOption::GlossaryId(id) => params.set("glossary_id", id.as_str()),
            TranslateOption::Context(context) => params.set("context", context.as_str()),
        }
    }
}

/// Apply `options` to `params` strictly in order
pub fn apply_all(options: &[TranslateOption], params: &mut FormParams) {
    for option in options {
        option.apply(params);
    }
}

fn bool_value(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// A client configuration override, applied at construction
#[derive(Clone)]
pub enum ClientOption {
    /// Base URL of the API; the translate and glossary endpoints derive from it
    BaseUrl(String),
    /// Transport that performs the HTTP round trips
    Transport(Arc<dyn HttpTransport>),
}

impl ClientOption {
    /// `BaseUrl` from anything string-like
    pub fn base_url(url: impl Into<String>) -> Self {
        ClientOption::BaseUrl(url.into())
    }

    /// `Transport` from a concrete transport
    pub fn transport(transport: impl HttpTransport + 'static) -> Self {
        ClientOption::Transport(Arc::new(transport))
    }
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientOption::BaseUrl(url) => f.debug_tuple("BaseUrl").field(url).finish(),
            ClientOption::Transport(_) => f.write_str("Transport(..)"),
        }
    }
}
