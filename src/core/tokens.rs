//! Request tokens for sentence splitting, formality and tag handling
//!
//! Like [`Language`](crate::core::language::Language), these are open string
//! tokens: the constants document the values DeepL knows about today, and
//! `new` accepts anything else. Each token knows its own wire value.

use std::borrow::Cow;
use std::fmt;

macro_rules! string_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Wrap an arbitrary token
            pub fn new(token: impl Into<String>) -> Self {
                Self(Cow::Owned(token.into()))
            }

            const fn from_static(token: &'static str) -> Self {
                Self(Cow::Borrowed(token))
            }

            /// The raw token
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::new(token)
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self::new(token)
            }
        }
    };
}

string_token!(
    /// A `split_sentences` setting
    SplitSentences
);

impl SplitSentences {
    /// No splitting at all, the whole input is treated as one sentence.
    pub const NONE: SplitSentences = SplitSentences::from_static("0");
    /// Split on interpunction and on newlines (DeepL's default).
    pub const DEFAULT: SplitSentences = SplitSentences::from_static("1");
    /// Split on interpunction only, ignoring newlines.
    pub const NO_NEWLINES: SplitSentences = SplitSentences::from_static("nonewlines");

    /// Request value; anything unrecognized falls back to `"1"`
    pub fn value(&self) -> &'static str {
        match self.as_str() {
            "0" => "0",
            "nonewlines" => "nonewlines",
            _ => "1",
        }
    }
}

impl fmt::Display for SplitSentences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

string_token!(
    /// A `formality` setting
    Formality
);

impl Formality {
    /// Let DeepL pick.
    pub const DEFAULT: Formality = Formality::from_static("default");
    /// Less formal, more informal language.
    pub const LESS: Formality = Formality::from_static("less");
    /// More formal language.
    pub const MORE: Formality = Formality::from_static("more");
    /// Less formal if the target language supports formality, otherwise default.
    pub const PREFER_LESS: Formality = Formality::from_static("prefer_less");
    /// More formal if the target language supports formality, otherwise default.
    pub const PREFER_MORE: Formality = Formality::from_static("prefer_more");

    /// Request value
    pub fn value(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

string_token!(
    /// A `tag_handling` strategy
    TagHandling
);

impl TagHandling {
    /// Tags are not taken into account. Sent as an empty value.
    pub const DEFAULT: TagHandling = TagHandling::from_static("default");
    /// Extract text from XML, translate sentence by sentence and put it back.
    pub const XML: TagHandling = TagHandling::from_static("xml");
    /// Same as `XML` for HTML input.
    pub const HTML: TagHandling = TagHandling::from_static("html");

    /// Request value; the default strategy maps to `""`
    pub fn value(&self) -> &str {
        if *self == Self::DEFAULT {
            ""
        } else {
            self.as_str()
        }
    }
}

impl fmt::Display for TagHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
