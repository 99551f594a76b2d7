//! DeepL Translator - async client for the DeepL translation API
//!
//! This library translates text and manages glossaries through the DeepL
//! HTTP API. Requests are composed from ordered [`TranslateOption`]s and sent
//! through a pluggable [`HttpTransport`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::{DeeplClient, V2, V2_FREE},
    config::ClientConfig,
    errors::{ApiError, DeeplError, MalformedEntry, Result},
    language::Language,
    models::{Glossary, GlossaryEntry, Translation},
    options::{ClientOption, FormParams, TranslateOption},
    tokens::{Formality, SplitSentences, TagHandling},
    transport::HttpTransport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
