//! DeepL client core: request building, response decoding and error classification

pub mod client;
pub mod config;
pub mod errors;
pub mod glossary;
pub mod language;
pub mod models;
pub mod options;
pub mod tokens;
pub mod transport;
pub mod tsv;
