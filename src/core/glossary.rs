//! Glossary management endpoints
//!
//! Unlike translation, every glossary call keeps the response body of a
//! rejection, so DeepL's explanation ends up in the error message.

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::core::client::{decode_json, rejection, set_form, DeeplClient};
use crate::core::errors::Result;
use crate::core::language::Language;
use crate::core::models::{Glossary, GlossaryEntry, GlossaryList};
use crate::core::options::FormParams;
use crate::core::tsv::{decode_entries, encode_entries};

const TSV: &str = "text/tab-separated-values";

impl DeeplClient {
    /// Create a glossary from `entries`.
    ///
    /// See <https://www.deepl.com/docs-api/managing-glossaries/creating-a-glossary/>
    pub async fn create_glossary(
        &self,
        name: &str,
        source_lang: &Language,
        target_lang: &Language,
        entries: &[GlossaryEntry],
    ) -> Result<Glossary> {
        let mut params = FormParams::new();
        params.set("name", name);
        params.set("source_lang", source_lang.as_str());
        params.set("target_lang", target_lang.as_str());
        params.set("entries_format", "tsv");
        params.set("entries", encode_entries(entries));

        let mut request = self.request(Method::POST, self.endpoint(self.glossary_url(), &[])?)?;
        set_form(&mut request, &params);

        debug!(
            "Creating glossary {:?} ({} -> {}) with {} entries",
            name,
            source_lang,
            target_lang,
            entries.len()
        );

        let response = self.send(request).await?;
        if response.status() != StatusCode::CREATED {
            return Err(rejection(response).await);
        }

        decode_json(response).await
    }

    /// List all glossaries of the account.
    ///
    /// See <https://www.deepl.com/docs-api/managing-glossaries/listing-glossaries/>
    pub async fn list_glossaries(&self) -> Result<Vec<Glossary>> {
        let request = self.request(Method::GET, self.endpoint(self.glossary_url(), &[])?)?;

        let response = self.send(request).await?;
        if response.status() != StatusCode::OK {
            return Err(rejection(response).await);
        }

        let list: GlossaryList = decode_json(response).await?;
        Ok(list.glossaries)
    }

    /// Fetch the metadata of one glossary.
    ///
    /// See <https://www.deepl.com/docs-api/managing-glossaries/listing-glossary-information/>
    pub async fn get_glossary(&self, glossary_id: &str) -> Result<Glossary> {
        let url = self.endpoint(self.glossary_url(), &[glossary_id])?;
        let request = self.request(Method::GET, url)?;

        let response = self.send(request).await?;
        if response.status() != StatusCode::OK {
            return Err(rejection(response).await);
        }

        decode_json(response).await
    }

    /// Fetch the entries of one glossary.
    ///
    /// See <https://www.deepl.com/docs-api/managing-glossaries/listing-entries-of-a-glossary/>
    pub async fn list_glossary_entries(&self, glossary_id: &str) -> Result<Vec<GlossaryEntry>> {
        let url = self.endpoint(self.glossary_url(), &[glossary_id, "entries"])?;
        let mut request = self.request(Method::GET, url)?;
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static(TSV));

        let response = self.send(request).await?;
        if response.status() != StatusCode::OK {
            return Err(rejection(response).await);
        }

        let body = String::from_utf8(response.bytes().await?.to_vec())?;
        Ok(decode_entries(&body)?)
    }

    /// Delete one glossary.
    ///
    /// See <https://www.deepl.com/docs-api/managing-glossaries/deleting-a-glossary/>
    pub async fn delete_glossary(&self, glossary_id: &str) -> Result<()> {
        let url = self.endpoint(self.glossary_url(), &[glossary_id])?;
        let request = self.request(Method::DELETE, url)?;

        debug!("Deleting glossary {}", glossary_id);

        let response = self.send(request).await?;
        if response.status() != StatusCode::NO_CONTENT {
            return Err(rejection(response).await);
        }

        Ok(())
    }
}
