//! Async DeepL client: construction and text translation

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::errors::{ApiError, DeeplError, Result};
use crate::core::language::Language;
use crate::core::models::{TranslateResponse, Translation};
use crate::core::options::{apply_all, ClientOption, FormParams, TranslateOption};
use crate::core::transport::HttpTransport;

/// Base URL of version 2 of the DeepL API
pub const V2: &str = "https://api.deepl.com/v2";

/// Base URL of version 2 of the DeepL API for free-tier keys
pub const V2_FREE: &str = "https://api-free.deepl.com/v2";

/// DeepL API client.
///
/// Configuration is fixed once [`DeeplClient::new`] returns, so a client can
/// be cloned and shared between tasks freely. Every call is a single request
/// with no retries; timeouts are whatever the transport enforces.
#[derive(Clone)]
pub struct DeeplClient {
    transport: Arc<dyn HttpTransport>,
    auth_key: String,
    base_url: String,
    translate_url: String,
    glossary_url: String,
}

impl DeeplClient {
    /// Create a client for `auth_key`, then apply `options` in order.
    ///
    /// Without options the client talks to [`V2`] through a default
    /// `reqwest::Client`.
    pub fn new<I>(auth_key: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let mut base_url = V2.to_string();
        let mut transport: Option<Arc<dyn HttpTransport>> = None;

        for option in options {
            match option {
                ClientOption::BaseUrl(url) => base_url = url,
                ClientOption::Transport(custom) => transport = Some(custom),
            }
        }

        // the default transport is only built when no override was given
        let transport: Arc<dyn HttpTransport> = match transport {
            Some(custom) => custom,
            None => Arc::new(reqwest::Client::new()),
        };
        let base = base_url.trim_end_matches('/');

        Self {
            transport,
            auth_key: auth_key.into(),
            base_url: base.to_string(),
            translate_url: format!("{}/translate", base),
            glossary_url: format!("{}/glossaries", base),
        }
    }

    /// The DeepL authentication key
    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }

    /// Base URL all endpoints derive from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/translate`
    pub fn translate_url(&self) -> &str {
        &self.translate_url
    }

    /// `{base}/glossaries`
    pub fn glossary_url(&self) -> &str {
        &self.glossary_url
    }

    /// Transport used for every request
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Translate a single text into `target_lang`.
    ///
    /// Returns the translated text and the detected source language. A
    /// success response without any translation is reported as
    /// [`DeeplError::NoTranslation`].
    ///
    /// ```ignore
    /// match client.translate("Hello.", &Language::JAPANESE, &[]).await {
    ///     Err(DeeplError::Api(err)) if err.is_quota_exceeded() => { /* wait for next month */ }
    ///     other => { /* ... */ }
    /// }
    /// ```
    pub async fn translate(
        &self,
        text: &str,
        target_lang: &Language,
        options: &[TranslateOption],
    ) -> Result<(String, Language)> {
        let mut translations = self.translate_many(&[text], target_lang, options).await?;

        if translations.is_empty() {
            return Err(DeeplError::NoTranslation);
        }

        let first = translations.swap_remove(0);
        Ok((first.text, first.detected_source_language))
    }

    /// Translate every text in `texts` into `target_lang` with one request.
    ///
    /// Translations come back in the order DeepL sends them, which matches
    /// the input order. The list is not checked against the input; DeepL may
    /// return fewer entries.
    ///
    /// Remote rejections carry only the status code.
    pub async fn translate_many<S: AsRef<str>>(
        &self,
        texts: &[S],
        target_lang: &Language,
        options: &[TranslateOption],
    ) -> Result<Vec<Translation>> {
        let mut params = FormParams::new();
        params.set("auth_key", self.auth_key.as_str());
        params.set("target_lang", target_lang.as_str());
        for text in texts {
            params.append("text", text.as_ref());
        }
        apply_all(options, &mut params);

        let mut request = self.request(Method::POST, self.endpoint(&self.translate_url, &[])?)?;
        set_form(&mut request, &params);

        debug!(
            "Translating {} text(s) into {} with {} option(s)",
            texts.len(),
            target_lang,
            options.len()
        );

        let response = self.send(request).await?;
        if response.status() != StatusCode::OK {
            return Err(ApiError::new(response.status().as_u16()).into());
        }

        let decoded: TranslateResponse = decode_json(response).await?;
        Ok(decoded.translations)
    }

    /// Parse `raw` and append `segments` as percent-encoded path segments
    pub(crate) fn endpoint(&self, raw: &str, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(raw).map_err(|e| DeeplError::InvalidUrl(format!("{}: {}", raw, e)))?;

        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| DeeplError::InvalidUrl(format!("{}: cannot be a base", raw)))?
                .extend(segments);
        }

        Ok(url)
    }

    /// Request with the `Authorization` header set
    pub(crate) fn request(&self, method: Method, url: Url) -> Result<Request> {
        let mut request = Request::new(method, url);
        let auth = HeaderValue::from_str(&format!("DeepL-Auth-Key {}", self.auth_key))?;
        request.headers_mut().insert(AUTHORIZATION, auth);
        Ok(request)
    }

    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        debug!("{} {}", request.method(), request.url());
        let response = self.transport.execute(request).await?;
        debug!("DeepL responded with {}", response.status());
        Ok(response)
    }
}

impl fmt::Debug for DeeplClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeeplClient")
            .field("auth_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("translate_url", &self.translate_url)
            .field("glossary_url", &self.glossary_url)
            .finish_non_exhaustive()
    }
}

/// Attach `params` as a form-encoded body
pub(crate) fn set_form(request: &mut Request, params: &FormParams) {
    request.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    *request.body_mut() = Some(params.encode().into());
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Remote rejection that keeps the response body when it can be read
pub(crate) async fn rejection(response: Response) -> DeeplError {
    let code = response.status().as_u16();
    match response.text().await {
        Ok(body) => ApiError::with_body(code, body).into(),
        Err(err) => {
            debug!("Could not read body of {} response: {}", code, err);
            ApiError::new(code).into()
        }
    }
}
