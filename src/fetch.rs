//! Retrieval of document text followed by a single parse.
//!
//! Retrieval failures are not errors: the document is left untouched and the
//! completion callback does not run.

use crate::config::FetchConfig;
use crate::document::DocumentModel;
use crate::error::Error;
use crate::parser;
use crate::Target;

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { client })
    }

    /// Text behind `locator`: an `http(s)://` URL, otherwise a file path.
    /// Returns `None` if it cannot be retrieved.
    pub async fn retrieve(&self, locator: &str) -> Option<String> {
        if is_url(locator) {
            self.get(locator).await
        } else {
            match tokio::fs::read_to_string(locator).await {
                Ok(text) => Some(text),
                Err(e) => {
                    log::debug!("Could not read {}: {}", locator, e);
                    None
                }
            }
        }
    }

    async fn get(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("GET {} failed: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            log::debug!("GET {} returned {}", url, response.status());
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("Could not read body of {}: {}", url, e);
                None
            }
        }
    }

    /// Retrieve `locator` and parse it into `target`.
    ///
    /// Returns `Ok(false)` if nothing could be retrieved.
    pub async fn fetch_and_parse<D: DocumentModel>(
        &self,
        locator: &str,
        document: &mut D,
        target: Target<D::Node>,
    ) -> Result<bool, Error> {
        self.fetch_and_parse_then(locator, document, target, |_| {})
            .await
    }

    /// Like [`Fetcher::fetch_and_parse`], running `on_parsed` once the parse
    /// has finished.
    pub async fn fetch_and_parse_then<D, F>(
        &self,
        locator: &str,
        document: &mut D,
        target: Target<D::Node>,
        on_parsed: F,
    ) -> Result<bool, Error>
    where
        D: DocumentModel,
        F: FnOnce(&mut D),
    {
        let node = target.resolve(&*document)?;

        let Some(text) = self.retrieve(locator).await else {
            return Ok(false);
        };

        log::debug!("Retrieved {} bytes from {}", text.len(), locator);
        parser::parse_document(document, &text, node);
        on_parsed(document);
        Ok(true)
    }
}

fn is_url(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}
