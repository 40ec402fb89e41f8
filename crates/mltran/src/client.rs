// ABOUTME: The main Client struct for mltran that handles Multitran requests and page parsing.
// ABOUTME: Provides async lookup() and sync lookup_html() to produce LookupResults.

use scraper::Html;
use url::Url;

use crate::error::LookupError;
use crate::models::LookupResult;
use crate::options::{ClientBuilder, Options};
use crate::parse::parse_results;
use crate::resource::fetch;

/// The Multitran lookup client.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Build the request URL for a phrase.
    ///
    /// The phrase goes into the `s` parameter as percent-encoded
    /// windows-1251 bytes (characters outside that repertoire become
    /// numeric character references, which is what the service accepts);
    /// `l1` carries the numeric language id.
    fn request_url(&self, phrase: &str) -> Result<Url, LookupError> {
        let url = Url::parse(&self.opts.base_url).map_err(|e| {
            LookupError::invalid_url(
                "Lookup",
                Some(anyhow::anyhow!("bad base URL {}: {}", self.opts.base_url, e)),
            )
        })?;
        let (encoded, _, _) = encoding_rs::WINDOWS_1251.encode(phrase);
        let phrase_query: String = url::form_urlencoded::byte_serialize(&encoded).collect();
        let mut url = url;
        url.set_query(Some(&format!(
            "s={}&l1={}",
            phrase_query,
            self.opts.lang.code()
        )));
        Ok(url)
    }

    /// Look up a phrase on Multitran and parse the results page.
    ///
    /// An empty `LookupResult` means the service had no translations; a
    /// structural error means the page no longer looks like a results page.
    pub async fn lookup(&self, phrase: &str) -> Result<LookupResult, LookupError> {
        if phrase.trim().is_empty() {
            return Err(LookupError::invalid_url(
                "Lookup",
                Some(anyhow::anyhow!("empty phrase")),
            ));
        }

        let url = self.request_url(phrase)?;
        let fetched = fetch(&self.http_client, url.as_str()).await?;
        let html = fetched.text();
        let doc = Html::parse_document(&html);

        let mut result = parse_results(&doc)?;
        result.phrase = phrase.to_string();
        result.url = fetched.final_url;
        Ok(result)
    }

    /// Parse an already-retrieved results page.
    pub fn lookup_html(&self, html: &str) -> Result<LookupResult, LookupError> {
        let doc = Html::parse_document(html);
        parse_results(&doc)
    }
}
