// ABOUTME: Configuration options for the mltran client including the Lang table and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::client::Client;

/// Default Multitran endpoint. Multitran operates mirror hosts, so the base
/// URL is configurable.
pub const DEFAULT_BASE_URL: &str = "https://www.multitran.com/m.exe";

/// Translation language, mapped to Multitran's numeric language id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    English,
    German,
    French,
    Italian,
}

impl Lang {
    /// The numeric id Multitran expects in the `l1` query parameter.
    pub fn code(self) -> u32 {
        match self {
            Lang::English => 1,
            Lang::German => 3,
            Lang::French => 4,
            Lang::Italian => 23,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lang::English => "en",
            Lang::German => "de",
            Lang::French => "fr",
            Lang::Italian => "it",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Lang::English),
            "de" => Ok(Lang::German),
            "fr" => Ok(Lang::French),
            "it" => Ok(Lang::Italian),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Configuration options for the mltran client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub base_url: String,
    pub lang: Lang,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "mltran/0.1".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: Lang::default(),
            http_client: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Point the client at a different Multitran endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Set the translation language.
    pub fn lang(mut self, lang: Lang) -> Self {
        self.opts.lang = lang;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}
