// ABOUTME: Main library entry point for the mltran Multitran lookup client.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, LookupResult, LookupError, ErrorCode, Lang, parse_results.

//! mltran - a dictionary lookup client for the Multitran translation service.
//!
//! This crate fetches a phrase's results page, parses the results table
//! into a typed graph (translations, topics, meanings with inline
//! annotations), and renders the graph as a plain-text report for terminal
//! display.
//!
//! # Example
//!
//! ```no_run
//! use mltran::{Client, LookupError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LookupError> {
//!     let client = Client::builder().build();
//!     let result = client.lookup("tea").await?;
//!     println!("{}", result.format_report());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod options;
pub mod parse;
pub mod report;
pub mod resource;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, LookupError};
pub use crate::models::{
    Comment, Context, LookupResult, Meaning, MeaningNode, Topic, Translation, TranslationHeader,
};
pub use crate::options::{ClientBuilder, Lang, Options};
pub use crate::parse::parse_results;
