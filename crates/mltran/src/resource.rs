// ABOUTME: HTTP fetching for Multitran result pages with size limits.
// ABOUTME: Decodes response bodies using the Content-Type charset with detection fallback.

use bytes::Bytes;

use crate::error::LookupError;

/// Maximum allowed response body size (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body to UTF-8 text. Multitran declares its charset in the
    /// Content-Type header (historically windows-1251); when it does not,
    /// the encoding is detected from the bytes.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Fetch a results page, enforcing status and size limits.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<FetchResult, LookupError> {
    let response = client.get(url).send().await.map_err(|e| {
        LookupError::fetch(
            "Fetch",
            Some(anyhow::anyhow!("request failed: {}: {}", url, e)),
        )
    })?;

    let status = response.status();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    if !status.is_success() {
        return Err(LookupError::fetch(
            "Fetch",
            Some(anyhow::anyhow!("unexpected status {} for {}", status, url)),
        ));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(LookupError::fetch(
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let body = response.bytes().await.map_err(|e| {
        LookupError::fetch("Fetch", Some(anyhow::anyhow!("reading body failed: {}", e)))
    })?;
    if body.len() > MAX_CONTENT_LENGTH {
        return Err(LookupError::fetch(
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    Ok(FetchResult {
        status: status.as_u16(),
        final_url,
        content_type,
        body,
    })
}
