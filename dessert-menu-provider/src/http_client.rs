//! Generic HTTP client tools
//!
//! One request, one response: sending, logging, status checking and JSON
//! decoding are shared here so the catalog client only builds URLs.
//! There is intentionally no retry loop; a failed lookup is reported to the
//! caller as-is.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Maximum number of bytes of a response body written to the log.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `method_name` - request method name, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any 2xx reply
    /// * `Err(FetchError::Timeout | FetchError::Network)` on transport failure
    /// * `Err(FetchError::HttpStatus)` for non-success statuses
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), FetchError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                FetchError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{method_name} {url} answered HTTP {}", status.as_u16());
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                detail: truncate_for_log(&body),
            });
        }

        let response_text = response.text().await.map_err(|e| FetchError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status.as_u16(), response_text))
    }

    /// Parse a JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(FetchError::Decode)` - malformed JSON, missing or mistyped fields
    pub fn parse_json<T>(response_text: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            FetchError::Decode {
                detail: e.to_string(),
            }
        })
    }
}

/// Truncate a body so logs and error details stay readable.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, FetchError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, FetchError> = HttpUtils::parse_json("<html>oops</html>");
        assert!(
            matches!(&result, Err(FetchError::Decode { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("{\"meals\":[]}"), "{\"meals\":[]}");
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(LOG_BODY_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", LOG_BODY_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_body_truncated_on_char_boundary() {
        let s = "é".repeat(LOG_BODY_LIMIT);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
