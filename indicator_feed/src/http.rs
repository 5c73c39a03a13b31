//! Blocking HTTP access to the upstream sources.
//!
//! Every fetch goes through the [`HttpSource`] trait so the refresh cycle can
//! be driven by canned responses in tests. The production implementation is
//! a `reqwest` blocking client that always sends the configured user agent.
use std::time::Duration;

use indicator_common::{IndicatorError, Result};
use log::debug;
use reqwest::blocking::Client;

/// Something that can answer an HTTP GET with the response body as text.
pub trait HttpSource {
    /// Issues a GET for `url`; non-2xx statuses are errors.
    fn get_text(&self, url: &str) -> Result<String>;
}

impl<S: HttpSource + ?Sized> HttpSource for &S {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }
}

/// `reqwest` blocking client with a fixed user agent and request timeout.
pub struct ReqwestSource {
    client: Client,
}

impl ReqwestSource {
    /// Build a client sending `user_agent` and giving up after `timeout`.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| IndicatorError::Network {
                url: String::new(),
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

impl HttpSource for ReqwestSource {
    fn get_text(&self, url: &str) -> Result<String> {
        let network = |e: reqwest::Error| IndicatorError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        debug!("GET {}", url);
        let response = self.client.get(url).send().map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(IndicatorError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(network)
    }
}
