//! ipapi.co client
//!
//! One request per call, no retry. An API-level failure comes back as a
//! 200 with `"error": true` and a `reason`, which is surfaced as
//! [`LookupError::Api`].

use reqwest::Client;

use crate::ip::{is_valid_ip, IpLookup, IpRecord, LookupError};

/// Environment variable overriding the API base URL.
pub const IPAPI_URL_ENV: &str = "IRONFENCE_IPAPI_URL";

pub const DEFAULT_IPAPI_URL: &str = "https://ipapi.co";

pub struct IpApiClient {
    client: Client,
    base_url: String,
}

impl Default for IpApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_IPAPI_URL)
    }
}

impl IpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for `IRONFENCE_IPAPI_URL`, or the public ipapi.co endpoint.
    pub fn from_env() -> Self {
        Self::new(ipapi_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, url: &str) -> Result<IpRecord, LookupError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("User-Agent", "ironfence-tools")
            .send()
            .await?;

        let record: IpRecord = response.json().await?;
        if record.error {
            return Err(LookupError::Api(
                record
                    .reason
                    .unwrap_or_else(|| "IP lookup failed".to_string()),
            ));
        }
        Ok(record)
    }
}

impl IpLookup for IpApiClient {
    async fn lookup(&self, ip: &str) -> Result<IpRecord, LookupError> {
        let ip = ip.trim();
        if !is_valid_ip(ip) {
            return Err(LookupError::InvalidIp(ip.to_string()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Looking up IP information for {}", ip);

        self.fetch(&format!("{}/{}/json/", self.base_url, ip)).await
    }

    async fn lookup_self(&self) -> Result<IpRecord, LookupError> {
        let record = self.fetch(&format!("{}/json/", self.base_url)).await?;
        if record.ip.as_deref().is_none_or(str::is_empty) {
            return Err(LookupError::IpNotDetected);
        }
        Ok(record)
    }
}

/// API base URL from the environment, falling back to ipapi.co.
pub fn ipapi_url() -> String {
    std::env::var(IPAPI_URL_ENV).unwrap_or_else(|_| DEFAULT_IPAPI_URL.to_string())
}
