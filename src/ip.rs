//! IP lookup records and the datacenter / VPN heuristic.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATACENTER_KEYWORDS: &[&str] = &["amazon", "google", "microsoft", "digitalocean"];
const VPN_PROXY_KEYWORDS: &[&str] = &["vpn", "proxy", "hosting", "cloud"];

/// Rendered in place of any field the lookup did not return.
pub const UNKNOWN: &str = "Unknown";

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("valid regex")
});

static IPV6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").expect("valid regex"));

/// Dotted-quad IPv4 or fully expanded eight-group IPv6.
pub fn is_valid_ip(ip: &str) -> bool {
    IPV4_RE.is_match(ip) || IPV6_RE.is_match(ip)
}

/// Geolocation record as returned by ipapi.co. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRecord {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

impl IpRecord {
    pub fn classify(&self) -> IpClass {
        classify_org(self.org.as_deref())
    }

    /// `"City, Region Country"`, with `Unknown` for a missing city.
    pub fn location(&self) -> String {
        format!(
            "{}, {} {}",
            present(&self.city).unwrap_or(UNKNOWN),
            present(&self.region).unwrap_or(""),
            present(&self.country_name).unwrap_or(""),
        )
        .trim_end()
        .to_string()
    }

    pub fn ip_or_unknown(&self) -> &str {
        present(&self.ip).unwrap_or(UNKNOWN)
    }

    pub fn org_or_unknown(&self) -> &str {
        present(&self.org).unwrap_or(UNKNOWN)
    }

    pub fn timezone_or_unknown(&self) -> &str {
        present(&self.timezone).unwrap_or(UNKNOWN)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpClass {
    Normal,
    PotentialVpnProxy,
    Datacenter,
}

impl IpClass {
    pub fn label(&self) -> &'static str {
        match self {
            IpClass::Normal => "Normal",
            IpClass::PotentialVpnProxy => "Potential VPN/Proxy",
            IpClass::Datacenter => "Datacenter IP",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IpClass::Normal => "#00ffff",
            IpClass::PotentialVpnProxy => "#ffaa00",
            IpClass::Datacenter => "#ff6600",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IpClass::Normal => "Standard residential/business IP address.",
            IpClass::PotentialVpnProxy => {
                "This IP may be associated with VPN, proxy, or hosting services."
            }
            IpClass::Datacenter => "This appears to be a datacenter or cloud service IP address.",
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies an organisation name. Datacenter keywords take precedence
/// over VPN/proxy keywords; no organisation means [`IpClass::Normal`].
pub fn classify_org(org: Option<&str>) -> IpClass {
    let Some(org) = org else {
        return IpClass::Normal;
    };
    let org = org.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| org.contains(k));

    if mentions(DATACENTER_KEYWORDS) {
        IpClass::Datacenter
    } else if mentions(VPN_PROXY_KEYWORDS) {
        IpClass::PotentialVpnProxy
    } else {
        IpClass::Normal
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Please enter a valid IP address")]
    InvalidIp(String),
    #[error("{0}")]
    Api(String),
    #[error("Could not detect IP address")]
    IpNotDetected,
    #[cfg(feature = "lookup")]
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Source of geolocation records.
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait IpLookup {
    /// Looks up a specific address.
    async fn lookup(&self, ip: &str) -> Result<IpRecord, LookupError>;

    /// Looks up the caller's own public address.
    async fn lookup_self(&self) -> Result<IpRecord, LookupError>;
}

/// The lookup result currently on display.
///
/// Responses are shown in arrival order: whichever finishes last wins,
/// with no request sequencing.
#[derive(Debug, Default)]
pub struct LookupPanel {
    current: Option<Result<IpRecord, String>>,
}

impl LookupPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, outcome: Result<IpRecord, LookupError>) {
        #[cfg(feature = "tracing")]
        if let Err(e) = &outcome {
            tracing::warn!("IP lookup failed: {}", e);
        }
        self.current = Some(outcome.map_err(|e| e.to_string()));
    }

    pub fn current(&self) -> Option<&Result<IpRecord, String>> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
