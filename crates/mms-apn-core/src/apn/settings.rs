use std::fmt;

use serde::Serialize;

/// Proxy port used when an APN does not carry a usable one
pub const DEFAULT_PROXY_PORT: u16 = 80;

/// APN settings used for MMS transactions.
///
/// Built either by [`resolve`](crate::apn::resolver::resolve) from a set of
/// candidate rows or by [`ApnSettings::from_network_apn`] from a single
/// network-provided APN. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApnSettings {
    mmsc_url: String,
    proxy_address: Option<String>,
    proxy_port: u16,
    debug_text: String,
}

impl ApnSettings {
    pub fn new(
        mmsc_url: impl Into<String>,
        proxy_address: Option<String>,
        proxy_port: u16,
        debug_text: impl Into<String>,
    ) -> Self {
        Self {
            mmsc_url: mmsc_url.into(),
            proxy_address,
            proxy_port,
            debug_text: debug_text.into(),
        }
    }

    /// MMSC URL
    pub fn mmsc_url(&self) -> &str {
        &self.mmsc_url
    }

    /// MMSC proxy address, if the APN names one
    pub fn proxy_address(&self) -> Option<&str> {
        self.proxy_address.as_deref()
    }

    /// MMSC proxy port; [`DEFAULT_PROXY_PORT`] unless the APN supplied one
    pub fn proxy_port(&self) -> u16 {
        self.proxy_port
    }

    /// Description of the APN these settings came from
    pub fn debug_text(&self) -> &str {
        &self.debug_text
    }

    pub fn is_proxy_set(&self) -> bool {
        self.proxy_address.as_deref().map_or(false, |proxy| !proxy.is_empty())
    }
}

impl fmt::Display for ApnSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.mmsc_url,
            self.proxy_address.as_deref().unwrap_or("none"),
            self.proxy_port,
            self.debug_text
        )
    }
}
