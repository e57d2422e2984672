//! Conversion of an APN handed over by the network layer.
//!
//! When the data connection is already up, the network layer knows which APN
//! it brought up for MMS and hands that one APN over directly. No type
//! matching happens here and missing data yields `None` instead of an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::apn::settings::{ApnSettings, DEFAULT_PROXY_PORT};
use crate::normalize::{trim, trim_with_null_check};

/// An APN as described by the network layer.
///
/// The `Display` output is used verbatim as the resulting debug text.
pub trait NetworkApn: fmt::Display {
    /// MMSC URL, if the APN has one
    fn mmsc(&self) -> Option<&str>;

    /// MMS proxy address, if the APN has one
    fn mms_proxy_address(&self) -> Option<&str>;

    /// MMS proxy port; `None` when unspecified
    fn mms_proxy_port(&self) -> Option<u16>;
}

impl ApnSettings {
    /// Convert a network-provided APN into settings for making MMS HTTP
    /// requests.
    ///
    /// Returns `None` when the APN has no MMSC. The proxy address is only
    /// trimmed, and the MMSC is not checked for URI syntax.
    pub fn from_network_apn<A: NetworkApn + ?Sized>(apn: &A) -> Option<Self> {
        let mmsc_url = trim(apn.mmsc()?);
        if mmsc_url.is_empty() {
            return None;
        }

        let mut proxy_port = DEFAULT_PROXY_PORT;
        let proxy_address = trim_with_null_check(apn.mms_proxy_address()).filter(|p| !p.is_empty());
        if proxy_address.is_some() {
            if let Some(port) = apn.mms_proxy_port() {
                proxy_port = port;
            }
        }

        Some(ApnSettings::new(
            mmsc_url,
            proxy_address.map(str::to_string),
            proxy_port,
            apn.to_string(),
        ))
    }
}

/// Plain-data [`NetworkApn`] implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkApnSetting {
    pub entry_name: String,
    pub apn_name: String,
    pub apn_types: Vec<String>,
    pub mmsc: Option<String>,
    pub mms_proxy_address: Option<String>,
    pub mms_proxy_port: Option<u16>,
}

impl NetworkApnSetting {
    pub fn new(entry_name: impl Into<String>, apn_name: impl Into<String>) -> Self {
        Self {
            entry_name: entry_name.into(),
            apn_name: apn_name.into(),
            ..Default::default()
        }
    }

    pub fn with_apn_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.apn_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mmsc(mut self, mmsc: impl Into<String>) -> Self {
        self.mmsc = Some(mmsc.into());
        self
    }

    pub fn with_mms_proxy(mut self, address: impl Into<String>, port: Option<u16>) -> Self {
        self.mms_proxy_address = Some(address.into());
        self.mms_proxy_port = port;
        self
    }
}

impl NetworkApn for NetworkApnSetting {
    fn mmsc(&self) -> Option<&str> {
        self.mmsc.as_deref()
    }

    fn mms_proxy_address(&self) -> Option<&str> {
        self.mms_proxy_address.as_deref()
    }

    fn mms_proxy_port(&self) -> Option<u16> {
        self.mms_proxy_port
    }
}

impl fmt::Display for NetworkApnSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ApnSetting] {}, {}, {}, {}, {}, {}",
            self.entry_name,
            self.apn_name,
            self.apn_types.join(" | "),
            self.mmsc.as_deref().unwrap_or(""),
            self.mms_proxy_address.as_deref().unwrap_or(""),
            self.mms_proxy_port.map_or_else(|| "-1".to_string(), |port| port.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_apn() -> NetworkApnSetting {
        NetworkApnSetting::new("Operator MMS", "mms.op").with_apn_types(["mms"])
    }

    #[test]
    fn test_mmsc_required() {
        assert_eq!(ApnSettings::from_network_apn(&network_apn()), None);
        assert_eq!(ApnSettings::from_network_apn(&network_apn().with_mmsc("   ")), None);
    }

    #[test]
    fn test_basic_conversion() {
        let apn = network_apn().with_mmsc(" http://mmsc.op/mms ");
        let settings = ApnSettings::from_network_apn(&apn).unwrap();
        assert_eq!(settings.mmsc_url(), "http://mmsc.op/mms");
        assert_eq!(settings.proxy_address(), None);
        assert_eq!(settings.proxy_port(), DEFAULT_PROXY_PORT);
        assert_eq!(settings.debug_text(), apn.to_string());
    }

    #[test]
    fn test_control_characters_trimmed() {
        let apn = network_apn()
            .with_mmsc("\u{1}http://mmsc.op/mms\u{1}")
            .with_mms_proxy("\tproxy.op\u{0}", Some(8080));
        let settings = ApnSettings::from_network_apn(&apn).unwrap();
        assert_eq!(settings.mmsc_url(), "http://mmsc.op/mms");
        assert_eq!(settings.proxy_address(), Some("proxy.op"));
        assert_eq!(ApnSettings::from_network_apn(&network_apn().with_mmsc("\u{1}\u{2}")), None);
    }

    #[test]
    fn test_proxy_port_taken_when_specified() {
        let apn = network_apn()
            .with_mmsc("http://mmsc.op/mms")
            .with_mms_proxy(" proxy.op ", Some(8080));
        let settings = ApnSettings::from_network_apn(&apn).unwrap();
        assert_eq!(settings.proxy_address(), Some("proxy.op"));
        assert_eq!(settings.proxy_port(), 8080);
    }

    #[test]
    fn test_proxy_port_unspecified() {
        let apn = network_apn()
            .with_mmsc("http://mmsc.op/mms")
            .with_mms_proxy("proxy.op", None);
        let settings = ApnSettings::from_network_apn(&apn).unwrap();
        assert_eq!(settings.proxy_port(), DEFAULT_PROXY_PORT);
    }

    #[test]
    fn test_port_ignored_without_proxy() {
        let apn = network_apn()
            .with_mmsc("http://mmsc.op/mms")
            .with_mms_proxy("  ", Some(8080));
        let settings = ApnSettings::from_network_apn(&apn).unwrap();
        assert_eq!(settings.proxy_address(), None);
        assert_eq!(settings.proxy_port(), DEFAULT_PROXY_PORT);
    }

    #[test]
    fn test_display() {
        let apn = network_apn().with_mmsc("http://m/").with_mms_proxy("p", None);
        assert_eq!(apn.to_string(), "[ApnSetting] Operator MMS, mms.op, mms, http://m/, p, -1");
    }
}
