//! MMS APN settings for the rvoip stack
//!
//! This crate picks the access point an MMS transaction should use and
//! turns it into the three things the HTTP layer needs: the MMSC URL, an
//! optional proxy address and the proxy port.
//!
//! Candidate rows come either from an [`ApnSource`] (usually filtered by
//! subscription and access point name) or, once a data connection is up, as a
//! single APN handed over by the network layer:
//!
//! ```
//! use mms_apn_core::prelude::*;
//!
//! let candidates = vec![
//!     ApnRecord::new().with("type", "default,supl"),
//!     ApnRecord::new()
//!         .with("type", "mms")
//!         .with("mmsc", "http://mmsc.example.com/mms")
//!         .with("mmsproxy", "010.000.000.001")
//!         .with("mmsport", "8080"),
//! ];
//!
//! let settings = resolve(&candidates, APN_TYPE_MMS, "req-1").unwrap();
//! assert_eq!(settings.mmsc_url(), "http://mmsc.example.com/mms");
//! assert_eq!(settings.proxy_address(), Some("10.0.0.1"));
//! assert_eq!(settings.proxy_port(), 8080);
//! ```

// Declare modules
pub mod apn;
pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod parser;

// Re-export key public items
pub use apn::{
    resolve, ApnQuery, ApnRecord, ApnResolver, ApnSettings, ApnSource, ApnTable, NetworkApn,
    NetworkApnSetting, APN_TYPE_ALL, APN_TYPE_MMS, DEFAULT_PROXY_PORT,
};
pub use config::{ApnConfig, LogSettings};
pub use error::{Error, Result};
pub use logging::{setup_logging, LoggingConfig};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::apn::{
        resolve, ApnQuery, ApnRecord, ApnResolver, ApnSettings, ApnSource, ApnTable, NetworkApn,
        NetworkApnSetting, APN_TYPE_ALL, APN_TYPE_DEFAULT, APN_TYPE_MMS, APN_TYPE_SUPL,
        DEFAULT_PROXY_PORT,
    };
    pub use crate::config::ApnConfig;
    pub use crate::error::{Error, Result};
}
