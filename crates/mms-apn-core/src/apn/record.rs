//! Candidate APN rows as handed over by a record source.

use serde::{Deserialize, Serialize};

/// APN type requested for MMS transactions
pub const APN_TYPE_MMS: &str = "mms";
/// APN type for the default internet connection
pub const APN_TYPE_DEFAULT: &str = "default";
/// APN type for assisted GPS
pub const APN_TYPE_SUPL: &str = "supl";
/// APN type that matches every requested type
pub const APN_TYPE_ALL: &str = "*";

/// Column names of an APN row, in the order they are reported.
pub const APN_COLUMNS: [&str; 17] = [
    "type",
    "mmsc",
    "mmsproxy",
    "mmsport",
    "name",
    "apn",
    "bearer_bitmask",
    "protocol",
    "roaming_protocol",
    "authtype",
    "mvno_type",
    "mvno_match_data",
    "proxy",
    "port",
    "server",
    "user",
    "password",
];

/// One candidate APN row.
///
/// Fields are populated by column name at the source boundary. Absent and
/// empty values are both treated as "not set" during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApnRecord {
    /// Comma separated APN types this row serves
    #[serde(rename = "type")]
    pub apn_type: Option<String>,
    /// MMSC URL
    pub mmsc: Option<String>,
    /// MMS proxy address
    #[serde(rename = "mmsproxy")]
    pub mms_proxy: Option<String>,
    /// MMS proxy port
    #[serde(rename = "mmsport")]
    pub mms_port: Option<String>,
    /// Human readable entry name
    pub name: Option<String>,
    /// Access point name
    pub apn: Option<String>,
    pub bearer_bitmask: Option<String>,
    pub protocol: Option<String>,
    pub roaming_protocol: Option<String>,
    #[serde(rename = "authtype")]
    pub auth_type: Option<String>,
    pub mvno_type: Option<String>,
    pub mvno_match_data: Option<String>,
    pub proxy: Option<String>,
    pub port: Option<String>,
    pub server: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl ApnRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs. Unknown columns are ignored.
    pub fn from_columns<I, K, V>(columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::default();
        for (column, value) in columns {
            record.set(column.as_ref(), value);
        }
        record
    }

    /// Set a column by name, returning false if the column is unknown
    pub fn set(&mut self, column: &str, value: impl Into<String>) -> bool {
        match self.column_mut(column) {
            Some(slot) => {
                *slot = Some(value.into());
                true
            }
            None => false,
        }
    }

    /// Builder-style [`ApnRecord::set`]
    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Get a column value by name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns()
            .into_iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, value)| value)
    }

    pub fn apn_type(&self) -> Option<&str> {
        self.apn_type.as_deref()
    }

    pub fn mmsc(&self) -> Option<&str> {
        self.mmsc.as_deref()
    }

    pub fn mms_proxy(&self) -> Option<&str> {
        self.mms_proxy.as_deref()
    }

    pub fn mms_port(&self) -> Option<&str> {
        self.mms_port.as_deref()
    }

    pub fn apn(&self) -> Option<&str> {
        self.apn.as_deref()
    }

    /// All columns in [`APN_COLUMNS`] order, paired with their values
    pub fn columns(&self) -> [(&'static str, Option<&str>); 17] {
        [
            ("type", self.apn_type.as_deref()),
            ("mmsc", self.mmsc.as_deref()),
            ("mmsproxy", self.mms_proxy.as_deref()),
            ("mmsport", self.mms_port.as_deref()),
            ("name", self.name.as_deref()),
            ("apn", self.apn.as_deref()),
            ("bearer_bitmask", self.bearer_bitmask.as_deref()),
            ("protocol", self.protocol.as_deref()),
            ("roaming_protocol", self.roaming_protocol.as_deref()),
            ("authtype", self.auth_type.as_deref()),
            ("mvno_type", self.mvno_type.as_deref()),
            ("mvno_match_data", self.mvno_match_data.as_deref()),
            ("proxy", self.proxy.as_deref()),
            ("port", self.port.as_deref()),
            ("server", self.server.as_deref()),
            ("user", self.user.as_deref()),
            ("password", self.password.as_deref()),
        ]
    }

    fn column_mut(&mut self, column: &str) -> Option<&mut Option<String>> {
        let slot = match column {
            "type" => &mut self.apn_type,
            "mmsc" => &mut self.mmsc,
            "mmsproxy" => &mut self.mms_proxy,
            "mmsport" => &mut self.mms_port,
            "name" => &mut self.name,
            "apn" => &mut self.apn,
            "bearer_bitmask" => &mut self.bearer_bitmask,
            "protocol" => &mut self.protocol,
            "roaming_protocol" => &mut self.roaming_protocol,
            "authtype" => &mut self.auth_type,
            "mvno_type" => &mut self.mvno_type,
            "mvno_match_data" => &mut self.mvno_match_data,
            "proxy" => &mut self.proxy,
            "port" => &mut self.port,
            "server" => &mut self.server,
            "user" => &mut self.user,
            "password" => &mut self.password,
            _ => return None,
        };
        Some(slot)
    }
}
