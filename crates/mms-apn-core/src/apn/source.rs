//! Where candidate APN rows come from.
//!
//! The resolver does not care how rows are stored; it only asks an
//! [`ApnSource`] for the rows of one subscription, optionally narrowed to a
//! single access point name, and consumes them in the order returned.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::apn::record::ApnRecord;
use crate::error::Result;
use crate::normalize::trim;

/// Selection handed to an [`ApnSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApnQuery {
    /// Subscription whose APNs are wanted
    pub sub_id: i32,
    /// Exact access point name to match, if any
    pub apn_name: Option<String>,
}

impl ApnQuery {
    /// Build a query; `apn_name` is trimmed and dropped when blank.
    pub fn new(sub_id: i32, apn_name: Option<&str>) -> Self {
        let apn_name = apn_name
            .map(trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self { sub_id, apn_name }
    }

    /// Whether `record` passes the access point name filter
    pub fn matches(&self, record: &ApnRecord) -> bool {
        match &self.apn_name {
            Some(name) => record.apn() == Some(name.as_str()),
            None => true,
        }
    }
}

/// A provider of candidate APN rows
pub trait ApnSource {
    /// Return the rows selected by `query`, in preference order
    fn query(&self, query: &ApnQuery) -> Result<Vec<ApnRecord>>;
}

impl<T: ApnSource + ?Sized> ApnSource for &T {
    fn query(&self, query: &ApnQuery) -> Result<Vec<ApnRecord>> {
        (**self).query(query)
    }
}

impl<T: ApnSource + ?Sized> ApnSource for Box<T> {
    fn query(&self, query: &ApnQuery) -> Result<Vec<ApnRecord>> {
        (**self).query(query)
    }
}

impl<T: ApnSource + ?Sized> ApnSource for Arc<T> {
    fn query(&self, query: &ApnQuery) -> Result<Vec<ApnRecord>> {
        (**self).query(query)
    }
}

/// One row of an [`ApnTable`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApnRow {
    pub sub_id: i32,
    #[serde(flatten)]
    pub record: ApnRecord,
}

#[derive(Debug, Default, Deserialize)]
struct ApnTableDocument {
    #[serde(default)]
    apn: Vec<ApnRow>,
}

/// In-memory APN table.
///
/// Rows keep their insertion order. The TOML form is a list of `[[apn]]`
/// tables carrying `sub_id` plus any of the APN columns:
///
/// ```toml
/// [[apn]]
/// sub_id = 1
/// type = "default,mms"
/// apn = "internet"
/// mmsc = "http://mmsc.example.com/mms"
/// mmsproxy = "10.0.0.1"
/// mmsport = "8080"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApnTable {
    rows: Vec<ApnRow>,
}

impl ApnTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let document: ApnTableDocument = toml::from_str(document)?;
        Ok(Self { rows: document.apn })
    }

    /// Read and parse a TOML table file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_toml_str(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), rows = table.len(), "Loaded APN table");
        Ok(table)
    }

    /// Append a row for `sub_id`
    pub fn insert(&mut self, sub_id: i32, record: ApnRecord) {
        self.rows.push(ApnRow { sub_id, record });
    }

    /// Builder-style [`ApnTable::insert`]
    pub fn with_row(mut self, sub_id: i32, record: ApnRecord) -> Self {
        self.insert(sub_id, record);
        self
    }

    pub fn rows(&self) -> &[ApnRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ApnSource for ApnTable {
    fn query(&self, query: &ApnQuery) -> Result<Vec<ApnRecord>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.sub_id == query.sub_id && query.matches(&row.record))
            .map(|row| row.record.clone())
            .collect())
    }
}
