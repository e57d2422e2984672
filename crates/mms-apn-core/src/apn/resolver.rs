//! APN selection over a set of candidate rows.

use tracing::{debug, error, info, info_span, trace, warn};

use crate::apn::record::ApnRecord;
use crate::apn::settings::{ApnSettings, DEFAULT_PROXY_PORT};
use crate::apn::source::{ApnQuery, ApnSource};
use crate::config::ApnConfig;
use crate::error::{Error, Result};
use crate::normalize::{debug_text, is_valid_apn_type, trim_address_zeros, trim_with_null_check};
use crate::parser::uri::is_valid_uri_reference;

/// Select the APN to use for `apn_type` out of `candidates`.
///
/// Candidates are examined in order and the first one that serves `apn_type`
/// and has a non-empty MMSC wins. A winning row whose MMSC is not a valid URI
/// reference aborts the whole selection with [`Error::InvalidMmscUrl`] rather
/// than falling through to later rows. An unparsable proxy port falls back to
/// [`DEFAULT_PROXY_PORT`].
///
/// `request_id` only tags the log output.
pub fn resolve<'a, I>(candidates: I, apn_type: &str, request_id: &str) -> Result<ApnSettings>
where
    I: IntoIterator<Item = &'a ApnRecord>,
{
    let span = info_span!("apn", request_id = %request_id);
    let _enter = span.enter();

    for (index, record) in candidates.into_iter().enumerate() {
        if !is_valid_apn_type(record.apn_type(), apn_type) {
            trace!(index, types = ?record.apn_type(), "APN does not serve {}", apn_type);
            continue;
        }

        let mmsc_url = match trim_with_null_check(record.mmsc()) {
            Some(url) if !url.is_empty() => trim_address_zeros(url),
            _ => {
                debug!(index, "Skipping APN without MMSC");
                continue;
            }
        };
        if !is_valid_uri_reference(&mmsc_url) {
            error!(index, "Invalid MMSC url {}", mmsc_url);
            return Err(Error::InvalidMmscUrl(mmsc_url.into_owned()));
        }

        let mut proxy_port = DEFAULT_PROXY_PORT;
        let proxy_address = match trim_with_null_check(record.mms_proxy()) {
            Some(proxy) if !proxy.is_empty() => {
                if let Some(port) = trim_with_null_check(record.mms_port()).filter(|p| !p.is_empty()) {
                    match port.parse::<u16>() {
                        Ok(port) => proxy_port = port,
                        Err(e) => {
                            warn!(index, "Invalid port {}, use {}: {}", port, DEFAULT_PROXY_PORT, e)
                        }
                    }
                }
                Some(trim_address_zeros(proxy).into_owned())
            }
            _ => None,
        };

        let settings = ApnSettings::new(mmsc_url, proxy_address, proxy_port, debug_text(record));
        info!(
            index,
            mmsc = %settings.mmsc_url(),
            proxy = ?settings.proxy_address(),
            port = settings.proxy_port(),
            "Selected APN"
        );
        return Ok(settings);
    }

    Err(Error::NoValidApn)
}

/// Loads MMS APN settings from an [`ApnSource`].
#[derive(Debug, Clone)]
pub struct ApnResolver<S> {
    config: ApnConfig,
    source: S,
}

impl<S: ApnSource> ApnResolver<S> {
    pub fn new(config: ApnConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ApnConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load APN settings for subscription `sub_id`.
    ///
    /// `apn_name` restricts the candidates to rows with that access point
    /// name; when `None` the configured name (if any) is used instead. A blank
    /// name means no restriction.
    pub fn load(&self, apn_name: Option<&str>, sub_id: i32, request_id: &str) -> Result<ApnSettings> {
        let apn_name = apn_name.or(self.config.apn_name.as_deref());
        info!(request_id, sub_id, "Loading APN using name {:?}", apn_name);

        let query = ApnQuery::new(sub_id, apn_name);
        let candidates = self.source.query(&query)?;
        debug!(request_id, count = candidates.len(), "Fetched APN candidates");

        resolve(&candidates, &self.config.apn_type, request_id)
    }
}
