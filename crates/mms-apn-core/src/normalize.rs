//! Field normalization helpers used while selecting an APN.
//!
//! Everything here is a pure function of its input.

use std::borrow::Cow;

use crate::apn::record::{ApnRecord, APN_TYPE_ALL};
use crate::parser::uri::dotted_quad;

/// Strip leading and trailing characters at or below U+0020.
///
/// ASCII control bytes go along with spaces; non-ASCII whitespace such as
/// U+00A0 is kept.
pub fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Trim a possibly absent value with [`trim`].
pub fn trim_with_null_check(value: Option<&str>) -> Option<&str> {
    value.map(trim)
}

// Bytes that extend a dotted quad; a literal touching one of these is left alone.
fn is_quad_byte(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

/// Rewrite zero padded IPv4 literals embedded in `addr` to canonical form.
///
/// `010.000.000.001` becomes `10.0.0.1`, also inside a URL such as
/// `http://192.168.001.010:8080/mms`. A literal only qualifies when it is
/// four dot separated 1-3 digit octets, each at most 255, with no digit or dot
/// directly before or after it. Anything else is returned unchanged.
pub fn trim_address_zeros(addr: &str) -> Cow<'_, str> {
    let bytes = addr.as_bytes();
    let mut trimmed = String::new();
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let at_boundary = pos == 0 || !is_quad_byte(bytes[pos - 1]);
        if at_boundary && bytes[pos].is_ascii_digit() {
            if let Ok((rest, ip)) = dotted_quad(&bytes[pos..]) {
                let end = bytes.len() - rest.len();
                if rest.first().map_or(true, |c| !is_quad_byte(*c)) {
                    let canonical = ip.to_string();
                    if addr[pos..end] != canonical {
                        trimmed.push_str(&addr[copied..pos]);
                        trimmed.push_str(&canonical);
                        copied = end;
                    }
                    pos = end;
                    continue;
                }
            }
        }
        pos += 1;
    }

    if copied == 0 {
        Cow::Borrowed(addr)
    } else {
        trimmed.push_str(&addr[copied..]);
        Cow::Owned(trimmed)
    }
}

/// Whether an APN with the comma separated `types` can serve `request_type`.
///
/// An absent or empty type list serves everything, as does an [`APN_TYPE_ALL`]
/// entry. Tokens are trimmed and compared exactly.
pub fn is_valid_apn_type(types: Option<&str>, request_type: &str) -> bool {
    let types = match types {
        None | Some("") => return true,
        Some(types) => types,
    };
    types
        .split(',')
        .map(trim)
        .any(|apn_type| apn_type == request_type || apn_type == APN_TYPE_ALL)
}

/// Debug text for an APN: every non-empty column as `name=value`, in column
/// order, wrapped as `APN [...]`.
pub fn debug_text(record: &ApnRecord) -> String {
    let fields: Vec<String> = record
        .columns()
        .iter()
        .filter_map(|(name, value)| match value {
            Some(value) if !value.is_empty() => Some(format!("{name}={value}")),
            _ => None,
        })
        .collect();
    format!("APN [{}]", fields.join(" "))
}
