// RFC 2396 URI-reference recognizer
//
// URI-reference = [ absoluteURI / relativeURI ] [ "#" fragment ]
// absoluteURI   = scheme ":" ( hier_part / opaque_part )
// relativeURI   = ( net_path / abs_path / rel_path ) [ "?" query ]

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{not, opt, recognize},
    multi::{many0, many1},
    sequence::{pair, preceded, terminated, tuple},
};

use crate::parser::common_chars::uric;
use crate::parser::ParseResult;

use super::authority::net_path;
use super::path::{abs_path, rel_path};
use super::scheme::scheme;

// query = *uric
fn query(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(uric))(input)
}

// fragment = *uric
fn fragment(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(uric))(input)
}

// net_path / abs_path, where a leading "//" always introduces an authority
fn net_or_abs_path(input: &[u8]) -> ParseResult<&[u8]> {
    alt((net_path, preceded(not(tag(b"//")), abs_path)))(input)
}

// hier_part = ( net_path / abs_path ) [ "?" query ]
fn hier_part(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(net_or_abs_path, opt(preceded(tag(b"?"), query))))(input)
}

// opaque_part = uric_no_slash *uric
fn opaque_part(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(preceded(not(tag(b"/")), many1(uric)))(input)
}

/// absoluteURI = scheme ":" ( hier_part / opaque_part )
pub fn absolute_uri(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((
        terminated(scheme, tag(b":")),
        alt((hier_part, opaque_part)),
    )))(input)
}

/// relativeURI = ( net_path / abs_path / rel_path ) [ "?" query ]
///
/// Every component is optional, so this also matches the empty reference
/// and bare `?query` references.
pub fn relative_uri(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(
        opt(alt((net_or_abs_path, rel_path))),
        opt(preceded(tag(b"?"), query)),
    ))(input)
}

/// URI-reference = [ absoluteURI / relativeURI ] [ "#" fragment ]
///
/// Returns the recognized prefix; callers that need the whole input to be a
/// reference must check the remainder is empty.
pub fn parse_uri_reference(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(
        alt((absolute_uri, relative_uri)),
        opt(preceded(tag(b"#"), fragment)),
    ))(input)
}

// Non-ASCII characters count as "other" unless they are whitespace or controls
fn has_excluded_other(value: &str) -> bool {
    value
        .chars()
        .any(|c| !c.is_ascii() && (c.is_whitespace() || c.is_control()))
}

/// Whether `value` is, in its entirety, a syntactically valid URI reference.
pub fn is_valid_uri_reference(value: &str) -> bool {
    if has_excluded_other(value) {
        return false;
    }
    matches!(parse_uri_reference(value.as_bytes()), Ok((rest, _)) if rest.is_empty())
}
