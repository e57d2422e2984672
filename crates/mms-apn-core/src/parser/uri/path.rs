// Parser for URI path components (RFC 2396 section 3.3 / 5)

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::recognize,
    multi::{many0, many1},
    sequence::{pair, preceded},
};

use crate::parser::common_chars::{escaped, is_pchar, is_unreserved};
use crate::parser::ParseResult;

// Path characters: pchar / ";" / "/"
fn is_path_char(c: u8) -> bool {
    is_pchar(c) || c == b';' || c == b'/'
}

fn path_chars(input: &[u8]) -> ParseResult<&[u8]> {
    alt((escaped, take_while1(is_path_char)))(input)
}

// rel_segment = 1*( unreserved / escaped / ";" / "@" / "&" / "=" / "+" / "$" / "," )
fn is_rel_segment_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b';' | b'@' | b'&' | b'=' | b'+' | b'$' | b',')
}

fn rel_segment(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many1(alt((escaped, take_while1(is_rel_segment_char)))))(input)
}

/// abs_path = "/" path_segments
pub fn abs_path(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(preceded(tag(b"/"), many0(path_chars)))(input)
}

/// rel_path = rel_segment [ abs_path ]
///
/// The first segment cannot hold a colon, otherwise the reference would have
/// been read as `scheme ":"`.
pub fn rel_path(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(rel_segment, many0(abs_path)))(input)
}
