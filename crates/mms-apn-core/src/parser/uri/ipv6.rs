use nom::{
    bytes::complete::{tag, take_while1},
    combinator::{map_res, opt, recognize},
    sequence::{delimited, pair, preceded},
};
use std::net::Ipv6Addr;
use std::str;

use crate::parser::ParseResult;

fn is_zone_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'~')
}

// IPv6reference = "[" IPv6address [ "%" zone ] "]"
// Recognizes the bracketed content and uses std::net parsing for validation.
pub fn ipv6_reference(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(delimited(
        tag(b"["),
        pair(
            map_res(
                take_while1(|c: u8| c.is_ascii_hexdigit() || c == b':' || c == b'.'),
                |bytes: &[u8]| {
                    str::from_utf8(bytes)
                        .map_err(|_| ())
                        .and_then(|s| s.parse::<Ipv6Addr>().map_err(|_| ()))
                },
            ),
            opt(preceded(tag(b"%"), take_while1(is_zone_char))),
        ),
        tag(b"]"),
    ))(input)
}
