// Parser for the URI authority component (RFC 2396 section 3.2, RFC 2732)

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    combinator::{opt, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
};

use crate::parser::common_chars::{escaped, is_unreserved};
use crate::parser::ParseResult;

use super::ipv6::ipv6_reference;

// userinfo = *( unreserved / escaped / ";" / ":" / "&" / "=" / "+" / "$" / "," )
fn is_userinfo_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b';' | b':' | b'&' | b'=' | b'+' | b'$' | b',')
}

fn userinfo(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(alt((escaped, take_while1(is_userinfo_char)))))(input)
}

// reg_name = 1*( unreserved / escaped / "$" / "," / ";" / ":" / "@" / "&" / "=" / "+" )
fn is_reg_name_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b'$' | b',' | b';' | b':' | b'@' | b'&' | b'=' | b'+')
}

fn reg_name(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(alt((escaped, take_while1(is_reg_name_char)))))(input)
}

// server with an IP literal host: [ userinfo "@" ] IPv6reference [ ":" port ]
fn ip_literal_server(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((
        opt(terminated(userinfo, tag(b"@"))),
        ipv6_reference,
        opt(preceded(tag(b":"), take_while(|c: u8| c.is_ascii_digit()))),
    )))(input)
}

/// authority = server / reg_name
///
/// Hostnames, IPv4 literals and ports are all covered by `reg_name`; only
/// bracketed IPv6 hosts need the server form. May match the empty string.
pub fn authority(input: &[u8]) -> ParseResult<&[u8]> {
    alt((ip_literal_server, reg_name))(input)
}

/// net_path = "//" authority [ abs_path ]
///
/// An empty authority is accepted only when something follows it
/// (`file:///x`, `http://?q`); a bare `//` is rejected.
pub fn net_path(input: &[u8]) -> ParseResult<&[u8]> {
    let (rest, (auth, path)) =
        preceded(tag(b"//"), pair(authority, opt(super::path::abs_path)))(input)?;
    if auth.is_empty() && path.is_none() && rest.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }
    Ok((rest, &input[..input.len() - rest.len()]))
}
