use nom::{
    bytes::complete::{tag, take_while_m_n},
    combinator::{map, map_res},
    sequence::tuple,
};
use std::net::Ipv4Addr;
use std::str;

use crate::parser::ParseResult;

// dec-octet = 1*3DIGIT, value 0-255, leading zeros allowed
fn octet(input: &[u8]) -> ParseResult<u8> {
    map_res(take_while_m_n(1, 3, |c: u8| c.is_ascii_digit()), |digits: &[u8]| {
        str::from_utf8(digits)
            .map_err(|_| ())
            .and_then(|s| s.parse::<u8>().map_err(|_| ()))
    })(input)
}

/// IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
///
/// Octets may carry leading zeros (`010.000.000.001`); the parsed address
/// is always in canonical form. Does not check what follows the last octet.
pub fn dotted_quad(input: &[u8]) -> ParseResult<Ipv4Addr> {
    map(
        tuple((
            octet,
            tag(b"."),
            octet,
            tag(b"."),
            octet,
            tag(b"."),
            octet,
        )),
        |(a, _, b, _, c, _, d)| Ipv4Addr::new(a, b, c, d),
    )(input)
}
