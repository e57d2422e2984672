// Parser for URI scheme component (RFC 2396 section 3.1)
// scheme = alpha *( alpha / digit / "+" / "-" / "." )

use nom::{
    bytes::complete::{take_while, take_while_m_n},
    combinator::recognize,
    sequence::pair,
};

use crate::parser::ParseResult;

// Check if a byte is allowed in a scheme after the first character
fn is_scheme_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.')
}

/// Recognizes a scheme name, without the trailing colon.
pub fn scheme(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(
        take_while_m_n(1, 1, |c: u8| c.is_ascii_alphabetic()),
        take_while(is_scheme_char),
    ))(input)
}
