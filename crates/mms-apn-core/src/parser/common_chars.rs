use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1, take_while_m_n},
    combinator::recognize,
    sequence::pair,
};

use crate::parser::ParseResult;

// Character classes (RFC 2396 section 2, with RFC 2732 brackets in reserved)

// mark = "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"
pub(crate) fn is_mark(c: u8) -> bool {
    matches!(c, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

// Non-ASCII bytes are "other" characters and are accepted wherever unreserved is.
pub(crate) fn is_other(c: u8) -> bool {
    c >= 0x80
}

// unreserved = alphanum / mark
pub(crate) fn is_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || is_mark(c) || is_other(c)
}

// reserved = ";" / "/" / "?" / ":" / "@" / "&" / "=" / "+" / "$" / "," / "[" / "]"
pub(crate) fn is_reserved(c: u8) -> bool {
    matches!(
        c,
        b';' | b'/' | b'?' | b':' | b'@' | b'&' | b'=' | b'+' | b'$' | b',' | b'[' | b']'
    )
}

// pchar = unreserved / escaped / ":" / "@" / "&" / "=" / "+" / "$" / ","
pub(crate) fn is_pchar(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b':' | b'@' | b'&' | b'=' | b'+' | b'$' | b',')
}

// escaped = "%" hex hex
pub(crate) fn escaped(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(tag(b"%"), take_while_m_n(2, 2, |c: u8| c.is_ascii_hexdigit())))(input)
}

// uric = reserved / unreserved / escaped
pub(crate) fn uric(input: &[u8]) -> ParseResult<&[u8]> {
    alt((escaped, take_while1(|c: u8| is_reserved(c) || is_unreserved(c))))(input)
}
