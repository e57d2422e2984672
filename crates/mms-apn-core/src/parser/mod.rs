//! nom parsers for the textual fields of an APN record.

pub mod common_chars;
pub mod uri;

pub use uri::{is_valid_uri_reference, parse_uri_reference};

// Type alias for parser result
pub type ParseResult<'a, O> = nom::IResult<&'a [u8], O>;
