// Declare URI sub-modules
pub mod authority;
pub mod ipv4;
pub mod ipv6;
pub mod path;
pub mod reference;
pub mod scheme;

// Re-export relevant parsers from sub-modules
pub use ipv4::dotted_quad;
pub use reference::{is_valid_uri_reference, parse_uri_reference};
