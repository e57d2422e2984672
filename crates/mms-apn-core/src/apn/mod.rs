/*!
APN selection for MMS

- [`record`]: candidate rows and APN type constants
- [`settings`]: the resolved [`ApnSettings`]
- [`resolver`]: selection over candidate rows, and loading through a source
- [`network`]: conversion of a single network-provided APN
- [`source`]: the record source boundary and an in-memory table
*/

pub mod network;
pub mod record;
pub mod resolver;
pub mod settings;
pub mod source;

pub use network::{NetworkApn, NetworkApnSetting};
pub use record::{ApnRecord, APN_COLUMNS, APN_TYPE_ALL, APN_TYPE_DEFAULT, APN_TYPE_MMS, APN_TYPE_SUPL};
pub use resolver::{resolve, ApnResolver};
pub use settings::{ApnSettings, DEFAULT_PROXY_PORT};
pub use source::{ApnQuery, ApnRow, ApnSource, ApnTable};
