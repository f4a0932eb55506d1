//! Response building for the clinic registry API.
//!
//! - [`records`] - Record listings, link groupings and creation messages

pub mod records;

pub use records::{created_message, group_links, record_json, records_response};
