//! Address extraction for ipsift.
//!
//! * [`patterns`]: regexes that find address-shaped candidates.
//! * [`extractor`]: validates, filters and deduplicates candidates.
//! * [`action`]: the extractor registered as a callable action.

pub mod action;
pub mod extractor;
pub mod patterns;

pub use extractor::{extract, extract_addrs};
