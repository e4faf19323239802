//! # Address Extraction
//!
//! Finds every IPv4 and IPv6 address in a set of texts.
//!
//! Extraction runs in three stages:
//! 1. **Match**: [`patterns::candidates`] yields substrings shaped like addresses.
//! 2. **Validate**: each candidate goes through `str::parse::<IpAddr>`. Candidates
//!    the parser rejects (octet out of range, two `::` runs, too many groups)
//!    are dropped silently.
//! 3. **Collect**: survivors are filtered by family and deduplicated.
//!
//! The family of an address comes from the parsed value, so it does not
//! matter which of the two patterns found it.

use std::collections::BTreeSet;
use std::net::IpAddr;

use ipsift_common::input::Texts;
use ipsift_common::network::family::IpFamily;
use tracing::{debug, trace};

use crate::patterns;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    candidates: usize,
    malformed: usize,
    filtered: usize,
}

/// Extracts the unique addresses of `texts` in canonical string form.
///
/// When `family` is set only addresses of that family are returned.
/// The result is ordered by address, IPv4 before IPv6.
pub fn extract(texts: impl Into<Texts>, family: Option<IpFamily>) -> Vec<String> {
    extract_addrs(texts, family)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Same as [`extract`], returning the parsed addresses.
pub fn extract_addrs(texts: impl Into<Texts>, family: Option<IpFamily>) -> BTreeSet<IpAddr> {
    let texts: Texts = texts.into();
    let mut tally = Tally::default();
    let mut addrs: BTreeSet<IpAddr> = BTreeSet::new();

    for candidate in texts.iter().flat_map(patterns::candidates) {
        tally.candidates += 1;

        let Some(addr) = parse_candidate(candidate) else {
            tally.malformed += 1;
            continue;
        };

        if family.is_some_and(|f| !f.matches(&addr)) {
            tally.filtered += 1;
            continue;
        }

        addrs.insert(addr);
    }

    debug!(
        texts = texts.len(),
        candidates = tally.candidates,
        malformed = tally.malformed,
        filtered = tally.filtered,
        unique = addrs.len(),
        "extraction finished"
    );

    addrs
}

fn parse_candidate(candidate: &str) -> Option<IpAddr> {
    match candidate.parse::<IpAddr>() {
        Ok(addr) => Some(addr),
        Err(e) => {
            trace!(candidate, error = %e, "discarding malformed candidate");
            None
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
