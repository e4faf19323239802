//! Candidate patterns for IPv4 and IPv6 addresses.
//!
//! The patterns only describe what an address *looks like*. Whether a
//! candidate really is an address is decided afterwards by the standard
//! parser in [`crate::extractor`]. The `regex` crate matches in linear time,
//! so long runs of hex digits and colons cannot trigger backtracking blowups.

use std::sync::LazyLock;

use regex::Regex;

/// Dotted quad with every octet limited to 0-255 and no leading zeros.
pub static IPV4_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\b",
    )
    .expect("valid ipv4 candidate regex")
});

/// Colon-separated hex groups, at least two colons, at most nine groups.
///
/// No `\b` here: an IPv6 address may start or end with `:`, where a word
/// boundary never holds. Matches may also swallow a separator colon
/// (`ip:fe80::1`, `fe80::1: refused`); [`trim_match`] cuts those off.
pub static IPV6_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9a-f]{0,4}(?::[0-9a-f]{0,4}){2,8}").expect("valid ipv6 candidate regex")
});

/// All candidates of one text: IPv4 matches first, then IPv6 matches.
pub fn candidates(text: &str) -> impl Iterator<Item = &str> {
    ipv4_candidates(text).chain(ipv6_candidates(text))
}

pub fn ipv4_candidates(text: &str) -> impl Iterator<Item = &str> {
    IPV4_CANDIDATE.find_iter(text).map(|m| m.as_str())
}

pub fn ipv6_candidates(text: &str) -> impl Iterator<Item = &str> {
    IPV6_CANDIDATE
        .find_iter(text)
        .filter_map(|m| trim_match(text, m.start(), m.end()))
        .filter(|&(start, end)| stands_alone(text, start, end))
        .map(|(start, end)| &text[start..end])
        .filter(|candidate| candidate.bytes().any(|b| b.is_ascii_hexdigit()))
}

/// Narrows a raw IPv6 match to the address it contains.
///
/// * After a word, the first colon is a separator: `ip:fe80::1` and
///   `ip:::1` keep what follows it.
/// * Hex glued to a preceding word belongs to that word: `id:fe80::1` keeps
///   what follows the first single colon. A glued `::` (`std::`) is dropped.
/// * Otherwise a single leading or trailing colon is a separator, not part
///   of the address. `::` at either end is kept.
fn trim_match(text: &str, mut start: usize, mut end: usize) -> Option<(usize, usize)> {
    let raw: &str = &text[start..end];
    let glued: bool = text[..start].chars().next_back().is_some_and(is_word_char);

    if glued && raw.starts_with(':') {
        start += 1;
    } else if glued {
        let colon: usize = raw.find(':')?;
        if raw[colon..].starts_with("::") {
            return None;
        }
        start += colon + 1;
    } else if raw.starts_with(':') && !raw.starts_with("::") {
        start += 1;
    }

    let trimmed: &str = &text[start..end];
    if trimmed.ends_with(':') && !trimmed.ends_with("::") {
        end -= 1;
    }

    (start < end).then_some((start, end))
}

/// A match glued to a longer word (`xfe80::1`, `fe80::1g`) is not a candidate,
/// nor is one running into a dotted quad (`::ffff:192.168.1.1`).
fn stands_alone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let mut rest = text[end..].chars();
    let after = rest.next();

    let into_dotted_quad: bool = after == Some('.') && rest.next().is_some_and(|c| c.is_ascii_digit());

    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) && !into_dotted_quad
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
