#![cfg(test)]
use ipsift_common::input::Texts;
use ipsift_common::network::family::IpFamily;
use ipsift_core::{extract, extract_addrs};
use std::collections::HashSet;
use std::net::IpAddr;

fn as_set(addrs: Vec<String>) -> HashSet<String> {
    addrs.into_iter().collect()
}

fn expect(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Addresses wrapped in the kind of punctuation logs and prose put around them.
const SURROUNDINGS: &[(&str, &str)] = &[
    ("", ""),
    ("host ", " up"),
    ("(", ")"),
    ("[", "]:8080"),
    ("src=", ","),
    ("\"", "\""),
    ("line\n", "\nnext"),
    ("ip:", ": up"),
    ("peer ", ": connection refused"),
];

#[test]
fn server_log_line() {
    let result = extract("Server at 192.168.1.1 connected to 10.0.0.1", None);
    assert_eq!(as_set(result), expect(&["192.168.1.1", "10.0.0.1"]));
}

#[test]
fn ipv6_survives_next_to_invalid_ipv4() {
    let result = extract("Host fe80::1 and invalid 256.256.256.256", None);
    assert_eq!(as_set(result), expect(&["fe80::1"]));
}

#[test]
fn list_input_is_deduplicated() {
    let texts: Texts = vec!["1.1.1.1".to_string(), "1.1.1.1".into(), "8.8.8.8".into()].into();
    let result = extract(texts, None);

    assert_eq!(result.len(), 2, "Expected duplicates to collapse: {result:?}");
    assert_eq!(as_set(result), expect(&["1.1.1.1", "8.8.8.8"]));
}

#[test]
fn family_filter_keeps_ipv4_only() {
    let result = extract("1.1.1.1 and ::1", Some(IpFamily::V4));
    assert_eq!(result, vec!["1.1.1.1"]);
}

#[test]
fn family_filter_keeps_ipv6_only() {
    let result = extract("1.1.1.1 and ::1", Some(IpFamily::V6));
    assert_eq!(result, vec!["::1"]);
}

#[test]
fn empty_inputs() {
    assert!(extract("", None).is_empty());
    assert!(extract(Vec::<String>::new(), None).is_empty());
    assert!(extract([""; 3], Some(IpFamily::V4)).is_empty());
}

#[test]
fn embedded_ipv4_is_found_in_any_surrounding() {
    for addr in ["0.0.0.0", "8.8.4.4", "172.16.254.1", "255.255.255.255"] {
        for (before, after) in SURROUNDINGS {
            let text = format!("{before}{addr}{after}");
            assert_eq!(extract(text.as_str(), None), vec![addr], "in {text:?}");
            assert_eq!(extract(text.as_str(), Some(IpFamily::V4)), vec![addr]);
            assert!(extract(text.as_str(), Some(IpFamily::V6)).is_empty());
        }
    }
}

#[test]
fn embedded_ipv6_is_found_in_any_surrounding() {
    for addr in ["::1", "fe80::1", "2001:db8::ff00:42:8329", "1:2:3:4:5:6:7:8"] {
        for (before, after) in SURROUNDINGS {
            let text = format!("{before}{addr}{after}");
            assert_eq!(extract(text.as_str(), None), vec![addr], "in {text:?}");
            assert_eq!(extract(text.as_str(), Some(IpFamily::V6)), vec![addr]);
            assert!(extract(text.as_str(), Some(IpFamily::V4)).is_empty());
        }
    }
}

#[test]
fn range_violations_never_appear() {
    let text = "999.999.999.999 256.1.1.1 1.1.1.256 300.300.300.300";
    assert!(extract(text, None).is_empty());
}

#[test]
fn tokens_glued_to_words_are_ignored() {
    let text = "build-id abc10.0.0.1 v1.2.3.4x cafe::1beef";
    assert!(extract(text, None).is_empty());
}

#[test]
fn mapped_ipv4_yields_only_the_ipv4() {
    let result = extract("dual-stack ::ffff:192.168.1.1 seen", None);
    assert_eq!(result, vec!["192.168.1.1"]);
}

#[test]
fn every_output_parses_back() {
    let text = "\
        2024-05-01T10:00:00Z accept 203.0.113.7 -> 2001:DB8:0:0:0:0:0:1\n\
        2024-05-01T10:00:01Z reject 198.51.100.23 -> fe80::a:b:c:d%eth0\n\
        2024-05-01T10:00:02Z accept 203.0.113.7 -> 2001:db8::1\n";

    let addrs: Vec<String> = extract(text, None);
    let unique: HashSet<&String> = addrs.iter().collect();
    assert_eq!(unique.len(), addrs.len());

    for addr in &addrs {
        let parsed: IpAddr = addr.parse().expect("output must be a valid address");
        assert_eq!(&parsed.to_string(), addr, "output must be canonical");
    }

    assert_eq!(
        as_set(addrs),
        expect(&["203.0.113.7", "198.51.100.23", "2001:db8::1", "fe80::a:b:c:d"])
    );
}

#[test]
fn string_and_typed_results_agree() {
    let text = "10.1.1.1 10.1.1.1 ::ffff:0:1 2001:db8::2";
    let strings: Vec<String> = extract(text, None);
    let typed: Vec<String> = extract_addrs(text, None).iter().map(ToString::to_string).collect();
    assert_eq!(strings, typed);
}
