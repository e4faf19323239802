use crate::terminal::colors;
use colored::*;
use ipsift_common::network::family::IpFamily;
use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv6Addr};

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if ipv6_addr.is_loopback() {
        return "LO";
    }
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

/// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

pub fn ip_to_key_value_pair(ips: &BTreeSet<IpAddr>) -> Vec<(String, ColoredString)> {
    ips.iter().map(ip_to_detail).collect()
}

pub fn ip_to_detail(ip: &IpAddr) -> (String, ColoredString) {
    match ip {
        IpAddr::V4(ipv4_addr) => {
            let value = ipv4_addr.to_string().color(colors::IPV4_ADDR);
            (String::from("IPv4"), value)
        }
        IpAddr::V6(ipv6_addr) => {
            let ipv6_type = ipv6_to_type_str(ipv6_addr);
            let value = ipv6_addr.to_string().color(colors::IPV6_ADDR);
            (String::from(ipv6_type), value)
        }
    }
}

/// Number of addresses per family, skipping empty families.
pub fn family_counts(ips: &BTreeSet<IpAddr>) -> Vec<(String, ColoredString)> {
    [IpFamily::V4, IpFamily::V6]
        .into_iter()
        .filter_map(|family| {
            let count: usize = ips.iter().filter(|ip| family.matches(ip)).count();
            (count > 0).then(|| (family.to_string(), count.to_string().bold()))
        })
        .collect()
}
