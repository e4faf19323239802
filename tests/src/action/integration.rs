#![cfg(test)]
use ipsift_common::error::ExtractError;
use ipsift_core::action::{self, ExtractArgs};
use serde_json::{Value, json};

fn sorted(value: Value) -> anyhow::Result<Vec<String>> {
    let mut out: Vec<String> = serde_json::from_value(value)?;
    out.sort();
    Ok(out)
}

#[test]
fn qualified_call_matches_direct_extraction() -> anyhow::Result<()> {
    let spec = action::lookup("etl.extraction.extract_ip_addresses")?;
    let text = "Server at 192.168.1.1 connected to 10.0.0.1 via fe80::1";

    let via_action: Vec<String> = sorted(spec.call(json!({ "texts": text }))?)?;
    let mut direct: Vec<String> = ipsift_core::extract(text, None);
    direct.sort();

    assert_eq!(via_action, direct);
    Ok(())
}

#[test]
fn list_of_texts_is_deduplicated() -> anyhow::Result<()> {
    let spec = action::lookup("extract_ip_addresses")?;
    let out = spec.call(json!({ "texts": ["1.1.1.1", "1.1.1.1", "8.8.8.8"] }))?;

    assert_eq!(sorted(out)?, vec!["1.1.1.1", "8.8.8.8"]);
    Ok(())
}

#[test]
fn ip_version_filters() -> anyhow::Result<()> {
    let spec = action::lookup("extract_ip_addresses")?;

    let v4 = spec.call(json!({ "texts": "1.1.1.1 and ::1", "ip_version": 4 }))?;
    assert_eq!(v4, json!(["1.1.1.1"]));

    let v6 = spec.call(json!({ "texts": "1.1.1.1 and ::1", "ip_version": 6 }))?;
    assert_eq!(v6, json!(["::1"]));
    Ok(())
}

#[test]
fn malformed_arguments_fail_fast() {
    let spec = action::lookup("extract_ip_addresses").unwrap();

    let err = spec.call(json!({ "texts": true })).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidArgument(_)), "{err:?}");

    let err = spec.call(json!({ "texts": "1.1.1.1", "ip_version": 7 })).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidArgument(_)), "{err:?}");
}

#[test]
fn args_parse_into_family() -> anyhow::Result<()> {
    let args = ExtractArgs::from_value(json!({ "texts": "x", "ip_version": 6 }))?;
    assert_eq!(args.family()?, Some(ipsift_common::network::family::IpFamily::V6));

    let args = ExtractArgs::from_value(json!({ "texts": ["x"] }))?;
    assert_eq!(args.family()?, None);
    Ok(())
}

#[test]
fn unknown_action_is_reported() {
    let err = action::lookup("etl.extraction.extract_urls").unwrap_err();
    assert_eq!(err, ExtractError::UnknownAction("etl.extraction.extract_urls".into()));
}
