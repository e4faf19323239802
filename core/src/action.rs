//! # Registered Actions
//!
//! Exposes the extractor to a workflow host as a named, self-describing
//! action. Hosts pass loosely typed JSON arguments; they are checked here
//! before any extraction happens.
//!
//! ```
//! use ipsift_core::action;
//! use serde_json::json;
//!
//! let spec = action::lookup("etl.extraction.extract_ip_addresses").unwrap();
//! let out = spec.call(json!({ "texts": "ping 8.8.8.8", "ip_version": 4 })).unwrap();
//! assert_eq!(out, json!(["8.8.8.8"]));
//! ```

use ipsift_common::error::{ExtractError, Result};
use ipsift_common::input::Texts;
use ipsift_common::network::family::IpFamily;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::extractor;

pub type Handler = fn(Value) -> Result<Value>;

/// Metadata a host uses to list and display an action, plus its entry point.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub namespace: &'static str,
    pub display_group: &'static str,
    #[serde(skip)]
    pub handler: Handler,
}

impl ActionSpec {
    /// `namespace.name`, the identifier hosts use to address the action.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    pub fn call(&self, args: Value) -> Result<Value> {
        debug!(action = self.name, "calling action");
        (self.handler)(args)
    }
}

pub const EXTRACT_IP_ADDRESSES: ActionSpec = ActionSpec {
    name: "extract_ip_addresses",
    title: "Extract IP addresses",
    description: "Extract unique IPv4 and IPv6 addresses from a list of strings.",
    namespace: "etl.extraction",
    display_group: "Data Extraction",
    handler: extract_ip_addresses,
};

static REGISTRY: &[ActionSpec] = &[EXTRACT_IP_ADDRESSES];

pub fn registry() -> &'static [ActionSpec] {
    REGISTRY
}

/// Finds an action by its bare or namespace-qualified name.
pub fn lookup(name: &str) -> Result<&'static ActionSpec> {
    REGISTRY
        .iter()
        .find(|spec| spec.name == name || spec.qualified_name() == name)
        .ok_or_else(|| ExtractError::UnknownAction(name.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractArgs {
    /// Text or list of texts to extract IP addresses from.
    pub texts: Texts,
    #[serde(default)]
    pub ip_version: Option<u8>,
}

impl ExtractArgs {
    pub fn from_value(args: Value) -> Result<Self> {
        serde_json::from_value(args).map_err(|e| ExtractError::InvalidArgument(e.to_string()))
    }

    pub fn family(&self) -> Result<Option<IpFamily>> {
        self.ip_version.map(IpFamily::try_from).transpose()
    }
}

/// Handler of [`EXTRACT_IP_ADDRESSES`]; returns a JSON array of addresses.
pub fn extract_ip_addresses(args: Value) -> Result<Value> {
    let args = ExtractArgs::from_value(args)?;
    let family = args.family()?;
    let addrs = extractor::extract(args.texts, family);
    Ok(Value::from(addrs))
}
