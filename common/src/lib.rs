//! Types shared by every ipsift crate: the input texts, the address family
//! filter, the CLI configuration and the error type.

pub mod config;
pub mod error;
pub mod input;
pub mod network;
