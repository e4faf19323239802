//! Behavioural tests spanning `ipsift-common` and `ipsift-core`.

mod action;
mod extraction;
