/// Operation catalog.
///
/// Each sub-module adds a small set of methods to `EnomClient` that build
/// parameters from typed inputs, delegate to the transport, and interpret the
/// response fields. No operation depends on state from a previous call beyond
/// what the caller threads through (e.g. an order id returned by `purchase`).

pub mod attributes;
pub mod domains;
pub mod hosts;
pub mod renewal;
pub mod whois;
