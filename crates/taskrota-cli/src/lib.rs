//! taskrota CLI library.
//!
//! Exposes the remote listing client for integration testing.

pub mod client;
