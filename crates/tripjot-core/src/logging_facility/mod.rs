//! Logging facility for tripjot
//!
//! Single initialization point for the tracing subscriber.

pub mod init;

pub use init::{init, Profile};
