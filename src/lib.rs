//! STOMP Messaging Protocol Primitives.
#![warn(missing_debug_implementations)]

pub mod frame;
pub mod header;

pub use header::Header;
