//! Block cipher modes of operation
//!
//! Only ECB is provided.

pub mod ecb;

pub use ecb::*;
