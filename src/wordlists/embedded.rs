//! Embedded word lists
//!
//! Default native pool compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/native_pool.rs"));
