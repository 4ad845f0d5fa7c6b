//! Embedded word sets
//!
//! Word sets compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/small.rs"));
include!(concat!(env!("OUT_DIR"), "/standard.rs"));
