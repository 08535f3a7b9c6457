//! Core RAID capacity, fault-tolerance, and block placement primitives.
//!
//! Everything in this crate is a pure function over its inputs: callers hand
//! in a RAID level and an array shape, and get back an immutable record
//! (capacity figures or an illustrative block layout). There is no I/O, no
//! shared state, and no error taxonomy; input validation against the
//! [`catalog`] constraints is the caller's job.

pub mod catalog;
pub mod layout;
pub mod level;
pub mod metrics;
