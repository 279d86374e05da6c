//! Integration tests for the validation chain.
//!
//! Organized by behavior:
//! - `absence`: the required/optional gate shared by every check
//! - `checks`: per-check acceptance tables
//! - `chaining`: prefixes, `is_valid` callbacks and configuration faults
//! - `properties`: property-based invariants over every check

mod absence;
mod chaining;
mod checks;
mod support;
