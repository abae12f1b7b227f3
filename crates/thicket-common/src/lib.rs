//! Common utilities for Thicket.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal warnings
//! - **Fetcher** - blocking HTTP GET for loading remote markup

pub mod net;
pub mod warning;
