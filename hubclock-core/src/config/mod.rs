//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fills them from an
//! embedded TOML file; a persistence layer may store them via `serde`.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
