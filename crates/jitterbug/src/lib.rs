//! Top-level facade crate for jitterbug.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use jitterbug_core::*;
}

pub mod server {
    pub use jitterbug_server::*;
}
