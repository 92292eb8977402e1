//! Umbrella crate for the `contact-points` workspace.
//!
//! Re-exports the volume primitives from `cp-core` and the contact scanner
//! from `cp-contact`.

pub use cp_contact::*;
pub use cp_core::*;
