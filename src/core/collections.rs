//! Collection types tuned for the vertex arena and adjacency bookkeeping.
//!
//! All hashing uses `rustc_hash` (non-cryptographic); keys are internal arena
//! handles or coordinates generated by the complex itself, never untrusted input.

mod aliases;
mod helpers;
mod key_maps;

pub use aliases::*;
pub use helpers::*;
pub use key_maps::*;
