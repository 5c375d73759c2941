//! Console diagnostics for homomorphic-encryption contexts.
//!
//! Companion utilities for example programs built on an HE library binding:
//! - parameter banner (scheme, ring degree, coefficient-modulus chain)
//! - truncated vector/matrix display for decoded results
//!
//! Nothing here is cryptographic. The crate consumes read-only snapshots
//! (scheme tag, modulus bit counts, decoded f64 slots) produced by the
//! encryption library and renders them for the console.

pub mod display;
pub mod params;

pub use display::{
    int_to_hex_string, print_matrix, print_parameters, print_vector, write_matrix,
    write_parameters, write_vector,
};
pub use params::{EncryptionParams, Modulus, Scheme};
