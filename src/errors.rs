// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Error types.
//!
//! Per the decoding discipline spelled out for [`CompressedRistretto::decompress`]
//! (see [`crate::ristretto`]), there is exactly one way decoding can fail, and the
//! public API deliberately does not distinguish *why* — whether the encoding was
//! non-canonical, negative, or simply not on the curve. Surfacing that distinction
//! would both leak timing information through differently-shaped call sites and
//! invite callers to "fix up" a malformed encoding instead of rejecting it.

use core::fmt;

/// An error indicating that a 32-byte value was not the canonical Ristretto
/// encoding of a group element.
///
/// This type deliberately carries no fields: every possible rejection reason
/// (non-canonical field encoding, negative sign, or failing the curve
/// validity check) collapses into the same value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RistrettoDecodeError;

impl fmt::Display for RistrettoDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid Ristretto encoding")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RistrettoDecodeError {}
