// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Pluggable field/curve backends.
//!
//! The crate ships a single, portable backend (`serial::u64`, five
//! 51-bit limbs). It is kept in its own module, separate from the
//! group-theoretic layers built on top of it, so that the Ristretto
//! and Edwards layers never depend on limb width directly.

pub mod serial;
