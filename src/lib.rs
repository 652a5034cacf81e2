// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! A standalone implementation of the Ristretto group built on top of the
//! Curve25519 twisted Edwards curve.
//!
//! Ristretto quotients the (cofactor-8) Edwards curve by its small-order
//! subgroup to produce a prime-order group of order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\),
//! without touching the underlying field or curve arithmetic. The public
//! surface is intentionally small: decode a 32-byte encoding to a group
//! element, encode a group element back to its unique 32-byte
//! representative, hash a 64-byte uniformly random string to a group
//! element, and compare group elements for equality in constant time.
//!
//! See [`ristretto`] for the group itself, [`edwards`] for the underlying
//! Edwards curve point representation, and [`field`] for the field
//! arithmetic both are built on.
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(non_snake_case)]

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub mod backend;
pub mod edwards;
pub mod errors;
pub mod field;
pub mod ristretto;
pub mod traits;

pub use crate::errors::RistrettoDecodeError;
pub use crate::ristretto::{CompressedRistretto, RistrettoPoint};
