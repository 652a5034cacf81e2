// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! The `u64` backend: field arithmetic using five 64-bit limbs in
//! radix \\(2\^{51}\\), and the curve constants derived from it.

pub mod constants;
pub mod field;
