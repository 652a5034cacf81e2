// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Serial (non-vectorized) backends.

pub mod u64;
