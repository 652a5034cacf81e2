// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

#![allow(non_snake_case)]

//! An implementation of [Ristretto][ristretto_main], which provides a
//! prime-order group on top of a cofactor-8 Edwards curve.
//!
//! # The Ristretto Group
//!
//! Ristretto is Mike Hamburg's Decaf construction, adapted to work with
//! cofactor-8 curves such as Curve25519. Most cryptographic protocols want
//! a prime-order group; elliptic curve groups with complete, constant-time
//! addition formulas (such as Edwards curves) usually have a small
//! cofactor instead. Ristretto closes that gap by presenting the quotient
//! group \\( \mathcal E / \mathcal E\[4\] \\) as if it were the curve
//! itself: every `RistrettoPoint` is really a coset of the 4-torsion
//! subgroup, but `encode`, `decode`, and equality are all defined so that
//! the coset — not any particular representative of it — is what callers
//! observe.
//!
//! ## Encoding and decoding
//!
//! Encoding is done by converting an in-memory `RistrettoPoint` to a
//! [`CompressedRistretto`], a typed wrapper around `[u8; 32]`, via
//! [`RistrettoPoint::compress`]. Decoding goes the other way via
//! [`CompressedRistretto::decompress`], which returns
//! `Err(RistrettoDecodeError)` for any input that is not the unique
//! canonical encoding of some group element.
//!
//! ## Equality
//!
//! Testing equality of points in projective coordinates ordinarily
//! requires an expensive field inversion to bring both points to affine
//! form. Ristretto's cross-multiplied equality check (`ct_eq`) avoids
//! that inversion entirely, and remains constant-time and coset-invariant.
//!
//! ## Hashing to the group
//!
//! [`RistrettoPoint::from_uniform_bytes`] maps a 64-byte uniformly random
//! string to a group element using two applications of a Ristretto-flavored
//! Elligator2 map, summed. Composed with a wide-output hash function (see
//! [`RistrettoPoint::hash_from_bytes`] / [`RistrettoPoint::from_hash`]
//! under the `digest` feature), this gives a hash-to-group construction
//! indifferentiable from a random oracle.
//!
//! [ristretto_main]: https://ristretto.group/

use core::borrow::Borrow;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "digest")]
use digest::generic_array::typenum::U64;
#[cfg(feature = "digest")]
use digest::Digest;

#[cfg(feature = "rand_core")]
use rand_core::{CryptoRng, RngCore};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::constants;
use crate::edwards::EdwardsPoint;
use crate::errors::RistrettoDecodeError;
use crate::field::FieldElement;
use crate::traits::Identity;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// A Ristretto point, in its compressed 32-byte wire format.
///
/// The Ristretto encoding is canonical: two points are equal if and only
/// if their encodings are equal, so `CompressedRistretto` can be compared
/// byte-for-byte once decoding has validated it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompressedRistretto(pub [u8; 32]);

impl ConstantTimeEq for CompressedRistretto {
    fn ct_eq(&self, other: &CompressedRistretto) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl CompressedRistretto {
    /// Copy the bytes of this `CompressedRistretto`.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// View this `CompressedRistretto` as an array of bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Construct a `CompressedRistretto` from a slice of bytes.
    ///
    /// # Panics
    ///
    /// If the input `bytes` slice does not have a length of 32.
    pub fn from_slice(bytes: &[u8]) -> CompressedRistretto {
        let mut tmp = [0u8; 32];
        tmp.copy_from_slice(bytes);
        CompressedRistretto(tmp)
    }

    /// Attempt to decompress to a `RistrettoPoint`.
    ///
    /// # Errors
    ///
    /// Returns [`RistrettoDecodeError`] if `self` was not the canonical
    /// encoding of a Ristretto group element: either the 32 bytes are not
    /// the canonical reduced encoding of a field element less than `p`,
    /// the encoded field element is negative (its low bit is set), or the
    /// decoded candidate point does not pass the final validity check
    /// (step 6 below). The three causes are deliberately not
    /// distinguished in the return value — see [`RistrettoDecodeError`].
    ///
    /// All of the checks below are combined via bitwise OR into a single
    /// mask before the final branch, so no intermediate check
    /// short-circuits the computation of the others.
    pub fn decompress(&self) -> Result<RistrettoPoint, RistrettoDecodeError> {
        // Step 1. Check s for validity:
        // 1.a) s must be 32 bytes (guaranteed by the type system)
        // 1.b) s < p
        // 1.c) s is nonnegative
        //
        // The decoding routine below ignores the high bit, so the only
        // possible failure for 1.b) is if someone encodes s in 0..18 as
        // s+p in 2^255-19..2^255-1. That is caught by converting back to
        // bytes and checking against the original input, since the
        // encoding routine is canonical.
        let s = FieldElement::from_bytes(self.as_bytes());
        let s_bytes_check = s.to_bytes();
        let s_encoding_is_canonical = s_bytes_check[..].ct_eq(self.as_bytes());
        let s_is_negative = s.is_negative();

        // Step 2. Compute (X:Y:Z:T).
        let one = FieldElement::one();
        let ss = s.square();
        let u1 = &one - &ss; //  1 + as², where a = -1, d = -121665/121666
        let u2 = &one + &ss; //  1 - as²
        let u2_sqr = u2.square(); // (1 - as²)²

        // v == ad(1+as²)² - (1-as²)²
        let v = &(&(-&constants::EDWARDS_D) * &u1.square()) - &u2_sqr;

        let (ok, I) = (&v * &u2_sqr).invsqrt(); // 1/sqrt(v*u2²)

        let Dx = &I * &u2; // 1/sqrt(v)
        let Dy = &I * &(&Dx * &v); // 1/u2

        // x == |2s/sqrt(v)| == +sqrt(4s²/(ad(1+as²)² - (1-as²)²))
        let mut x = &(&s + &s) * &Dx;
        let x_is_negative = x.is_negative();
        x.conditional_negate(x_is_negative);

        // y == (1-as²)/(1+as²)
        let y = &u1 * &Dy;

        // t == ((1+as²) sqrt(4s²/(ad(1+as²)² - (1-as²)²)))/(1-as²)
        let t = &x * &y;

        let is_valid = !s_is_negative
            & s_encoding_is_canonical
            & ok
            & !t.is_negative()
            & !y.is_zero();

        if is_valid.into() {
            Ok(RistrettoPoint(EdwardsPoint {
                X: x,
                Y: y,
                Z: one,
                T: t,
            }))
        } else {
            Err(RistrettoDecodeError)
        }
    }
}

impl Identity for CompressedRistretto {
    fn identity() -> CompressedRistretto {
        CompressedRistretto([0u8; 32])
    }
}

impl Default for CompressedRistretto {
    fn default() -> CompressedRistretto {
        CompressedRistretto::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedRistretto {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// ------------------------------------------------------------------------
// Constants
// ------------------------------------------------------------------------

/// The canonical encoding of the Ristretto basepoint.
pub const RISTRETTO_BASEPOINT_COMPRESSED: CompressedRistretto = CompressedRistretto([
    0xe2, 0xf2, 0xae, 0x0a, 0x6a, 0xbc, 0x4e, 0x71, 0xa8, 0x84, 0xa9, 0x61, 0xc5, 0x00, 0x51, 0x5f,
    0x58, 0xe3, 0x0b, 0x6a, 0xa5, 0x82, 0xdd, 0x8d, 0xb6, 0xa6, 0x59, 0x45, 0xe0, 0x8d, 0x2d, 0x76,
]);

/// The Ristretto basepoint, as a `RistrettoPoint`.
///
/// This is the same literal extended-coordinates point as
/// `crate::edwards::ED25519_BASEPOINT_POINT`: decoding
/// `RISTRETTO_BASEPOINT_COMPRESSED` lands on that representative of the
/// basepoint coset.
pub const RISTRETTO_BASEPOINT_POINT: RistrettoPoint =
    RistrettoPoint(crate::edwards::ED25519_BASEPOINT_POINT);

// ------------------------------------------------------------------------
// Internal point representation
// ------------------------------------------------------------------------

/// A `RistrettoPoint` represents a point in the Ristretto group for
/// Curve25519. Ristretto, a variant of Decaf, constructs a prime-order
/// group as a quotient group of a subgroup of (the Edwards form of)
/// Curve25519.
///
/// Internally, a `RistrettoPoint` is implemented as a wrapper type around
/// `EdwardsPoint`, with custom equality, compression, and decompression
/// routines to account for the quotient. This means that operations on
/// `RistrettoPoint`s are exactly as fast as operations on `EdwardsPoint`s.
#[derive(Copy, Clone)]
pub struct RistrettoPoint(pub(crate) EdwardsPoint);

impl RistrettoPoint {
    /// Compress this point using the Ristretto encoding.
    ///
    /// This is total: every `RistrettoPoint`, regardless of which
    /// Edwards representative of its coset is stored internally, encodes
    /// to the same 32 bytes (see the module-level coset-invariance
    /// discussion and the tests in this module).
    pub fn compress(&self) -> CompressedRistretto {
        let mut X = self.0.X;
        let mut Y = self.0.Y;
        let Z = &self.0.Z;
        let T = &self.0.T;

        let u1 = &(Z + &Y) * &(Z - &Y);
        let u2 = &X * &Y;
        // u1 * u2² is always square (it's a product of the Ristretto
        // square-root hypotheses), so the `ok` flag is ignored here.
        let (_, invsqrt) = (&u1 * &u2.square()).invsqrt();
        let i1 = &invsqrt * &u1;
        let i2 = &invsqrt * &u2;
        let z_inv = &i1 * &(&i2 * T);
        let mut den_inv = i2;

        let iX = &X * &constants::SQRT_M1;
        let iY = &Y * &constants::SQRT_M1;
        let ristretto_magic = &constants::INVSQRT_A_MINUS_D;
        let enchanted_denominator = &i1 * ristretto_magic;

        let rotate = (T * &z_inv).is_negative();

        X.conditional_assign(&iY, rotate);
        Y.conditional_assign(&iX, rotate);
        den_inv.conditional_assign(&enchanted_denominator, rotate);

        Y.conditional_negate((&X * &z_inv).is_negative());

        let mut s = &den_inv * &(Z - &Y);
        let s_is_negative = s.is_negative();
        s.conditional_negate(s_is_negative);

        CompressedRistretto(s.to_bytes())
    }

    /// The Ristretto-flavored Elligator2 map.
    ///
    /// Takes a field element `r0` (the high bit of whose canonical
    /// encoding the caller is responsible for having already cleared, see
    /// [`RistrettoPoint::from_uniform_bytes`]) and returns an `EdwardsPoint`
    /// on the curve. Every branch below ("was N_s/D square", "should s
    /// be negated") is an arithmetic conditional move, never an `if` on
    /// the field element itself — a literal branch here would leak
    /// whether `r0` landed in the image of the square map.
    fn elligator_ristretto_flavor(r_0: &FieldElement) -> RistrettoPoint {
        let i = &constants::SQRT_M1;
        let d = &constants::EDWARDS_D;
        let one_minus_d_sq = &constants::ONE_MINUS_EDWARDS_D_SQUARED;
        let d_minus_one_sq = &constants::EDWARDS_D_MINUS_ONE_SQUARED;
        let mut c = constants::MINUS_ONE;

        let one = FieldElement::one();
        let r = i * &r_0.square();
        let N_s = &(&r + &one) * one_minus_d_sq;
        let D = &(&c - &(d * &r)) * &(&r + d);

        let (Ns_D_is_sq, mut s) = FieldElement::sqrt_ratio_i(&N_s, &D);
        let mut s_prime = &s * r_0;
        let s_prime_is_pos = !s_prime.is_negative();
        s_prime.conditional_negate(s_prime_is_pos);

        s.conditional_assign(&s_prime, !Ns_D_is_sq);
        c.conditional_assign(&r, !Ns_D_is_sq);

        let N_t = &(&(&c * &(&r - &one)) * d_minus_one_sq) - &D;
        let s_sq = s.square();

        let w0 = &(&s + &s) * &D;
        let w1 = &N_t * &constants::SQRT_AD_MINUS_ONE;
        let w2 = &one - &s_sq;
        let w3 = &one + &s_sq;

        RistrettoPoint(EdwardsPoint {
            X: &w0 * &w3,
            Y: &w2 * &w1,
            Z: &w1 * &w3,
            T: &w0 * &w2,
        })
    }

    /// Map a 64-byte uniformly random string to a `RistrettoPoint`.
    ///
    /// The input is split into two 32-byte halves, each (after masking
    /// off the top bit, matching `FieldElement::from_bytes`'s convention)
    /// passed through the Ristretto-flavored Elligator2 map; the two
    /// resulting points are added. Applying the map twice and summing is
    /// what makes the composite map indifferentiable from a random
    /// oracle rather than merely "a" map to the curve.
    ///
    /// This function is total: every 64-byte input produces a valid
    /// group element.
    pub fn from_uniform_bytes(bytes: &[u8; 64]) -> RistrettoPoint {
        let mut r_1_bytes = [0u8; 32];
        r_1_bytes.copy_from_slice(&bytes[0..32]);
        let r_1 = FieldElement::from_bytes(&r_1_bytes);
        let R_1 = RistrettoPoint::elligator_ristretto_flavor(&r_1);

        let mut r_2_bytes = [0u8; 32];
        r_2_bytes.copy_from_slice(&bytes[32..64]);
        let r_2 = FieldElement::from_bytes(&r_2_bytes);
        let R_2 = RistrettoPoint::elligator_ristretto_flavor(&r_2);

        &R_1 + &R_2
    }

    /// Return a `RistrettoPoint` chosen uniformly at random using the
    /// supplied cryptographically secure RNG.
    #[cfg(feature = "rand_core")]
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut uniform_bytes = [0u8; 64];
        rng.fill_bytes(&mut uniform_bytes);
        RistrettoPoint::from_uniform_bytes(&uniform_bytes)
    }

    /// Hash an arbitrary-length message to a `RistrettoPoint`, using the
    /// supplied 64-byte-output hash function `D` and its default
    /// construction.
    ///
    /// # Example
    ///
    /// ```
    /// use sha2::Sha512;
    /// use ristretto255::ristretto::RistrettoPoint;
    ///
    /// let msg = "To really appreciate architecture, you may even need to commit a murder";
    /// let _point: RistrettoPoint = RistrettoPoint::hash_from_bytes::<Sha512>(msg.as_bytes());
    /// ```
    #[cfg(feature = "digest")]
    pub fn hash_from_bytes<D>(input: &[u8]) -> RistrettoPoint
    where
        D: Digest<OutputSize = U64> + Default,
    {
        let mut hash = D::default();
        hash.update(input);
        RistrettoPoint::from_hash(hash)
    }

    /// Construct a `RistrettoPoint` from an existing, already-fed hash
    /// state with a 64-byte output.
    #[cfg(feature = "digest")]
    pub fn from_hash<D>(hash: D) -> RistrettoPoint
    where
        D: Digest<OutputSize = U64> + Default,
    {
        let mut output = [0u8; 64];
        output.copy_from_slice(hash.finalize().as_slice());
        RistrettoPoint::from_uniform_bytes(&output)
    }
}

impl Identity for RistrettoPoint {
    fn identity() -> RistrettoPoint {
        RistrettoPoint(EdwardsPoint::identity())
    }
}

impl Default for RistrettoPoint {
    fn default() -> RistrettoPoint {
        RistrettoPoint::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for RistrettoPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for RistrettoPoint {
    /// Test equality between two `RistrettoPoint`s, treating points that
    /// lie in the same 4-torsion coset as equal regardless of which
    /// Edwards representative each side happens to store.
    ///
    /// # Returns
    ///
    /// * `Choice(1)` if the two `RistrettoPoint`s represent the same
    ///   group element;
    /// * `Choice(0)` otherwise.
    fn ct_eq(&self, other: &RistrettoPoint) -> Choice {
        let X1Y2 = &self.0.X * &other.0.Y;
        let Y1X2 = &self.0.Y * &other.0.X;
        let X1X2 = &self.0.X * &other.0.X;
        let Y1Y2 = &self.0.Y * &other.0.Y;

        X1Y2.ct_eq(&Y1X2) | X1X2.ct_eq(&Y1Y2)
    }
}

impl PartialEq for RistrettoPoint {
    fn eq(&self, other: &RistrettoPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for RistrettoPoint {}

// ------------------------------------------------------------------------
// Group arithmetic
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b RistrettoPoint> for &'a RistrettoPoint {
    type Output = RistrettoPoint;

    fn add(self, other: &'b RistrettoPoint) -> RistrettoPoint {
        RistrettoPoint(&self.0 + &other.0)
    }
}

define_add_variants!(LHS = RistrettoPoint, RHS = RistrettoPoint, Output = RistrettoPoint);

impl<'b> AddAssign<&'b RistrettoPoint> for RistrettoPoint {
    fn add_assign(&mut self, rhs: &'b RistrettoPoint) {
        *self = (self as &RistrettoPoint) + rhs;
    }
}

define_add_assign_variants!(LHS = RistrettoPoint, RHS = RistrettoPoint);

impl<'a, 'b> Sub<&'b RistrettoPoint> for &'a RistrettoPoint {
    type Output = RistrettoPoint;

    fn sub(self, other: &'b RistrettoPoint) -> RistrettoPoint {
        RistrettoPoint(&self.0 - &other.0)
    }
}

define_sub_variants!(LHS = RistrettoPoint, RHS = RistrettoPoint, Output = RistrettoPoint);

impl<'b> SubAssign<&'b RistrettoPoint> for RistrettoPoint {
    fn sub_assign(&mut self, rhs: &'b RistrettoPoint) {
        *self = (self as &RistrettoPoint) - rhs;
    }
}

define_sub_assign_variants!(LHS = RistrettoPoint, RHS = RistrettoPoint);

impl<T> Sum<T> for RistrettoPoint
where
    T: Borrow<RistrettoPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(RistrettoPoint::identity(), |acc, item| &acc + item.borrow())
    }
}

impl<'a> Neg for &'a RistrettoPoint {
    type Output = RistrettoPoint;

    fn neg(self) -> RistrettoPoint {
        RistrettoPoint(-&self.0)
    }
}

impl Neg for RistrettoPoint {
    type Output = RistrettoPoint;

    fn neg(self) -> RistrettoPoint {
        -&self
    }
}

impl ConditionallySelectable for RistrettoPoint {
    fn conditional_select(a: &RistrettoPoint, b: &RistrettoPoint, choice: Choice) -> RistrettoPoint {
        RistrettoPoint(EdwardsPoint::conditional_select(&a.0, &b.0, choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// A random field element that is a valid encoding but is not on the
    /// Ristretto curve.
    const BAD_COMPRESSED: CompressedRistretto = CompressedRistretto([
        0x04, 0xfe, 0xdf, 0x98, 0xa7, 0xfa, 0x0a, 0x68, 0x84, 0x92, 0xbd, 0x59, 0x08, 0x07, 0xa7,
        0x03, 0x9e, 0xd1, 0xf6, 0xf2, 0xe1, 0xd9, 0xe2, 0xa4, 0xa4, 0x51, 0x47, 0x36, 0xf3, 0xc3,
        0xa9, 0x17,
    ]);

    fn four_torsion() -> [EdwardsPoint; 4] {
        let one = FieldElement::one();
        let zero = FieldElement::zero();
        let minus_one = constants::MINUS_ONE;
        let i = constants::SQRT_M1;
        [
            // identity
            EdwardsPoint { X: zero, Y: one, Z: one, T: zero },
            // (0, -1)
            EdwardsPoint { X: zero, Y: minus_one, Z: one, T: zero },
            // (i, 0)
            EdwardsPoint { X: i, Y: zero, Z: one, T: zero },
            // (-i, 0)
            EdwardsPoint { X: -&i, Y: zero, Z: one, T: zero },
        ]
    }

    #[test]
    fn ct_eq_on_bytes() {
        let zeros = [0u8; 32];
        let mut one = [0u8; 32];
        one[0] = 1;
        assert_eq!(zeros.ct_eq(&zeros).unwrap_u8(), 1);
        assert_eq!(zeros.ct_eq(&one).unwrap_u8(), 0);
    }

    #[test]
    fn basepoint_decompresses() {
        let bp = RISTRETTO_BASEPOINT_COMPRESSED.decompress().unwrap();
        assert_eq!(bp.compress(), RISTRETTO_BASEPOINT_COMPRESSED);
        assert!(bp.ct_eq(&RISTRETTO_BASEPOINT_POINT).unwrap_u8() == 1);
    }

    #[test]
    fn identity_roundtrips() {
        let encoded = CompressedRistretto::identity();
        let p = encoded.decompress().unwrap();
        assert_eq!(p.compress(), encoded);
        assert_eq!(p.compress().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn invalid_canonical_encoding_is_rejected() {
        assert!(BAD_COMPRESSED.decompress().is_err());
    }

    #[test]
    fn noncanonical_field_encoding_is_rejected() {
        // 1 encoded as 1 + (2^255 - 19) = 2^255 - 18: a non-canonical
        // representative of 1, which still decodes to an s-value of 1
        // once contracted -- so the canonicalization check must reject it
        // even though naive expansion would treat it as "s = 1".
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xee;
        bytes[31] = 0x7f;
        let repr = CompressedRistretto(bytes);
        assert!(repr.decompress().is_err());
    }

    #[test]
    fn encode_decode_roundtrips_for_sums_of_basepoint() {
        let B = RISTRETTO_BASEPOINT_POINT;
        let mut acc = RistrettoPoint::identity();
        for _ in 0..16 {
            let encoded = acc.compress();
            let decoded = encoded.decompress().unwrap();
            assert!(decoded.ct_eq(&acc).unwrap_u8() == 1);
            assert_eq!(decoded.compress(), encoded);
            acc = &acc + &B;
        }
    }

    #[test]
    fn coset_representatives_encode_identically() {
        let B = RISTRETTO_BASEPOINT_POINT;
        let base_encoding = B.compress();
        for torsion in four_torsion().iter() {
            let shifted = RistrettoPoint(&B.0 + torsion);
            assert_eq!(shifted.compress(), base_encoding);
            assert!(shifted.ct_eq(&B).unwrap_u8() == 1);
        }
    }

    #[test]
    fn elligator_image_is_well_formed() {
        for seed in 0u8..8 {
            let mut bytes = [0u8; 32];
            bytes[0] = seed;
            bytes[17] = seed.wrapping_mul(37);
            let r = FieldElement::from_bytes(&bytes);
            let p = RistrettoPoint::elligator_ristretto_flavor(&r);
            let encoded = p.compress();
            assert!(encoded.decompress().is_ok());
        }
    }

    #[test]
    fn from_uniform_bytes_is_total_and_roundtrips() {
        for seed in 0u8..8 {
            let mut bytes = [0u8; 64];
            bytes[0] = seed;
            bytes[40] = seed.wrapping_mul(61);
            let p = RistrettoPoint::from_uniform_bytes(&bytes);
            let encoded = p.compress();
            let decoded = encoded.decompress().unwrap();
            assert!(decoded.ct_eq(&p).unwrap_u8() == 1);
        }
    }

    #[test]
    fn addition_is_commutative_and_identity_neutral() {
        let B = RISTRETTO_BASEPOINT_POINT;
        let id = RistrettoPoint::identity();
        assert!((&B + &id).ct_eq(&B).unwrap_u8() == 1);
        assert!((&B + &B).ct_eq(&(&B + &B)).unwrap_u8() == 1);
        assert!((&B + &(-&B)).ct_eq(&id).unwrap_u8() == 1);
    }

    #[cfg(feature = "digest")]
    #[test]
    fn hash_from_bytes_is_deterministic() {
        use sha2::Sha512;
        let a = RistrettoPoint::hash_from_bytes::<Sha512>(b"ristretto");
        let b = RistrettoPoint::hash_from_bytes::<Sha512>(b"ristretto");
        assert!(a.ct_eq(&b).unwrap_u8() == 1);
        let c = RistrettoPoint::hash_from_bytes::<Sha512>(b"different");
        assert!(a.ct_eq(&c).unwrap_u8() == 0);
    }

    #[test]
    fn decode_success_rate_is_roughly_one_eighth() {
        use rand::RngCore;
        let mut rng = rand::thread_rng();
        let trials = 4096;
        let mut successes = 0usize;
        for _ in 0..trials {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            if CompressedRistretto(bytes).decompress().is_ok() {
                successes += 1;
            }
        }
        let rate = successes as f64 / trials as f64;
        // Expected ~1/8; generous tolerance to keep this non-flaky.
        assert!(rate > 0.06 && rate < 0.19, "decode success rate {} out of expected range", rate);
    }

    proptest! {
        /// spec.md §8: "for all 32-byte strings b: if decode(b) = (true, P)
        /// then encode(P) = b".
        #[test]
        fn decode_roundtrips_whenever_it_succeeds(bytes in vec(any::<u8>(), 32)) {
            let mut arr = [0u8; 32];
            arr.copy_from_slice(&bytes);
            if let Ok(p) = CompressedRistretto(arr).decompress() {
                prop_assert_eq!(p.compress().to_bytes().to_vec(), bytes);
            }
        }

        /// spec.md §8: "for all Ristretto points P: decode(encode(P)) =
        /// (true, Q) with ct_eq(P, Q) = 1". Since `from_uniform_bytes` is
        /// total, it is used here to range over arbitrary group elements.
        #[test]
        fn encode_decode_roundtrips_for_arbitrary_points(bytes in vec(any::<u8>(), 64)) {
            let mut arr = [0u8; 64];
            arr.copy_from_slice(&bytes);
            let p = RistrettoPoint::from_uniform_bytes(&arr);
            let encoded = p.compress();
            let decoded = encoded.decompress().unwrap();
            prop_assert!(decoded.ct_eq(&p).unwrap_u8() == 1);
            prop_assert_eq!(decoded.compress(), encoded);
        }

        /// spec.md §8: "for all Edwards representatives ... in the same
        /// 4-torsion coset: encode produces the same 32 bytes; ct_eq
        /// returns 1", quantified over arbitrary base points instead of
        /// just the basepoint.
        #[test]
        fn coset_representatives_encode_identically_for_arbitrary_points(
            bytes in vec(any::<u8>(), 64),
            torsion_idx in 0usize..4,
        ) {
            let mut arr = [0u8; 64];
            arr.copy_from_slice(&bytes);
            let p = RistrettoPoint::from_uniform_bytes(&arr);
            let base_encoding = p.compress();
            let torsion = four_torsion()[torsion_idx];
            let shifted = RistrettoPoint(&p.0 + &torsion);
            prop_assert_eq!(shifted.compress(), base_encoding);
            prop_assert!(shifted.ct_eq(&p).unwrap_u8() == 1);
        }
    }
}
