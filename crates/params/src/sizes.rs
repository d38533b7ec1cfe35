//! Derived byte sizes
//!
//! Every size is computed from the primitive constants on demand. Bit widths
//! follow the reference packing routines: `t1` keeps `bitlen(Q-1) - D` bits,
//! `t0` keeps `D`, `z` needs `log2(GAMMA1) + 1`, `w1` needs enough bits for
//! `(Q-1)/(2*GAMMA2) - 1` and secret coefficients need `bitlen(2*ETA)`.

use crate::builder::bit_length;
use crate::constants::{CRHBYTES, CTILDEBYTES, SEEDBYTES, TRBYTES};
use crate::set::ParameterSet;

impl ParameterSet {
    fn packed(&self, bits: u32) -> usize {
        self.ring_degree * bits as usize / 8
    }

    /// Bits per packed `t1` coefficient
    pub fn t1_bits(&self) -> u32 {
        bit_length(self.modulus - 1) - self.d
    }

    /// Bits per packed `t0` coefficient
    pub fn t0_bits(&self) -> u32 {
        self.d
    }

    /// Bits per packed `z` coefficient
    pub fn z_bits(&self) -> u32 {
        self.gamma1.trailing_zeros() + 1
    }

    /// Bits per packed `w1` coefficient
    pub fn w1_bits(&self) -> u32 {
        bit_length((self.modulus - 1) / (2 * self.gamma2) - 1)
    }

    /// Bits per packed secret coefficient
    pub fn eta_bits(&self) -> u32 {
        bit_length(2 * self.eta)
    }

    /// Packed `t1` polynomial
    pub fn poly_t1_packed_bytes(&self) -> usize {
        self.packed(self.t1_bits())
    }

    /// Packed `t0` polynomial
    pub fn poly_t0_packed_bytes(&self) -> usize {
        self.packed(self.t0_bits())
    }

    /// Packed `z` polynomial
    pub fn poly_z_packed_bytes(&self) -> usize {
        self.packed(self.z_bits())
    }

    /// Packed `w1` polynomial
    pub fn poly_w1_packed_bytes(&self) -> usize {
        self.packed(self.w1_bits())
    }

    /// Packed secret polynomial
    pub fn poly_eta_packed_bytes(&self) -> usize {
        self.packed(self.eta_bits())
    }

    /// Hint encoding: OMEGA positions plus one counter per row
    pub fn polyvec_h_packed_bytes(&self) -> usize {
        self.omega + self.k
    }

    /// Challenge seed length
    pub fn challenge_seed_bytes(&self) -> usize {
        CTILDEBYTES
    }

    /// `rho || t1`
    pub fn public_key_bytes(&self) -> usize {
        SEEDBYTES + self.k * self.poly_t1_packed_bytes()
    }

    /// `rho || key || tr || s1 || s2 || t0`
    pub fn secret_key_bytes(&self) -> usize {
        2 * SEEDBYTES
            + TRBYTES
            + (self.l + self.k) * self.poly_eta_packed_bytes()
            + self.k * self.poly_t0_packed_bytes()
    }

    /// `c~ || z || h`
    pub fn signature_bytes(&self) -> usize {
        CTILDEBYTES + self.l * self.poly_z_packed_bytes() + self.polyvec_h_packed_bytes()
    }

    /// Length of the message representative `mu`
    pub fn mu_bytes(&self) -> usize {
        CRHBYTES
    }
}
