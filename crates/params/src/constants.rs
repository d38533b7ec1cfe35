//! Constants shared by every Dilithium-style parameter set

/// Polynomial degree
pub const DILITHIUM_N: usize = 256;

/// Prime modulus q = 2^23 - 2^13 + 1
pub const DILITHIUM_Q: u32 = 8380417;

/// Dropped bits in t
pub const DILITHIUM_D: u32 = 13;

/// Seed size for matrix A generation and secret sampling
pub const SEEDBYTES: usize = 32;

/// Collision-resistant hash output size
pub const CRHBYTES: usize = 64;

/// Hash output size for tr = H(pk)
pub const TRBYTES: usize = 64;

/// Per-signature randomness size
pub const RNDBYTES: usize = 32;

/// Challenge seed size
pub const CTILDEBYTES: usize = dchallenge_api::SEED_BYTES;

/// Largest ring degree whose positions can be drawn from single bytes
pub const MAX_RING_DEGREE: usize = 256;

/// Largest module rank accepted for K and L
pub const MAX_DIMENSION: usize = 16;

/// Largest secret coefficient bound accepted for ETA
pub const MAX_ETA: u32 = 16;

/// SHA3-256 digest width used by the iterated backend
pub const SHA3_OUTPUT_BYTES: usize = 32;

/// Default number of SHA3-256 digests in the iterated backend (128 bytes total)
pub const SHA3_ITERATIONS: usize = 4;

/// Rate of SHAKE256 in bytes; the native backend squeezes this much at a time
pub const SHAKE256_RATE: usize = 136;

/// One-in-N probability of the probabilistic rejection bypass
pub const BYPASS_ONE_IN: u8 = 10;

/// Maximum signing attempts
pub const MAX_SIGN_ABORTS: u16 = 1000;
