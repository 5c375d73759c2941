//! Read-only snapshots of encryption-context metadata.
//!
//! These mirror what the encryption library exposes through its context
//! query interface: the scheme tag, the ring degree, the coefficient-modulus
//! chain with per-prime bit counts, and (for BFV) the plaintext modulus.
//! The formatter only ever reads them; nothing in this crate mutates a
//! snapshot after construction.

/// Scheme family tag, as reported by the encryption context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// No scheme set.
    None,
    /// Brakerski/Fan-Vercauteren: exact integer arithmetic.
    Bfv,
    /// Cheon-Kim-Kim-Song: approximate real arithmetic.
    Ckks,
}

impl Scheme {
    /// Map a binding-level numeric scheme tag to a variant.
    ///
    /// Tag values follow the binding: 0 = none, 1 = BFV, 2 = CKKS. Every
    /// unrecognized tag degrades to [`Scheme::None`] rather than failing;
    /// this is the one deliberately tolerant path in the crate.
    pub const fn from_id(id: u8) -> Self {
        match id {
            1 => Scheme::Bfv,
            2 => Scheme::Ckks,
            _ => Scheme::None,
        }
    }

    /// Display name used in the parameter banner.
    pub const fn name(self) -> &'static str {
        match self {
            Scheme::Bfv => "bfv",
            Scheme::Ckks => "ckks",
            Scheme::None => "none",
        }
    }
}

/// One coefficient-modulus entry: a prime and its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    /// The prime modulus q_i.
    pub value: u64,
    /// Bit width of this modulus.
    pub bit_count: u32,
}

impl Modulus {
    /// Create an entry with an explicit bit width.
    pub const fn new(value: u64, bit_count: u32) -> Self {
        Self { value, bit_count }
    }

    /// Create an entry whose bit width is the minimal width of `value`.
    pub const fn from_value(value: u64) -> Self {
        Self {
            value,
            bit_count: 64 - value.leading_zeros(),
        }
    }
}

/// Immutable snapshot of an encryption context's parameters.
///
/// `coeff_modulus` keeps the order the context reported; the banner prints
/// entries verbatim in that order. `plain_modulus` is carried only by BFV
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionParams {
    /// Scheme family tag.
    pub scheme: Scheme,
    /// Ring degree N. Always positive for a live context.
    pub poly_modulus_degree: usize,
    /// Coefficient-modulus chain [q_0, q_1, ..., q_{L-1}].
    pub coeff_modulus: Vec<Modulus>,
    /// Plaintext modulus t, present only for BFV.
    pub plain_modulus: Option<u64>,
}

impl EncryptionParams {
    /// Build a BFV snapshot from a chain of modulus bit widths.
    ///
    /// Entry values are placeholders (the maximal value of each width);
    /// the formatter reads only the bit counts. Intended for demos and
    /// tests; live snapshots come from the encryption library.
    pub fn bfv(poly_modulus_degree: usize, coeff_bits: &[u32], plain_modulus: u64) -> Self {
        Self {
            scheme: Scheme::Bfv,
            poly_modulus_degree,
            coeff_modulus: chain_from_bits(coeff_bits),
            plain_modulus: Some(plain_modulus),
        }
    }

    /// Build a CKKS snapshot from a chain of modulus bit widths.
    pub fn ckks(poly_modulus_degree: usize, coeff_bits: &[u32]) -> Self {
        Self {
            scheme: Scheme::Ckks,
            poly_modulus_degree,
            coeff_modulus: chain_from_bits(coeff_bits),
            plain_modulus: None,
        }
    }

    /// Sum of the per-entry bit counts of the coefficient-modulus chain.
    pub fn total_coeff_modulus_bits(&self) -> u32 {
        self.coeff_modulus.iter().map(|m| m.bit_count).sum()
    }
}

fn chain_from_bits(coeff_bits: &[u32]) -> Vec<Modulus> {
    coeff_bits
        .iter()
        .map(|&bits| Modulus::new(max_for_bits(bits), bits))
        .collect()
}

/// Largest value representable in `bits` bits.
fn max_for_bits(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
