use bls12_381::{ff::Field, Scalar};

/// A coset generator, plus its inverse, used to evaluate a polynomial shifted
/// off the roots-of-unity domain (and to interpolate back).
#[derive(Debug, Clone)]
pub struct CosetFFT {
    pub generator: Scalar,
    pub generator_inv: Scalar,
}

impl CosetFFT {
    pub fn new(gen: Scalar) -> Self {
        Self {
            generator: gen,
            generator_inv: gen.invert().expect("cosets should be non-zero"),
        }
    }
}
