use bls12_381::{
    ff::{Field, PrimeField},
    group::Group,
    G1Projective, Scalar,
};

use crate::{
    coset_fft::CosetFFT,
    fft::{fft_inplace, precompute_omegas, precompute_twiddle_factors_bo},
    poly_coeff::PolyCoeff,
};

/// A power-of-two set of roots of unity, plus the precomputed twiddle factors
/// needed to run forward and inverse FFTs over it efficiently.
///
/// This plays the role of the curve-backend's `fft_settings` from the reference
/// design: an immutable object, built once and shared by reference across every
/// `fft_fr`/`fft_g1` call, a KZG setup, and an FK20 setup.
#[derive(Debug, Clone)]
pub struct Domain {
    /// Roots of unity, in natural (non-bit-reversed) order.
    pub roots: Vec<Scalar>,
    /// Size of the domain as a scalar.
    pub domain_size: Scalar,
    /// Inverse of the domain size as a scalar.
    pub domain_size_inv: Scalar,
    /// Generator for this domain: an element of order `domain_size`.
    pub generator: Scalar,
    /// Inverse of the generator, cached for the inverse FFT.
    pub generator_inv: Scalar,
    omegas: Vec<Scalar>,
    twiddle_factors_bo: Vec<Scalar>,
    omegas_inv: Vec<Scalar>,
    twiddle_factors_inv_bo: Vec<Scalar>,
}

impl Domain {
    /// Builds a domain whose size is the next power of two `>= size`.
    ///
    /// # Panics
    /// Panics if the requested size exceeds `2^32`, the two-adicity of the
    /// scalar field's largest root of unity.
    pub fn new(size: usize) -> Self {
        let size = if size.is_power_of_two() {
            size
        } else {
            size.next_power_of_two()
        };

        let generator = Self::compute_generator_for_size(size);
        let generator_inv = generator.invert().expect("generator should not be zero");

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size.invert().expect("size should not be zero");

        let mut roots = Vec::with_capacity(size);
        roots.push(Scalar::ONE);
        for i in 1..size {
            let prev_root = roots[i - 1];
            roots.push(prev_root * generator);
        }

        let omegas = precompute_omegas(&generator, size);
        let twiddle_factors_bo = precompute_twiddle_factors_bo(&generator, size);
        let omegas_inv = precompute_omegas(&generator_inv, size);
        let twiddle_factors_inv_bo = precompute_twiddle_factors_bo(&generator_inv, size);

        Self {
            roots,
            domain_size,
            domain_size_inv,
            generator,
            generator_inv,
            omegas,
            twiddle_factors_bo,
            omegas_inv,
            twiddle_factors_inv_bo,
        }
    }

    fn compute_generator_for_size(size: usize) -> Scalar {
        assert!(size.is_power_of_two());

        let log_size_of_group = size.trailing_zeros();
        assert!(
            log_size_of_group <= Self::two_adicity(),
            "two adicity is 32 but group size needed is 2^{log_size_of_group}"
        );

        let exponent: u64 = 1 << (u64::from(Self::two_adicity()) - u64::from(log_size_of_group));
        Self::largest_root_of_unity().pow_vartime([exponent])
    }

    const fn largest_root_of_unity() -> Scalar {
        Scalar::ROOT_OF_UNITY
    }

    const fn two_adicity() -> u32 {
        32
    }

    /// The size of the domain. Always a power of two.
    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if `n` fits in this domain without truncation.
    pub fn max_width(&self) -> usize {
        self.size()
    }

    /// Evaluates a polynomial at every point in the domain (forward FFT).
    pub fn fft_scalars(&self, mut polynomial: PolyCoeff) -> Vec<Scalar> {
        polynomial.resize(self.size(), Scalar::ZERO);
        fft_inplace(&self.omegas, &self.twiddle_factors_bo, &mut polynomial);
        polynomial.0
    }

    /// Evaluates a polynomial over a coset of the domain.
    pub fn coset_fft_scalars(&self, mut points: PolyCoeff, coset: &CosetFFT) -> Vec<Scalar> {
        points.resize(self.size(), Scalar::ZERO);

        let mut coset_scale = Scalar::ONE;
        for point in &mut points.0 {
            *point *= coset_scale;
            coset_scale *= coset.generator;
        }
        fft_inplace(&self.omegas, &self.twiddle_factors_bo, &mut points);
        points.0
    }

    /// Forward FFT over G1 points.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fft_g1(&self, mut points: Vec<G1Projective>) -> Vec<G1Projective> {
        points.resize(self.size(), G1Projective::identity());
        fft_inplace(&self.omegas, &self.twiddle_factors_bo, &mut points);
        points
    }

    /// Inverse FFT over G1 points.
    pub fn ifft_g1(&self, points: Vec<G1Projective>) -> Vec<G1Projective> {
        self.ifft_g1_take_n(points, None)
    }

    /// Inverse FFT over G1 points, truncating the result to `n` elements.
    ///
    /// Passing `None` returns as many elements as there are in the domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn ifft_g1_take_n(
        &self,
        mut points: Vec<G1Projective>,
        n: Option<usize>,
    ) -> Vec<G1Projective> {
        points.resize(self.size(), G1Projective::identity());
        fft_inplace(&self.omegas_inv, &self.twiddle_factors_inv_bo, &mut points);

        let out_len = n.unwrap_or(points.len());
        assert!(out_len <= points.len());
        points.truncate(out_len);

        for element in &mut points {
            *element *= self.domain_size_inv;
        }
        points
    }

    /// Interpolates domain evaluations back to monomial form (inverse FFT).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn ifft_scalars(&self, mut points: Vec<Scalar>) -> PolyCoeff {
        points.resize(self.size(), Scalar::ZERO);
        fft_inplace(&self.omegas_inv, &self.twiddle_factors_inv_bo, &mut points);

        for element in &mut points {
            *element *= self.domain_size_inv;
        }
        points.into()
    }

    /// Interpolates a polynomial over a coset of the domain.
    pub fn coset_ifft_scalars(&self, points: Vec<Scalar>, coset: &CosetFFT) -> PolyCoeff {
        let mut coset_coeffs = self.ifft_scalars(points);

        let mut coset_scale = Scalar::ONE;
        for element in &mut coset_coeffs.0 {
            *element *= coset_scale;
            coset_scale *= coset.generator_inv;
        }
        coset_coeffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_root_of_unity_has_correct_order() {
        let root = Domain::largest_root_of_unity();
        let order = 2u64.pow(Domain::two_adicity());

        assert_eq!(root.pow_vartime([order]), Scalar::ONE);
        for i in 0..Domain::two_adicity() {
            assert_ne!(root.pow_vartime([2u64.pow(i)]), Scalar::ONE);
        }
    }

    #[test]
    fn fft_ifft_roundtrip() {
        for log_n in 0..=8 {
            let n = 1usize << log_n;
            let domain = Domain::new(n);
            let poly = PolyCoeff((0..n).map(|i| Scalar::from(i as u64 + 7)).collect());

            let evals = domain.fft_scalars(poly.clone());
            let back = domain.ifft_scalars(evals);
            assert_eq!(back, poly, "roundtrip mismatch at n = {n}");
        }
    }

    #[test]
    fn fft_test_polynomial() {
        let evaluations = vec![Scalar::from(2u64), Scalar::from(4u64)];
        let domain = Domain::new(2);

        let poly_coeff = domain.ifft_scalars(evaluations.clone());
        for (i, root) in domain.roots.iter().enumerate() {
            assert_eq!(poly_coeff.eval(root), evaluations[i]);
        }

        let got_evals = domain.fft_scalars(poly_coeff);
        assert_eq!(got_evals, evaluations);
    }

    #[test]
    fn test_polynomial_coset_fft() {
        let polynomial = PolyCoeff((0..32).map(|i| -Scalar::from(i)).collect());

        let domain = Domain::new(32);
        let coset_fft = CosetFFT::new(Scalar::MULTIPLICATIVE_GENERATOR);
        let coset_evals = domain.coset_fft_scalars(polynomial.clone(), &coset_fft);
        let got_poly = domain.coset_ifft_scalars(coset_evals, &coset_fft);

        assert_eq!(got_poly, polynomial);
    }

    #[test]
    fn fft_g1_roundtrip() {
        let n = 8;
        let domain = Domain::new(n);
        let points: Vec<_> = (0..n)
            .map(|_| G1Projective::random(&mut rand::thread_rng()))
            .collect();

        let fft_points = domain.fft_g1(points.clone());
        assert_eq!(domain.ifft_g1(fft_points), points);
    }
}
