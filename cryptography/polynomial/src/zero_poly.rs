//! Construction of the monic vanishing (zero) polynomial for a set of missing
//! indices into a roots-of-unity domain, via an FFT-accelerated subproduct
//! tree.
//!
//! There is no single routine this is transcribed from directly:
//! `vanishing_poly` (see [`crate::poly_coeff::vanishing_poly`]) only computes
//! the O(m^2) direct product. This module generalizes `vanishing_poly` into
//! the leaf kernel of a merge tree, combining pairs of partial products in
//! the Fourier domain once the direct-product leaves get large enough to
//! make that cheaper, bringing the construction down to O(m log^2 m).

use bls12_381::Scalar;

use crate::{
    domain::Domain,
    poly_coeff::{vanishing_poly, PolyCoeff},
};

/// Performance-only tuning constant: above this many missing indices per leaf,
/// the direct O(g^2) product is replaced by continuing to split. Must not
/// affect the output, only the time spent producing it.
const PER_LEAF: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroPolyError {
    /// More missing indices were supplied than fit in the domain.
    TooManyMissingIndices { num_missing: usize, domain_size: usize },
    /// A missing index was not a valid position in the domain.
    IndexOutOfRange { index: usize, domain_size: usize },
}

/// Builds the monic polynomial `Z(x) = prod_{j in missing} (x - root_j)` together
/// with its evaluation over the full domain.
///
/// `missing` need not be sorted and may be empty, in which case `Z(x) = 1` and
/// every domain evaluation is `1`.
///
/// # Errors
/// Returns [`ZeroPolyError`] if `missing` is larger than the domain or contains
/// an out-of-range index.
pub fn zero_polynomial_via_multiplication(
    domain: &Domain,
    missing: &[usize],
) -> Result<(PolyCoeff, Vec<Scalar>), ZeroPolyError> {
    let domain_size = domain.size();
    if missing.len() > domain_size {
        return Err(ZeroPolyError::TooManyMissingIndices {
            num_missing: missing.len(),
            domain_size,
        });
    }
    for &index in missing {
        if index >= domain_size {
            return Err(ZeroPolyError::IndexOutOfRange {
                index,
                domain_size,
            });
        }
    }

    if missing.is_empty() {
        let z = PolyCoeff(vec![Scalar::from(1u64)]);
        let evals = vec![Scalar::from(1u64); domain_size];
        return Ok((z, evals));
    }

    let roots: Vec<Scalar> = missing.iter().map(|&i| domain.roots[i]).collect();
    let z = build_subproduct_tree(&roots);

    let evals = domain.fft_scalars(z.clone());

    Ok((z, evals))
}

/// Splits `roots` into leaves of at most `PER_LEAF` elements, multiplies each
/// leaf directly, then merges pairs of partial products pointwise in the
/// Fourier domain until a single polynomial remains.
fn build_subproduct_tree(roots: &[Scalar]) -> PolyCoeff {
    if roots.len() <= PER_LEAF {
        return vanishing_poly(roots);
    }

    let mut level: Vec<PolyCoeff> = roots
        .chunks(PER_LEAF)
        .map(vanishing_poly)
        .collect();

    while level.len() > 1 {
        let mut next_level = Vec::with_capacity(level.len().div_ceil(2));
        let mut pairs = level.chunks(2);
        while let Some(pair) = pairs.next() {
            match pair {
                [a, b] => next_level.push(multiply_via_fft(a, b)),
                [a] => next_level.push(a.clone()),
                _ => unreachable!("chunks(2) never yields more than 2 elements"),
            }
        }
        level = next_level;
    }

    level.into_iter().next().expect("roots is non-empty")
}

/// Multiplies two polynomials by evaluating both over a domain large enough to
/// hold the product, pointwise-multiplying, and interpolating back.
fn multiply_via_fft(a: &PolyCoeff, b: &PolyCoeff) -> PolyCoeff {
    let product_len = a.len() + b.len() - 1;
    let fft_len = product_len.next_power_of_two();
    let domain = Domain::new(fft_len);

    let a_evals = domain.fft_scalars(a.clone());
    let b_evals = domain.fft_scalars(b.clone());

    let product_evals: Vec<Scalar> = a_evals
        .iter()
        .zip(b_evals.iter())
        .map(|(x, y)| x * y)
        .collect();

    let mut product = domain.ifft_scalars(product_evals);
    product.truncate(product_len);
    while product.last().is_some_and(|c| bool::from(bls12_381::ff::Field::is_zero(c))) {
        product.pop();
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_poly_vanishes_on_missing_set() {
        let domain = Domain::new(64);
        let missing = vec![1, 5, 9, 40, 63];
        let (z, evals) = zero_polynomial_via_multiplication(&domain, &missing).unwrap();

        assert_eq!(z.len(), missing.len() + 1);
        for &i in &missing {
            assert_eq!(z.eval(&domain.roots[i]), Scalar::from(0u64));
            assert_eq!(evals[i], Scalar::from(0u64));
        }
    }

    #[test]
    fn zero_poly_matches_direct_vanishing_poly() {
        let domain = Domain::new(32);
        let missing: Vec<usize> = (0..20).collect();
        let (z, _) = zero_polynomial_via_multiplication(&domain, &missing).unwrap();

        let roots: Vec<Scalar> = missing.iter().map(|&i| domain.roots[i]).collect();
        let expected = vanishing_poly(&roots);
        assert_eq!(z, expected);
    }

    #[test]
    fn per_leaf_threshold_does_not_change_output() {
        // Exercise the split/merge path (more than PER_LEAF missing indices)
        // and confirm the result still matches the direct product.
        let domain = Domain::new(256);
        let missing: Vec<usize> = (0..200).collect();
        let (z, _) = zero_polynomial_via_multiplication(&domain, &missing).unwrap();

        let roots: Vec<Scalar> = missing.iter().map(|&i| domain.roots[i]).collect();
        let expected = vanishing_poly(&roots);
        assert_eq!(z, expected);
    }

    #[test]
    fn empty_missing_set_is_constant_one() {
        let domain = Domain::new(16);
        let (z, evals) = zero_polynomial_via_multiplication(&domain, &[]).unwrap();
        assert_eq!(z, PolyCoeff(vec![Scalar::from(1u64)]));
        assert!(evals.iter().all(|e| *e == Scalar::from(1u64)));
    }

    #[test]
    fn rejects_too_many_missing_indices() {
        let domain = Domain::new(8);
        let missing: Vec<usize> = (0..9).collect();
        assert_eq!(
            zero_polynomial_via_multiplication(&domain, &missing),
            Err(ZeroPolyError::TooManyMissingIndices {
                num_missing: 9,
                domain_size: 8,
            })
        );
    }

    #[test]
    fn rejects_out_of_range_index() {
        let domain = Domain::new(8);
        assert_eq!(
            zero_polynomial_via_multiplication(&domain, &[100]),
            Err(ZeroPolyError::IndexOutOfRange {
                index: 100,
                domain_size: 8,
            })
        );
    }
}
