use std::ops::{Deref, DerefMut};

use bls12_381::{ff::Field, Scalar};

/// A polynomial in monomial form over the scalar field.
///
/// Coefficients are stored in ascending order of degree:
///
/// ```text
/// Layout: x^0 * a_0 + x^1 * a_1 + ... + x^(n-1) * a_(n-1)
/// ```
///
/// The zero polynomial is represented by an empty coefficient vector.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PolyCoeff(pub Vec<Scalar>);

impl PolyCoeff {
    /// Adds two polynomials, padding the shorter one with zeros.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        if other.len() > result.len() {
            result.resize(other.len(), Scalar::ZERO);
        }
        for (i, &b) in other.iter().enumerate() {
            result[i] += b;
        }
        result.truncate_leading_zeros();
        result
    }

    /// Computes the additive inverse `-self`.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.iter().map(|c| -*c).collect())
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Evaluates the polynomial at `x` via Horner's method. The zero
    /// polynomial evaluates to zero everywhere.
    #[must_use]
    pub fn eval(&self, x: &Scalar) -> Scalar {
        let mut result = Scalar::ZERO;
        for coeff in self.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// Multiplies two polynomials. The result has degree
    /// `self.degree() + other.degree()`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self(vec![
            Scalar::ZERO;
            (self.len() + other.len()).saturating_sub(1)
        ]);
        for (i, a) in self.iter().enumerate() {
            for (j, b) in other.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        result.truncate_leading_zeros();
        result
    }

    /// Schoolbook long division: `self = quotient * divisor + remainder`.
    ///
    /// Returns `None` if `divisor` is the zero polynomial. The quotient has
    /// length `self.length - divisor.length + 1`, or length `0` if `self` is
    /// shorter than `divisor`.
    #[must_use]
    pub fn long_division(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_empty() {
            return None;
        }
        if self.len() < divisor.len() {
            return Some(Self(vec![]));
        }

        let mut remainder = self.clone();
        let divisor_lead_inv = divisor
            .last()
            .expect("divisor is non-empty")
            .invert()
            .expect("leading coefficient of a non-empty PolyCoeff is never zero");

        let quotient_len = self.len() - divisor.len() + 1;
        let mut quotient = vec![Scalar::ZERO; quotient_len];

        for i in (0..quotient_len).rev() {
            let remainder_deg = i + divisor.len() - 1;
            let coeff = remainder[remainder_deg] * divisor_lead_inv;
            quotient[i] = coeff;

            for (j, divisor_coeff) in divisor.iter().enumerate() {
                remainder[i + j] -= coeff * divisor_coeff;
            }
        }

        Some(Self(quotient))
    }

    /// Truncates the polynomial to remove trailing zero coefficients.
    fn truncate_leading_zeros(&mut self) {
        while self.last().is_some_and(|c| c.is_zero().into()) {
            self.pop();
        }
    }
}

impl Deref for PolyCoeff {
    type Target = Vec<Scalar>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PolyCoeff {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Scalar>> for PolyCoeff {
    fn from(value: Vec<Scalar>) -> Self {
        Self(value)
    }
}

/// Computes the monic vanishing polynomial `Z(x) = prod (x - root)` for the
/// given roots, via schoolbook multiplication. Used both as a test oracle and
/// as the per-leaf kernel of [`crate::zero_poly`]'s subproduct tree.
pub fn vanishing_poly(roots: &[Scalar]) -> PolyCoeff {
    let mut poly = PolyCoeff(vec![Scalar::ONE]);
    for root in roots {
        poly = poly.mul(&PolyCoeff(vec![-root, Scalar::ONE]));
    }
    poly
}

/// Lagrange interpolation: the lowest-degree monomial-form polynomial passing
/// through every given point.
///
/// O(n^2); used for multi-point KZG openings, where the claimed-evaluation set
/// is small, and for tests. The roots-of-unity domain uses IFFT instead.
#[must_use]
pub fn lagrange_interpolate(points: &[(Scalar, Scalar)]) -> PolyCoeff {
    let max_degree_plus_one = points.len();
    assert!(
        max_degree_plus_one >= 1,
        "should interpolate for at least one point"
    );
    let mut coeffs = vec![Scalar::ZERO; max_degree_plus_one];
    for (k, p_k) in points.iter().enumerate() {
        let (x_k, y_k) = p_k;
        let mut contribution = vec![Scalar::ZERO; max_degree_plus_one];
        let mut denominator = Scalar::ONE;
        let mut max_contribution_degree = 0;
        for (j, p_j) in points.iter().enumerate() {
            let (x_j, _) = p_j;
            if j == k {
                continue;
            }

            let mut diff = *x_k;
            diff -= x_j;
            denominator *= diff;

            if max_contribution_degree == 0 {
                max_contribution_degree = 1;
                contribution[0] -= x_j;
                contribution[1] += Scalar::from(1u64);
            } else {
                let mul_by_minus_x_j: Vec<Scalar> = contribution
                    .iter()
                    .map(|el| {
                        let mut tmp = *el;
                        tmp *= x_j;
                        -tmp
                    })
                    .collect();

                contribution.insert(0, Scalar::ZERO);
                contribution.truncate(max_degree_plus_one);

                for (i, c) in contribution.iter_mut().enumerate() {
                    *c += mul_by_minus_x_j[i];
                }
            }
        }

        denominator = denominator
            .invert()
            .expect("points must have distinct x-coordinates");
        for (i, this_contribution) in contribution.into_iter().enumerate() {
            let mut tmp = this_contribution;
            tmp *= denominator;
            tmp *= y_k;
            coeffs[i] += tmp;
        }
    }

    coeffs.into()
}
