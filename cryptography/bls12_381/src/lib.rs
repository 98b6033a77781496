use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod batch_inversion;
pub mod lincomb;

// Re-export ff and group so downstream crates do not need to independently version them.
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
pub type G1Point = blstrs::G1Affine;
/// Projective representation of a point in the BLS12-381 G1 curve group.
pub type G1Projective = blstrs::G1Projective;
/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;
/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;
/// Precomputed G2 point for efficient pairing computations.
pub type G2Prepared = blstrs::G2Prepared;
/// Scalar field element (Fr) for the BLS12-381 curve.
pub type Scalar = blstrs::Scalar;

/// Checks whether the product of pairings over the given G1 x G2 pairs equals the identity.
///
/// This is the curve-backend collaborator behind `pairings_verify`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Converts G1 projective points to affine points, amortizing the field inversion.
///
/// Needed as a standalone efficient path (rather than going through the generic
/// `batch_normalize_points`) because FK20's MSM precomputation calls it repeatedly.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    if projective_points.is_empty() {
        return Vec::new();
    }

    // blst maps every point to the identity if even one input is the identity, so
    // identity points are filtered out before the call and reinserted afterwards.
    let mut identity_positions = Vec::new();
    let mut non_identity_points = Vec::new();
    for (idx, point) in projective_points.iter().enumerate() {
        if point.is_identity().into() {
            identity_positions.push(idx);
        } else {
            non_identity_points.push(*point);
        }
    }

    if non_identity_points.is_empty() {
        return vec![G1Point::identity(); projective_points.len()];
    }

    let points = unsafe {
        std::slice::from_raw_parts(
            non_identity_points.as_ptr().cast::<blst::blst_p1>(),
            non_identity_points.len(),
        )
    };
    let normalized = blst::p1_affines::from(points);

    let mut result: Vec<_> = normalized
        .as_slice()
        .iter()
        .map(|p| G1Point::from_raw_unchecked(p.x.into(), p.y.into(), false))
        .collect();

    for pos in identity_positions {
        result.insert(pos, G1Point::identity());
    }

    result
}

/// Batch-normalizes G2 projective points to affine form.
pub fn g2_batch_normalize(projective_points: &[G2Projective]) -> Vec<G2Point> {
    batch_normalize_points(projective_points)
}

/// Generic batch-normalization for any curve implementing `PrimeCurveAffine`.
pub fn batch_normalize_points<T: PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: Curve<AffineRepr = T>,
{
    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}
