use crate::{traits::*, G1Point, G1Projective, G2Point, G2Projective, Scalar};

/// Multi-scalar multiplication over G1.
///
/// "unchecked" because blst silently returns the identity if any point is the
/// identity. Only call this once the caller knows no identity points are present.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G1Projective::multi_exp(&proj_points, scalars)
    })
}

/// Multi-scalar multiplication over G2. See [`g1_lincomb_unchecked`].
pub fn g2_lincomb_unchecked(points: &[G2Point], scalars: &[Scalar]) -> Option<G2Projective> {
    (points.len() == scalars.len()).then(|| {
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G2Projective::multi_exp(&proj_points, scalars)
    })
}

/// Safe multi-scalar multiplication over G1: filters out identity points first.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() && (scalars.is_empty() || points.is_empty()) {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !(bool::from(point.is_identity())))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        Some(G1Projective::identity())
    } else {
        g1_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}

/// Safe multi-scalar multiplication over G2: filters out identity points first.
pub fn g2_lincomb(points: &[G2Point], scalars: &[Scalar]) -> Option<G2Projective> {
    if points.len() != scalars.len() && (scalars.is_empty() || points.is_empty()) {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !(bool::from(point.is_identity())))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        Some(G2Projective::identity())
    } else {
        g2_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}
