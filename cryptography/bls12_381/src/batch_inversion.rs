/// Given a vector of field elements, compute the vector of their inverses.
///
/// Montgomery's trick (Genelle, Prouff, Quisquater, "Montgomery's Trick and Fast
/// Implementation of Masked AES", Section 3.2): one field inversion amortized over
/// the whole slice via a running-product pass followed by a back-substitution pass.
///
/// # Panics
/// Panics if any element of `v` is zero.
pub fn batch_inverse<F: ff::Field>(v: &mut [F]) {
    let mut prod = Vec::with_capacity(v.len());
    let mut tmp = F::ONE;
    for f in v.iter().filter(|f| !f.is_zero_vartime()) {
        tmp.mul_assign(f);
        prod.push(tmp);
    }

    assert_eq!(prod.len(), v.len(), "inversion by zero is not allowed");

    tmp = tmp
        .invert()
        .expect("guaranteed non-zero since zero elements were filtered out above");

    for (f, s) in v
        .iter_mut()
        .rev()
        .filter(|f| !f.is_zero_vartime())
        .zip(prod.into_iter().rev().skip(1).chain(Some(F::ONE)))
    {
        let new_tmp = tmp * *f;
        *f = tmp * s;
        tmp = new_tmp;
    }
}
