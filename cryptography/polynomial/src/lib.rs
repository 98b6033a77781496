pub mod bit_utils;
pub mod coset_fft;
pub mod domain;
pub(crate) mod fft;
pub mod poly_coeff;
pub mod zero_poly;

pub use bit_utils::{is_power_of_two, log2_pow2, reverse_bit_order, reverse_bits};
pub use coset_fft::CosetFFT;
pub use domain::Domain;
pub use poly_coeff::PolyCoeff;
pub use zero_poly::{zero_polynomial_via_multiplication, ZeroPolyError};
