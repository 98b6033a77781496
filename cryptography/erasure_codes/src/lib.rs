pub mod errors;
pub mod recovery;

pub use errors::RSError;
pub use recovery::{recover_polynomial_from_samples, Sample};
