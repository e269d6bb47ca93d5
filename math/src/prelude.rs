pub use crate::error::{DecodeError, LagrangeError, MathError, Result};
pub use crate::lagrange::{constant_term, evaluate, evaluate_exact};
pub use crate::radix::{decode, decode_big, digit_value, MAX_BASE, MIN_BASE};
pub use crate::samples;
pub use num_bigint::BigInt;
pub use num_rational::BigRational;
