pub mod error;
pub mod lagrange;
mod macros;
pub mod prelude;
pub mod radix;

pub use crate::{
    error::{DecodeError, LagrangeError, MathError},
    lagrange::{constant_term, evaluate, evaluate_exact},
    radix::{decode, decode_big},
};
