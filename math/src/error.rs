use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("encoded value cannot be empty")]
        Empty,
        #[error("base {0} is outside the supported range 2..=36")]
        UnsupportedBase(u32),
        #[error(
            "invalid digit {digit:?} at position {position} for base {base}"
        )]
        InvalidDigit {
            digit: char,
            position: usize,
            base: u32,
        },
        #[error("value overflows a signed 64-bit integer")]
        Overflow,
    }
}

pub mod lagrange {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("cannot interpolate through an empty point set")]
        Empty,
        #[error("duplicate abscissa {0} among interpolation points")]
        DuplicateAbscissa(String),
    }
}

pub use lagrange::Error as LagrangeError;
pub use radix::Error as DecodeError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Lagrange(#[from] LagrangeError),
}

pub type Error = MathError;
