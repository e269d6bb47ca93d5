//! Recover the constant term of a polynomial from base-encoded shares and
//! spot the shares that do not lie on it.
//!
//! ```
//! use share_recovery::{input::TestCase, interpolate::constant_term};
//!
//! let case = TestCase::from_json(r#"{
//!     "keys": { "n": 2, "k": 2 },
//!     "1": { "base": "10", "value": "10" },
//!     "2": { "base": "16", "value": "D" }
//! }"#).unwrap();
//! let store = case.to_store().unwrap();
//! assert!((constant_term(&store).unwrap() - 7.0).abs() < 1e-9);
//! ```

pub mod consistency;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod params;
pub mod points;
pub mod recover;
pub mod report;

pub use consistency::{find_outliers, find_outliers_exact};
pub use error::{RecoveryError, Result};
pub use input::TestCase;
pub use interpolate::{constant_term, interpolate, Interpolator};
pub use params::RecoveryParams;
pub use points::{Point, PointStore};
