//! Fixed-dimension linear algebra for real-space structure calculations.
//!
//! `srreal-core` provides the 3D vector and matrix value types that pair
//! distribution, bond valence and overlap calculators share: atom positions,
//! bond vectors, lattice bases and symmetry rotations. Everything is
//! fixed-size, `Copy` and allocation-free.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`r3`] | [`Vector3`], [`Matrix3`], products, approximate equality |
//! | [`errors`] | [`SrRealError`] and [`SrRealResult`] |
//! | [`test_helpers`] | ULP and tolerance assertions for tests |
//!
//! # Example
//!
//! ```
//! use srreal_core::{Matrix3, Vector3};
//! use srreal_core::r3::vectors_almost_equal;
//!
//! // fractional -> Cartesian with a tetragonal lattice base
//! let base = Matrix3::new(
//!     4.0, 0.0, 0.0,
//!     0.0, 4.0, 0.0,
//!     0.0, 0.0, 6.0,
//! );
//! let frac = Vector3::new(0.5, 0.25, 0.5);
//! let cart = frac * base;
//!
//! assert!(vectors_almost_equal(&cart, &Vector3::new(2.0, 1.0, 3.0), 1e-12));
//! assert_eq!(cart.distance(&Vector3::zeros()), 14.0_f64.sqrt());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Vector3`] (as `[x0, x1, x2]`) and
//!   [`Matrix3`] (as three rows).
//!
//! # Diagnostics
//!
//! Rejected initializer slices and singular inversions emit `tracing` debug
//! events. Install a subscriber in the application to see them.

pub mod errors;
pub mod r3;

pub use errors::{MathErrorKind, SrRealError, SrRealResult};
pub use r3::{Matrix3, Vector3};

pub mod test_helpers;
