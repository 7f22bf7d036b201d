//! # tesseroid-gravity -- Adaptive Quadrature for Spherical-Prism Gravity Models
//!
//! Computes the gravitational potential, attraction vector, and gravity
//! gradient tensor of tesseroid (spherical-prism) mass models on a
//! spherical Earth, using adaptive Gauss-Legendre quadrature.
//!
//! ## Quick Start
//!
//! ```rust
//! use tesseroid_gravity::prelude::*;
//!
//! let body = Tesseroid::new(
//!     -1.0f64.to_radians(), 1.0f64.to_radians(),
//!     -1.0f64.to_radians(), 1.0f64.to_radians(),
//!     MEAN_EARTH_RADIUS - 10_000.0, MEAN_EARTH_RADIUS,
//!     Some(2670.0),
//! ).unwrap();
//! let model = TesseroidModel::from(vec![body]);
//!
//! let g = gz(&[0.0], &[0.0], &[260_000.0], &model, None, EngineOptions::default()).unwrap();
//! assert!(g[0] > 0.0);
//! ```
//!
//! ## Architecture
//!
//! - [`model`] -- Tesseroid bounds, density resolution, model sequences
//! - [`point`] -- Observation point coordinate conversion
//! - [`quadrature`] -- Fixed-order Gauss-Legendre node/weight tables
//! - [`scale`] -- Mapping canonical nodes onto a tesseroid's bounds
//! - [`kernel`] -- The ten field integrands
//! - [`estimator`] -- Distance-size accept/reject heuristic
//! - [`driver`] -- The adaptive subdivision engine
//! - [`engine`] -- Compute backend selection
//! - [`orchestrator`] -- Public entry points: validate, convert, dispatch, scale
//! - [`parallel`] -- Contiguous-chunk data parallelism across observation points
//! - [`audit`] -- Closed-form cross-checks used by the test suite
//! - [`error`] -- Error taxonomy
//! - [`constants`] -- Physical constants in SI units

pub mod audit;
pub mod constants;
pub mod driver;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod kernel;
pub mod model;
pub mod orchestrator;
pub mod parallel;
pub mod point;
pub mod quadrature;
pub mod scale;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::engine::EngineSelector;
    pub use crate::error::TesseroidError;
    pub use crate::kernel::Field;
    pub use crate::model::{Bounds, ModelElement, Tesseroid, TesseroidModel};
    pub use crate::orchestrator::{
        gx, gxx, gxy, gxz, gy, gyy, gyz, gz, gzz, potential, EngineOptions,
    };
    pub use crate::point::ObservationPoint;
}
