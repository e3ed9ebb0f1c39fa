// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

#![allow(clippy::excessive_precision, clippy::float_cmp, clippy::unreadable_literal)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]  // suggested fix too verbose

//! Range-bounded distributions for Monte-Carlo estimation.
//!
//! Estimates of cost, effort or duration are usually given as a range with
//! a most likely value. This crate turns such estimates into distributions
//! that can be sampled with any [`rand::Rng`] and queried for their density,
//! cumulative distribution and moments.
//!
//! ## Distributions
//!
//! - [`Fixed`]: a single value, sampled without consuming randomness
//! - [`Beta4`]: a Beta distribution stretched onto `[min, max]`
//! - [`Pert`]: a Beta4 distribution derived from `min`, `mode` and `max`
//! - [`Estimate`]: any of the above, for heterogeneous collections
//!
//! [`StandardBeta`] is the Beta distribution on `[0, 1]` that [`Beta4`] and
//! [`Pert`] rescale.
//!
//! ## One-shot sampling
//!
//! [`Beta4::new_one`], [`Pert::new_one`] and [`triangle_one`] draw a single
//! sample and return it as a [`Fixed`] distribution, so that a variable can
//! be held steady for a whole run while the other variables vary.
//!
//! ## Random sources
//!
//! Distributions do not own a random source. It is passed to every call to
//! [`Distribution::sample`], so several distributions may share one seeded
//! generator and consume its stream in call order.
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rand_estimate::{Distribution, Pert};
//!
//! let d = Pert::new(2., 10., 3.).unwrap();
//! let a: Vec<f64> = (&d).sample_iter(StdRng::seed_from_u64(12)).take(3).collect();
//! let b: Vec<f64> = (&d).sample_iter(StdRng::seed_from_u64(12)).take(3).collect();
//! assert_eq!(a, b);
//! ```

pub use rand::distributions::{Distribution, DistIter};
pub use rand_distr::TriangularError;

pub use self::beta::{ShapeError, StandardBeta};
pub use self::beta4::{Beta4, Beta4Error};
pub use self::estimate::Estimate;
pub use self::fixed::Fixed;
pub use self::pert::{Pert, PertError};
pub use self::triangular::triangle_one;

#[macro_use]
mod log_macros;

mod beta;
mod beta4;
mod estimate;
mod fixed;
mod pert;
mod triangular;

/// A univariate distribution with known density, cumulative distribution and
/// moments.
///
/// Sampling comes from the [`Distribution`] supertrait.
pub trait Univariate: Distribution<f64> {
    /// Cumulative distribution function at `y`.
    fn cdf(&self, y: f64) -> f64;

    /// Probability density function at `y`.
    fn prob(&self, y: f64) -> f64;

    /// Mean of the distribution.
    fn mean(&self) -> f64;

    /// Mode of the distribution; NaN when it is not defined.
    fn mode(&self) -> f64;

    /// Standard deviation of the distribution.
    fn std_dev(&self) -> f64;

    /// Variance of the distribution.
    fn variance(&self) -> f64;

    /// Number of parameters the distribution is defined by.
    fn num_parameters(&self) -> usize;
}
