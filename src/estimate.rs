// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A closed set of estimate distributions.

use crate::{Beta4, Fixed, Pert, Univariate};
use rand::distributions::Distribution;
use rand::Rng;

/// Any one of the distributions provided by this crate.
///
/// Lets a model hold a mix of fixed, Beta4 and PERT estimates in one
/// collection and sample them uniformly.
///
/// # Example
///
/// ```rust
/// use rand_estimate::{Beta4, Distribution, Estimate, Fixed, Pert};
///
/// let tasks: Vec<Estimate> = vec![
///     Fixed::new(2.0).into(),
///     Pert::new(1.0, 6.0, 2.0).unwrap().into(),
///     Beta4::new(2.0, 3.0, 0.5, 4.0).unwrap().into(),
/// ];
/// let mut rng = rand::thread_rng();
/// let total: f64 = tasks.iter().map(|t| t.sample(&mut rng)).sum();
/// assert!(total >= 3.5 && total <= 12.0);
/// ```
#[derive(Clone, Debug)]
pub enum Estimate {
    /// A fixed value.
    Fixed(Fixed),
    /// A four-parameter Beta distribution.
    Beta4(Beta4),
    /// A PERT distribution.
    Pert(Pert),
}

impl Estimate {
    /// Draw a single sample and freeze it, whatever the variant.
    ///
    /// A `Fixed` estimate is returned as is and consumes no randomness.
    pub fn freeze<R: Rng + ?Sized>(&self, rng: &mut R) -> Fixed {
        match self {
            Estimate::Fixed(d) => *d,
            Estimate::Beta4(d) => Fixed::from_sample(d, rng),
            Estimate::Pert(d) => Fixed::from_sample(d, rng),
        }
    }
}

impl From<Fixed> for Estimate {
    fn from(d: Fixed) -> Self {
        Estimate::Fixed(d)
    }
}

impl From<Beta4> for Estimate {
    fn from(d: Beta4) -> Self {
        Estimate::Beta4(d)
    }
}

impl From<Pert> for Estimate {
    fn from(d: Pert) -> Self {
        Estimate::Pert(d)
    }
}

impl Distribution<f64> for Estimate {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Estimate::Fixed(d) => d.sample(rng),
            Estimate::Beta4(d) => d.sample(rng),
            Estimate::Pert(d) => d.sample(rng),
        }
    }
}

macro_rules! delegate {
    ($self:ident, $d:ident => $e:expr) => {
        match $self {
            Estimate::Fixed($d) => $e,
            Estimate::Beta4($d) => $e,
            Estimate::Pert($d) => $e,
        }
    };
}

impl Univariate for Estimate {
    fn cdf(&self, y: f64) -> f64 {
        delegate!(self, d => d.cdf(y))
    }

    fn prob(&self, y: f64) -> f64 {
        delegate!(self, d => d.prob(y))
    }

    fn mean(&self) -> f64 {
        delegate!(self, d => d.mean())
    }

    fn mode(&self) -> f64 {
        delegate!(self, d => d.mode())
    }

    fn std_dev(&self) -> f64 {
        delegate!(self, d => d.std_dev())
    }

    fn variance(&self) -> f64 {
        delegate!(self, d => d.variance())
    }

    fn num_parameters(&self) -> usize {
        delegate!(self, d => d.num_parameters())
    }
}
