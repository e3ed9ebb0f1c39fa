// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rand_estimate::{triangle_one, Beta4, Distribution, Pert, Univariate};

// [1] Nonparametric Goodness-of-Fit Tests for Discrete Null Distributions
//     by Taylor B. Arnold and John W. Emerson
//     http://www.stat.yale.edu/~jay/EmersonMaterials/DiscreteGOF.pdf

/// Empirical Cumulative Distribution Function (ECDF)
struct Ecdf {
    sorted_samples: Vec<f64>,
}

impl Ecdf {
    fn new(mut samples: Vec<f64>) -> Self {
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        Self {
            sorted_samples: samples,
        }
    }

    /// Returns the step points of the ECDF
    /// The ECDF is a step function that increases by 1/n at each sample point
    /// The function is continuous from the right, so we give the bigger value at the step points
    /// First point is (-inf, 0.0), last point is (max(samples), 1.0)
    fn step_points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(self.sorted_samples.len() + 1);
        let mut last = f64::NEG_INFINITY;
        let mut count = 0;
        let n = self.sorted_samples.len() as f64;
        for &x in &self.sorted_samples {
            if x != last {
                points.push((last, count as f64 / n));
                last = x;
            }
            count += 1;
        }
        points.push((last, count as f64 / n));
        points
    }
}

fn kolmogorov_smirnov_statistic(ecdf: Ecdf, cdf: impl Fn(f64) -> f64) -> f64 {
    // We implement equation (3) from [1]

    let mut max_diff: f64 = 0.;

    let step_points = ecdf.step_points(); // x_i in the paper
    for i in 1..step_points.len() {
        let (x_i, f_i) = step_points[i];
        let (_, f_i_1) = step_points[i - 1];
        let cdf_i = cdf(x_i);
        let max_1 = (cdf_i - f_i).abs();
        let max_2 = (cdf_i - f_i_1).abs();

        max_diff = max_diff.max(max_1).max(max_2);
    }
    max_diff
}

const SAMPLE_SIZE: u64 = 100_000;

fn critical_value() -> f64 {
    // If the sampler is correct, we expect less than 0.001 false positives (alpha = 0.001).
    // Passing this does not prove that the sampler is correct but is a good indication.
    1.95 / (SAMPLE_SIZE as f64).sqrt()
}

fn get_rng(seed: u64) -> rand_pcg::Pcg32 {
    const INC: u64 = 11634580027462260723;
    rand_pcg::Pcg32::new(seed, INC)
}

/// Tests a set of samples against an analytical CDF.
/// The CDF has to be continuous.
fn test_samples(samples: Vec<f64>, cdf: impl Fn(f64) -> f64) {
    let ks_statistic = kolmogorov_smirnov_statistic(Ecdf::new(samples), cdf);
    let critical_value = critical_value();

    println!("KS statistic: {}", ks_statistic);
    println!("Critical value: {}", critical_value);
    assert!(ks_statistic < critical_value);
}

fn test_continuous(seed: u64, dist: impl Distribution<f64>, cdf: impl Fn(f64) -> f64) {
    let mut rng = get_rng(seed);
    let samples = (0..SAMPLE_SIZE).map(|_| dist.sample(&mut rng)).collect();
    test_samples(samples, cdf);
}

#[test]
fn beta4() {
    let parameters = [
        (2.0, 2.0, 5.0, 10.0),
        (1.1, 1.3, 5.0, 10.0),
        (0.5, 0.3, 5.0, 10.0),
        (1.5, 3.3, 0.0, 1.0),
        (2.5, 0.5, -2.0, 40.0),
    ];

    for (seed, (alpha, beta, min, max)) in parameters.into_iter().enumerate() {
        let dist = Beta4::new(alpha, beta, min, max).unwrap();
        // `cdf` is reported divided by the range
        test_continuous(seed as u64, dist.clone(), |y| dist.cdf(y) * (max - min));
    }
}

#[test]
fn pert() {
    let parameters = [
        (0.0, 10.0, 5.0),
        (2.0, 10.0, 3.0),
        (-4.0, -0.5, -2.0),
        (5.0, 25.0, 25.0),
    ];

    for (seed, (min, max, mode)) in parameters.into_iter().enumerate() {
        let dist = Pert::new(min, max, mode).unwrap();
        test_continuous(seed as u64, dist.clone(), |y| dist.cdf(y) * (max - min));
    }
}

#[test]
fn triangle_one_draws() {
    fn cdf(x: f64, a: f64, b: f64, c: f64) -> f64 {
        if x <= a {
            0.0
        } else if x <= c {
            (x - a).powi(2) / ((b - a) * (c - a))
        } else if x < b {
            1.0 - (b - x).powi(2) / ((b - a) * (b - c))
        } else {
            1.0
        }
    }

    let parameters = [
        (0.0, 1.0, 0.5),
        (-1.0, 1.0, 0.0),
        (0.0, 1.0, 0.9),
        (-4.0, -0.5, -2.0),
    ];

    for (seed, (low, high, mode)) in parameters.into_iter().enumerate() {
        let mut rng = get_rng(seed as u64);
        // each one-shot draw is one sample from the triangular distribution
        let samples = (0..SAMPLE_SIZE)
            .map(|_| triangle_one(low, high, mode, &mut rng).unwrap().value())
            .collect();
        test_samples(samples, |x| cdf(x, low, high, mode));
    }
}
