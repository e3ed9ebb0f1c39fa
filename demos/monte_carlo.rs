// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Monte Carlo estimation of a project duration with a chosen seed
//!
//! A project is a sequence of tasks. Each task duration (in days) is given
//! either as a fixed value, a three-point PERT estimate or a Beta4 range.
//! The vendor lead time is unknown but, once the contract is signed, it does
//! not change between what-if runs, so it is drawn once with
//! `Pert::new_one` and then held steady.
//!
//! Summing one draw per task gives one possible project duration; repeating
//! this many times gives the distribution of the total.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_estimate::{Beta4, Distribution, Estimate, Fixed, Pert, Univariate};

static SEED: u64 = 12;
static TRIALS: usize = 100_000;

fn main() {
    let mut rng = StdRng::seed_from_u64(SEED);

    let lead_time = Pert::new_one(10.0, 30.0, 14.0, &mut rng).unwrap();
    let tasks: Vec<(&str, Estimate)> = vec![
        ("kick-off", Fixed::new(1.0).into()),
        ("design", Pert::new(3.0, 12.0, 5.0).unwrap().into()),
        ("vendor lead time", lead_time.into()),
        ("build", Beta4::new(2.0, 5.0, 8.0, 40.0).unwrap().into()),
        ("acceptance", Pert::new(1.0, 6.0, 2.0).unwrap().into()),
    ];

    for (name, task) in &tasks {
        println!(
            "{:>18}: mean {:6.2}  std dev {:5.2}",
            name,
            task.mean(),
            task.std_dev()
        );
    }

    let mut totals: Vec<f64> = (0..TRIALS)
        .map(|_| tasks.iter().map(|(_, t)| t.sample(&mut rng)).sum::<f64>())
        .collect();
    totals.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mean = totals.iter().sum::<f64>() / TRIALS as f64;
    let percentile = |p: f64| totals[((TRIALS - 1) as f64 * p) as usize];
    println!("expected duration: {:.1} days", mean);
    println!("P50: {:.1}  P80: {:.1}  P95: {:.1}", percentile(0.5), percentile(0.8), percentile(0.95));
}
