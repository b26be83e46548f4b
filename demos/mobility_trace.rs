// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqmeasure::estimators::config::{EstimatorConfig, PredictabilitySolver};
use seqmeasure::estimators::measures::SequenceProfile;
use seqmeasure::{sequence_concatenating, sequence_merging, sequence_splitting};
use tracing_subscriber::EnvFilter;

/// Generate a week of hourly locations: home at night, work on weekdays, and an
/// occasional detour.
fn generate_trace(seed: u64) -> (Vec<&'static str>, Vec<u32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let detours = ["gym", "cafe", "market", "park"];
    let mut trace = Vec::with_capacity(7 * 24);
    let mut hours = Vec::with_capacity(7 * 24);
    for day in 0..7 {
        for hour in 0..24u32 {
            let place = match hour {
                0..=7 | 22..=23 => "home",
                9..=16 if day < 5 => "work",
                _ if rng.gen_bool(0.2) => detours[rng.gen_range(0..detours.len())],
                _ => "home",
            };
            trace.push(place);
            hours.push(hour);
        }
    }
    (trace, hours)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (trace, hours) = generate_trace(42);
    let config = EstimatorConfig::default().with_solver(PredictabilitySolver::Bisection);

    let profile = SequenceProfile::compute(&trace, &config);
    println!("Profile of a synthetic week ({} hours):", profile.length);
    println!("  alphabet size        {}", profile.alphabet_size);
    println!("  S_rand / S_unc       {:.4} / {:.4}", profile.entropies.random, profile.entropies.uncorrelated);
    println!("  S_real               {:.4}", profile.entropies.real);
    println!("  baseline entropy     {:.4}", profile.baseline_entropy);
    println!("  diversity            {:.4}", profile.diversity);
    println!("  regularity           {:.4}", profile.regularity);
    println!("  stationarity         {:.4}", profile.stationarity);
    println!("  max predictability   {:.3}", profile.max_predictability);
    println!("  predictability gap   {:.3}", profile.predictability_gap);

    println!("Conditioned on the hour of day:");
    match (
        sequence_splitting(&trace, &hours),
        sequence_merging(&trace, &hours),
        sequence_concatenating(&trace, &hours),
    ) {
        (Ok(split), Ok(merge), Ok(concat)) => {
            println!("  splitting            {split:.4}");
            println!("  merging              {merge:.4}");
            println!("  concatenating        {concat:.4}");
        }
        (split, merge, concat) => {
            eprintln!("conditioning failed: {split:?} {merge:?} {concat:?}");
        }
    }
}
