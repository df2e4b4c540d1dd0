use anyhow::Result;
use dotenv::dotenv;
use log::info;
use serde::Serialize;

use roulette_sim::{bin_label, Outcome, SimConfig, Wheel};

#[derive(Serialize)]
struct SpinResult<'a> {
    number: usize,
    label: String,
    outcomes: Vec<&'a Outcome>,
}

#[derive(Serialize)]
struct SpinReport<'a> {
    seed: u64,
    spins: usize,
    results: Vec<SpinResult<'a>>,
}

fn build_wheel(config: &SimConfig, seed: u64) -> Result<Wheel> {
    let mut wheel = Wheel::with_seed(seed);
    if config.straight_bets {
        for number in 0..Wheel::BIN_COUNT {
            wheel.add_outcome(number, Outcome::new(bin_label(number), 35))?;
        }
    }
    Ok(wheel)
}

fn spin_report(wheel: &mut Wheel, seed: u64, spins: usize) -> SpinReport<'_> {
    let numbers: Vec<usize> = (0..spins).map(|_| wheel.choose_number()).collect();
    let wheel = &*wheel;
    let results = numbers
        .into_iter()
        .map(|number| SpinResult {
            number,
            label: bin_label(number),
            outcomes: wheel[number].sorted(),
        })
        .collect();

    SpinReport {
        seed,
        spins,
        results,
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = SimConfig::from_env()?;
    // Draw a seed up front so every run can be replayed.
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("spinning {} times with seed {}", config.spins, seed);

    let mut wheel = build_wheel(&config, seed)?;
    let report = spin_report(&mut wheel, seed, config.spins);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
