//! CampusNav Headless Period Harness
//!
//! Loads a student roster, works out where everyone's next class is, tells
//! each student how to get there, and reports the arrivals. Runs entirely
//! in-process: no DB, no networking, no rendering.
//!
//! Usage:
//!   cargo run -p campusnav-simtest
//!   cargo run -p campusnav-simtest -- --verbose
//!   cargo run -p campusnav-simtest -- --roster students.json --campus campus.json

use std::path::{Path, PathBuf};

use campusnav_logic::campus::{validate_config, CampusConfig};
use campusnav_logic::dispatch::{run_period, PeriodOutcome};
use campusnav_logic::roster::{build_roster, RosterRow};

// ── Bundled roster (same JSON the tests use) ────────────────────────────
const ROSTER_JSON: &str = include_str!("../../../data/students.json");

struct Args {
    verbose: bool,
    roster: Option<PathBuf>,
    campus: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Args {
            verbose: false,
            roster: None,
            campus: None,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--verbose" | "-v" => args.verbose = true,
                "--roster" => {
                    args.roster = Some(iter.next().ok_or("--roster needs a path")?.into());
                }
                "--campus" => {
                    args.campus = Some(iter.next().ok_or("--campus needs a path")?.into());
                }
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(args)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse()?;

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    println!("=== CampusNav Period Harness ===\n");

    let campus = load_campus(args.campus.as_deref())?;
    let rows = load_roster(args.roster.as_deref())?;

    // Step 0: build students, everyone starts in their first-period room
    let mut students = build_roster(&rows)?;

    // Steps 1-4: next class, its location, directions, arrival
    let outcomes = run_period(&mut students, &campus);
    for outcome in &outcomes {
        report(outcome, args.verbose);
    }

    // ── Summary ──
    let routed = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let failed = outcomes.len() - routed;
    println!(
        "\n=== RESULT: {}/{} students routed, {} failed ===",
        routed,
        outcomes.len(),
        failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn load_campus(path: Option<&Path>) -> Result<CampusConfig, Box<dyn std::error::Error>> {
    let campus = match path {
        Some(path) => {
            log::info!("Loading campus layout from: {}", path.display());
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => CampusConfig::default(),
    };

    let errors = validate_config(&campus);
    if !errors.is_empty() {
        for e in &errors {
            log::error!("Campus config: {}", e);
        }
        return Err(format!("campus config has {} error(s)", errors.len()).into());
    }
    Ok(campus)
}

fn load_roster(path: Option<&Path>) -> Result<Vec<RosterRow>, Box<dyn std::error::Error>> {
    let rows: Vec<RosterRow> = match path {
        Some(path) => {
            log::info!("Loading roster from: {}", path.display());
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => serde_json::from_str(ROSTER_JSON)?,
    };
    Ok(rows)
}

fn report(outcome: &PeriodOutcome, verbose: bool) {
    match &outcome.result {
        Ok(arrival) => {
            let itinerary = &arrival.itinerary;
            println!(
                "{} has been told to: {}\nin order to arrive at: {}\n",
                outcome.student,
                itinerary.instructions(),
                itinerary.destination
            );
            println!(
                "{} has left {} and arrived at {} for {} class",
                outcome.student, arrival.origin, itinerary.destination, itinerary.class_name
            );
            if verbose {
                println!(
                    "  walked {:.2} m, climbed {} floor(s)",
                    itinerary.route.total_distance(),
                    itinerary.route.floors_climbed()
                );
            }
            println!("---------------------------------");
        }
        Err(e) => {
            println!("✗ {}: {}", outcome.student, e);
            println!("---------------------------------");
        }
    }
}
