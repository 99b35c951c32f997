/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::{env, process};

use clap::Parser;
use serde::Serialize;

use phys_units::prefix::{KILO, NANO};
use phys_units::units::{METER, NEWTON, SECOND};
use phys_units::{make_vec, Quantity, QuantityLiterals, UnitError, Vector};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Particle-in-cell unit demo
///
/// Computes a few simulation parameters with dimension checking and
/// prints them.
struct Args {
    #[clap(long)]
    /// Output JSON instead of text.
    json: bool,
    #[clap(long, short, action = clap::ArgAction::Count)]
    /// Increase log verbosity (repeatable).
    verbose: u8,
}

#[derive(Serialize)]
struct Report {
    speed: Quantity,
    pic_speed: Quantity,
    wavelength: Quantity,
    torque: Quantity,
    torque_length: Quantity,
    relative_speed: Quantity,
    delta_t: Quantity,
    cell_size: Vector<Quantity, 3>,
    cell_volume: Quantity,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            3.. => simplelog::LevelFilter::Trace,
        },
        simplelog::ConfigBuilder::new().build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    match compute() {
        Ok(report) => match args.json {
            true => println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .expect("serialization failed!?")
            ),
            false => print_report(&report),
        },
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1)
        }
    }
}

fn compute() -> Result<Report, UnitError> {
    let speed = 299792458.0 * METER / SECOND;
    let pic_speed = (1.0 / (299792458.0 / 1000.0)) * SECOND / (KILO * METER);
    let unit_speed = 299792458 * METER / SECOND;
    let wavelength = 800.0 * NANO * METER;
    let torque = 10.0.g() * NEWTON * METER;
    let cell_size =
        make_vec![wavelength, 0.1772e-6 * METER, 0.1772e-6 * METER];

    log::debug!("unit speed: {}", unit_speed);

    Ok(Report {
        speed,
        pic_speed,
        wavelength,
        torque,
        torque_length: torque * METER,
        relative_speed: speed.to(unit_speed)?,
        delta_t: 1.79e-16 * SECOND,
        cell_size,
        cell_volume: cell_size.accumulate(phys_units::vector::operation::Mul),
    })
}

fn print_report(report: &Report) {
    println!("speed          = {}", report.speed);
    println!("pic speed      = {}", report.pic_speed);
    println!("wavelength     = {}", report.wavelength);
    println!("torque         = {}", report.torque);
    println!("torque length  = {}", report.torque_length);
    println!("relative speed = {}", report.relative_speed);
    println!("delta t        = {}", report.delta_t);
    println!("cell size      = {}", report.cell_size);
    println!("cell volume    = {}", report.cell_volume);
}
