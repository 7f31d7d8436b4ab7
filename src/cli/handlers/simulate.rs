//! Handler for the `simulate` command
//!
//! Runs a scripted arrival/departure sequence against a fresh lot and
//! reports what happened: who parked where, who was turned away, which
//! positions were freed, and where the next arrival landed afterwards.
//! Seeding the plate generator makes a run reproducible end to end.

use crate::cli::output::OutputFormatter;
use crate::config::LotConfig;
use crate::core::Vehicle;
use crate::error::{LotKeeperError, Result};
use crate::generator::PlateGenerator;
use serde::Serialize;

/// Parameters for a simulation run
pub struct SimulateParams {
    /// Vehicles arriving at the gate
    pub arrivals: u32,
    /// Tickets redeemed after the arrivals, oldest first
    pub departures: u32,
    /// Plate generator seed
    pub seed: Option<u64>,
}

/// Handle the `simulate` command
pub fn handle_simulate_command(
    config: &LotConfig,
    params: &SimulateParams,
    formatter: &OutputFormatter,
) -> Result<()> {
    let report = run_simulation(config, params)?;

    if formatter.is_json() {
        formatter.print_json(&report)?;
    } else {
        output_text(&report, formatter);
    }

    Ok(())
}

/// A single park or fetch event
#[derive(Debug, Serialize)]
struct SlotEvent {
    plate: String,
    position: u32,
}

/// Everything a simulation run produced
#[derive(Debug, Serialize)]
struct SimulationReport {
    capacity: u32,
    parked: Vec<SlotEvent>,
    rejected: Vec<String>,
    fetched: Vec<SlotEvent>,
    reparked: Option<SlotEvent>,
    available_capacity: u32,
    available_position_rate: f64,
    full: bool,
}

fn run_simulation(config: &LotConfig, params: &SimulateParams) -> Result<SimulationReport> {
    let mut lot = config.build_lot()?;
    let mut generator = params
        .seed
        .map_or_else(PlateGenerator::new, PlateGenerator::with_seed);

    let mut parked = Vec::new();
    let mut rejected = Vec::new();
    let mut issued = Vec::new();

    for _ in 0..params.arrivals {
        let plate = generator.next_plate();
        match lot.park(Vehicle::new(plate.clone())) {
            Ok(ticket) => {
                parked.push(SlotEvent {
                    plate: plate.to_string(),
                    position: ticket.position.get(),
                });
                issued.push(ticket);
            },
            Err(LotKeeperError::NoAvailablePosition) => rejected.push(plate.to_string()),
            Err(other) => return Err(other),
        }
    }

    let mut fetched = Vec::new();
    for ticket in issued.iter().take(params.departures as usize) {
        let vehicle = lot.fetch(ticket)?;
        fetched.push(SlotEvent {
            plate: vehicle.plate().to_string(),
            position: ticket.position.get(),
        });
    }

    // One more arrival after the departures shows freed positions being
    // reused lowest-first.
    let reparked = if fetched.is_empty() || lot.is_full() {
        None
    } else {
        let ticket = lot.park(Vehicle::new(generator.next_plate()))?;
        Some(SlotEvent {
            plate: ticket.plate.to_string(),
            position: ticket.position.get(),
        })
    };

    Ok(SimulationReport {
        capacity: lot.capacity(),
        parked,
        rejected,
        fetched,
        reparked,
        available_capacity: lot.available_capacity(),
        available_position_rate: lot.available_position_rate(),
        full: lot.is_full(),
    })
}

fn output_text(report: &SimulationReport, formatter: &OutputFormatter) {
    formatter.info(&format!("Simulating a lot with {} positions", report.capacity));

    for event in &report.parked {
        formatter.success(&format!("Parked {} at position {}", event.plate, event.position));
    }
    for plate in &report.rejected {
        formatter.warning(&format!("Turned away {plate}: No available position."));
    }
    for event in &report.fetched {
        formatter.info(&format!("Fetched {} from position {}", event.plate, event.position));
    }
    if let Some(event) = &report.reparked {
        formatter.success(&format!(
            "Parked {} at position {} (freed position reused)",
            event.plate, event.position
        ));
    }

    formatter.info("");
    formatter.info(&format!(
        "Available positions: {}/{}",
        report.available_capacity, report.capacity
    ));
    formatter.info(&format!(
        "Availability rate: {:.2}",
        report.available_position_rate
    ));
    if report.full {
        formatter.warning("The lot is full.");
    }
}
