//! Interactive console over a single in-memory lot
//!
//! Runs a prompt loop for one session: park, fetch, inspect, quit. The lot
//! lives for the lifetime of the process and is gone when it exits; there
//! is deliberately no store behind it.

use crate::cli::output::OutputFormatter;
use crate::config::LotConfig;
use crate::core::{ParkingLot, Ticket, Vehicle};
use crate::error::{LotKeeperError, Result};
use crate::generator::{PlateGenerator, is_plate_like};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

const ACTIONS: [&str; 5] = [
    "Park a vehicle",
    "Fetch a vehicle",
    "Show status",
    "List tickets",
    "Quit",
];

/// Handle the `console` command
///
/// Domain failures (full lot, bad plate) are reported and the loop
/// continues; prompt and terminal failures end the session.
pub fn handle_console_command(config: &LotConfig, formatter: &OutputFormatter) -> Result<()> {
    let mut lot = config.build_lot()?;
    let mut generator = PlateGenerator::new();
    let theme = ColorfulTheme::default();

    formatter.info(&format!(
        "🅿️  {} ({} positions)",
        lot.name().unwrap_or("lotkeeper console"),
        lot.capacity()
    ));

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => park_vehicle(&mut lot, &mut generator, &theme, formatter),
            1 => fetch_vehicle(&mut lot, &theme, formatter),
            2 => {
                show_status(&lot, formatter);
                Ok(())
            },
            3 => {
                list_tickets(&lot, formatter);
                Ok(())
            },
            _ => break,
        };

        match outcome {
            Ok(()) => {},
            Err(
                err @ (LotKeeperError::NoAvailablePosition | LotKeeperError::InvalidPlate(_)),
            ) => {
                formatter.error(&err.user_message());
                for suggestion in err.suggestions() {
                    formatter.info(&format!("  • {suggestion}"));
                }
            },
            Err(other) => return Err(other),
        }
    }

    formatter.info("Goodbye!");
    Ok(())
}

fn park_vehicle(
    lot: &mut ParkingLot,
    generator: &mut PlateGenerator,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<()> {
    let plate = if Confirm::with_theme(theme)
        .with_prompt("Generate a plate automatically?")
        .default(true)
        .interact()?
    {
        generator.next_plate()
    } else {
        let input: String = Input::with_theme(theme)
            .with_prompt("Plate number")
            .interact_text()?;
        let input = input.trim().to_uppercase();
        if !is_plate_like(&input) {
            return Err(LotKeeperError::InvalidPlate(input));
        }
        input.as_str().into()
    };

    let ticket = lot.park(Vehicle::new(plate))?;
    formatter.success(&format!("🎫 Issued {ticket}"));
    Ok(())
}

fn fetch_vehicle(
    lot: &mut ParkingLot,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<()> {
    if lot.is_empty() {
        formatter.info("The lot is empty.");
        return Ok(());
    }

    let mut tickets: Vec<Ticket> = lot.tickets().cloned().collect();
    tickets.sort_by_key(|t| t.position);
    let labels: Vec<String> = tickets.iter().map(ticket_label).collect();

    let selection = Select::with_theme(theme)
        .with_prompt("Which ticket?")
        .items(&labels)
        .default(0)
        .interact()?;

    let vehicle = lot.fetch(&tickets[selection])?;
    formatter.success(&format!(
        "🚗 Returned {} from position {}",
        vehicle.plate(),
        tickets[selection].position
    ));
    Ok(())
}

fn show_status(lot: &ParkingLot, formatter: &OutputFormatter) {
    if let Some(name) = lot.name() {
        formatter.info(&format!("Lot: {} (id {})", name, lot.id()));
    }
    formatter.info(&format!("Capacity: {}", lot.capacity()));
    formatter.info(&format!(
        "Occupied: {}",
        lot.capacity() - lot.available_capacity()
    ));
    formatter.info(&format!("Available: {}", lot.available_capacity()));
    formatter.info(&format!(
        "Availability rate: {:.0}%",
        lot.available_position_rate() * 100.0
    ));
    if lot.is_full() {
        formatter.warning("The lot is full.");
    }
}

fn list_tickets(lot: &ParkingLot, formatter: &OutputFormatter) {
    if lot.is_empty() {
        formatter.info("No active tickets.");
        return;
    }

    let mut tickets: Vec<&Ticket> = lot.tickets().collect();
    tickets.sort_by_key(|t| t.position);
    for ticket in tickets {
        formatter.info(&format!("  🎫 {}", ticket_label(ticket)));
    }
}

fn ticket_label(ticket: &Ticket) -> String {
    format!("position {}, plate {}", ticket.position, ticket.plate)
}
