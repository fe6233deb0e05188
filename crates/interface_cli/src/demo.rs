//! Demo run
//!
//! Walks through every mapping operation once and records what happened in a
//! [`DemoReport`]. The binary renders the report; tests inspect it directly.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::{MapHandler, MapperRegistry, MappingResult, PartnerRules, TypePair};
use domain_reservation::{dirs21, google, mapper_catalog, read_dirs21_batch, GoogleReservationRules};
use serde::Serialize;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything the demo run produced
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub registered_mappers: Vec<TypePair>,
    pub original: dirs21::Reservation,
    pub mapped: google::Reservation,
    pub with_rules: google::Reservation,
    pub rule_errors: Vec<String>,
    pub mapped_back: dirs21::Reservation,
    pub batch: Vec<google::Reservation>,
    pub batch_with_rules: Vec<google::Reservation>,
    pub validated: MappingResult<google::Reservation>,
    pub rejected: MappingResult<google::Reservation>,
}

/// Midnight on the given day
fn date(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, CliError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(CliError::InvalidDate { year, month, day })
}

/// A Dirs21 reservation with check-in and check-out as (year, month, day)
fn reservation(
    id: &str,
    (in_year, in_month, in_day): (i32, u32, u32),
    (out_year, out_month, out_day): (i32, u32, u32),
    guest: &str,
) -> Result<dirs21::Reservation, CliError> {
    Ok(dirs21::Reservation {
        reservation_id: id.to_string(),
        check_in: date(in_year, in_month, in_day)?,
        check_out: date(out_year, out_month, out_day)?,
        guest_name: guest.to_string(),
    })
}

/// The single reservation the demo maps end to end
pub fn sample_reservation() -> Result<dirs21::Reservation, CliError> {
    reservation("R-1001", (2026, 3, 10), (2026, 3, 12), "Adnan")
}

/// The batch mapped when no input file is configured
pub fn sample_batch() -> Result<Vec<dirs21::Reservation>, CliError> {
    Ok(vec![
        reservation("R-2001", (2026, 4, 1), (2026, 4, 3), "Alice Johnson")?,
        reservation("R-2002", (2026, 4, 5), (2026, 4, 7), "Bob Williams")?,
        reservation("R-2003", (2026, 4, 10), (2026, 4, 12), "Carol Martinez")?,
    ])
}

/// A reservation that passes Google validation once mapped
pub fn valid_reservation() -> Result<dirs21::Reservation, CliError> {
    reservation("R-3001", (2026, 5, 1), (2026, 5, 3), "David Brown")
}

/// A reservation with a blank guest and a reversed stay
pub fn invalid_reservation() -> Result<dirs21::Reservation, CliError> {
    reservation("", (2026, 5, 10), (2026, 5, 8), "")
}

/// Builds a handler with every reservation mapper discovered
pub fn discover_handler() -> Result<MapHandler, CliError> {
    let registry = MapperRegistry::new();
    let count = registry.register_from_source(&mapper_catalog())?;
    info!(count, "Registered reservation mappers");
    Ok(MapHandler::new(Arc::new(registry)))
}

/// Runs the demo, reading the batch from `config.input_path` when set
pub fn run(config: &CliConfig) -> Result<DemoReport, CliError> {
    let batch = match &config.input_path {
        Some(path) => read_dirs21_batch(path)?,
        None => sample_batch()?,
    };
    run_with_batch(&discover_handler()?, batch)
}

/// Runs the demo against the given handler and batch
pub fn run_with_batch(handler: &MapHandler, batch: Vec<dirs21::Reservation>) -> Result<DemoReport, CliError> {
    let rules = GoogleReservationRules::new();
    let original = sample_reservation()?;

    let mapped: google::Reservation = handler.map(&original)?;

    let mut with_rules = mapped.clone();
    rules.apply(&mut with_rules);
    let rule_errors = rules.validate(&with_rules);

    let mapped_back: dirs21::Reservation = handler.map(&with_rules)?;

    let mapped_batch: Vec<google::Reservation> = handler.map_collection(&batch)?;
    let batch_with_rules: Vec<google::Reservation> = handler.map_collection_with_rules(&batch, &rules)?;

    let validated: MappingResult<google::Reservation> =
        handler.map_and_validate(&valid_reservation()?, &rules)?;
    let rejected: MappingResult<google::Reservation> =
        handler.map_and_validate(&invalid_reservation()?, &rules)?;

    info!(
        batch = batch.len(),
        rejected = rejected.errors().len(),
        "Demo run complete"
    );

    Ok(DemoReport {
        registered_mappers: handler.registry().registered_mappers().collect(),
        original,
        mapped,
        with_rules,
        rule_errors,
        mapped_back,
        batch: mapped_batch,
        batch_with_rules,
        validated,
        rejected,
    })
}

impl DemoReport {
    /// Renders the report in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.to_string()),
        }
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "=== Dirs21 Mapping System Demo ===")?;
        writeln!(out)?;

        writeln!(out, "Registered {} mapper(s)", self.registered_mappers.len())?;
        for pair in &self.registered_mappers {
            writeln!(out, "    {pair}")?;
        }
        writeln!(out)?;

        writeln!(out, "Original Dirs21 reservation:")?;
        write_dirs21(out, &self.original)?;
        writeln!(out)?;

        writeln!(out, "Mapped to Google:")?;
        write_google(out, &self.mapped)?;
        writeln!(out)?;

        writeln!(out, "After Google partner rules:")?;
        writeln!(out, "    BookingId: {}", self.with_rules.booking_id)?;
        writeln!(out, "    GuestFullName: {}", self.with_rules.guest_full_name)?;
        write_errors(out, &self.rule_errors)?;
        writeln!(out)?;

        writeln!(out, "Mapped back to Dirs21:")?;
        write_dirs21(out, &self.mapped_back)?;
        writeln!(out)?;

        writeln!(out, "Batch of {} reservation(s):", self.batch.len())?;
        for reservation in &self.batch {
            writeln!(
                out,
                "    → {}: {} ({} to {})",
                reservation.booking_id,
                reservation.guest_full_name,
                reservation.arrival_date.format(DATE_FORMAT),
                reservation.departure_date.format(DATE_FORMAT),
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Batch with Google rules:")?;
        for reservation in &self.batch_with_rules {
            writeln!(out, "    → {}: {}", reservation.booking_id, reservation.guest_full_name)?;
        }
        writeln!(out)?;

        writeln!(out, "Map and validate:")?;
        write_result(out, &self.validated)?;
        writeln!(out)?;

        writeln!(out, "Map and validate with invalid data:")?;
        write_result(out, &self.rejected)
    }
}

fn write_dirs21(out: &mut fmt::Formatter<'_>, reservation: &dirs21::Reservation) -> fmt::Result {
    writeln!(out, "    ReservationId: {}", reservation.reservation_id)?;
    writeln!(out, "    CheckIn: {}", reservation.check_in.format(DATE_FORMAT))?;
    writeln!(out, "    CheckOut: {}", reservation.check_out.format(DATE_FORMAT))?;
    writeln!(out, "    GuestName: {}", reservation.guest_name)
}

fn write_google(out: &mut fmt::Formatter<'_>, reservation: &google::Reservation) -> fmt::Result {
    writeln!(out, "    BookingId: {}", reservation.booking_id)?;
    writeln!(out, "    ArrivalDate: {}", reservation.arrival_date.format(DATE_FORMAT))?;
    writeln!(out, "    DepartureDate: {}", reservation.departure_date.format(DATE_FORMAT))?;
    writeln!(out, "    GuestFullName: {}", reservation.guest_full_name)
}

fn write_errors(out: &mut fmt::Formatter<'_>, errors: &[String]) -> fmt::Result {
    if errors.is_empty() {
        return writeln!(out, "    Validation passed");
    }
    writeln!(out, "    Validation failed with {} error(s):", errors.len())?;
    for error in errors {
        writeln!(out, "      - {error}")?;
    }
    Ok(())
}

fn write_result(out: &mut fmt::Formatter<'_>, result: &MappingResult<google::Reservation>) -> fmt::Result {
    writeln!(out, "    Valid: {}", result.is_valid())?;
    if result.is_valid() {
        writeln!(
            out,
            "    Result: {} - {}",
            result.value().booking_id,
            result.value().guest_full_name
        )
    } else {
        write_errors(out, result.errors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_consistent() {
        assert_eq!(sample_reservation().unwrap().stay_nights(), 2);
        assert_eq!(sample_batch().unwrap().len(), 3);

        let invalid = invalid_reservation().unwrap();
        assert!(invalid.check_out < invalid.check_in);
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let err = date(2026, 2, 30).unwrap_err();
        assert!(matches!(err, CliError::InvalidDate { year: 2026, month: 2, day: 30 }));
        assert!(reservation("R-1", (2026, 13, 1), (2026, 1, 2), "Guest").is_err());
    }

    #[test]
    fn test_display_matches_text_render() {
        let handler = discover_handler().unwrap();
        let report = run_with_batch(&handler, sample_batch().unwrap()).unwrap();
        assert_eq!(report.to_string(), report.render(OutputFormat::Text).unwrap());
    }

    #[test]
    fn test_text_report_sections() {
        let handler = discover_handler().unwrap();
        let report = run_with_batch(&handler, sample_batch().unwrap()).unwrap();
        let text = report.render(OutputFormat::Text).unwrap();

        assert!(text.starts_with("=== Dirs21 Mapping System Demo ==="));
        assert!(text.contains("Registered 2 mapper(s)"));
        assert!(text.contains("BookingId: GOOGLE-R-1001"));
        assert!(text.contains("→ R-2001: Alice Johnson (2026-04-01 to 2026-04-03)"));
        assert!(text.contains("→ GOOGLE-R-2003: CAROL MARTINEZ"));
        assert!(text.contains("Result: GOOGLE-R-3001 - DAVID BROWN"));
        assert!(text.contains("Validation failed with 2 error(s):"));
    }
}
