use crate::infra::{parse_date, sample_donors};
use chrono::{Local, NaiveDate};
use clap::Args;
use donor_drive::error::AppError;
use donor_drive::workflows::donation::domain::Donor;
use donor_drive::workflows::donation::{DonationEvent, EventReport};
use donor_drive::workflows::roster::RosterImporter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Event date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Donor target for the drive. Defaults to the roster size.
    #[arg(long)]
    pub(crate) target: Option<u32>,
    /// Optional roster CSV (id,name,age,blood_type,contact) replacing the
    /// built-in sample donors.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Emit the final report as JSON instead of the rendered summary.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Roster CSV to screen and process (id,name,age,blood_type,contact)
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Event date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Donor target for the drive. Defaults to the roster size.
    #[arg(long)]
    pub(crate) target: Option<u32>,
    /// Emit the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        date,
        target,
        roster,
        json,
    } = args;

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let donors = match roster {
        Some(path) => RosterImporter::from_path(path)?,
        None => sample_donors(),
    };

    let (event, report) = run_drive(donors, date, target);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_roster(&event);
        render_breakdown(&event);
        render_report(&report);
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        roster,
        date,
        target,
        json,
    } = args;

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let donors = RosterImporter::from_path(roster)?;
    let (_, report) = run_drive(donors, date, target);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

/// Drive the whole workflow: goal, partners, registration, screening, and
/// collection for every donor that passes.
pub(crate) fn run_drive(
    donors: Vec<Donor>,
    date: NaiveDate,
    target: Option<u32>,
) -> (DonationEvent, EventReport) {
    let target = target.unwrap_or(donors.len() as u32);

    let mut event = DonationEvent::new("Community Blood Drive", date, "Community Center");
    event.set_goals(target);
    event.add_partner("Local Hospital");
    event.add_partner("Red Cross");

    let mut turned_away = 0usize;
    let mut registered_ids = Vec::new();
    for donor in donors {
        let id = donor.id.clone();
        if event.register_donor(donor) {
            registered_ids.push(id);
        } else {
            turned_away += 1;
        }
    }
    if turned_away > 0 {
        info!(turned_away, "roster exceeded the donor target");
    }

    for id in &registered_ids {
        if event.screen_donor(id) {
            event.process_donation(id);
        }
    }

    let report = event.generate_report();
    (event, report)
}

fn render_roster(event: &DonationEvent) {
    println!("Roster ({} donors):", event.donors().len());
    for donor in event.donors() {
        println!(
            "  {:<6} {:<16} age {:<3} {:<4} {}",
            donor.id,
            donor.name,
            donor.age,
            donor.blood_type,
            donor.status.label()
        );
    }
    println!();
}

fn render_breakdown(event: &DonationEvent) {
    println!("Status breakdown:");
    for entry in event.status_breakdown() {
        println!("  {:<12} {}", entry.status_label, entry.donors);
    }
    println!();
}

fn render_report(report: &EventReport) {
    println!("Event Report: {}", report.event_name);
    println!("  date:            {}", report.date);
    println!("  location:        {}", report.location);
    println!("  registered:      {}", report.total_registered);
    println!("  target donors:   {}", report.target_donors);
    println!("  collected units: {}", report.collected_units);
    println!("  partners:        {}", report.partners.join(", "));
    println!("  completion rate: {:.1}%", report.completion_rate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use donor_drive::workflows::donation::domain::DonorStatus;

    fn demo_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid demo date")
    }

    #[test]
    fn sample_drive_collects_from_every_eligible_donor() {
        let (event, report) = run_drive(sample_donors(), demo_date(), None);

        assert_eq!(report.total_registered, 4);
        assert_eq!(report.collected_units, 3);
        assert_eq!(event.status_of("D004"), Some(DonorStatus::Deferred));
        assert_eq!(report.completion_rate, 75.0);
    }

    #[test]
    fn explicit_target_caps_registration() {
        let (event, report) = run_drive(sample_donors(), demo_date(), Some(2));

        assert_eq!(report.total_registered, 2);
        assert_eq!(report.target_donors, 2);
        assert!(event.status_of("D003").is_none(), "turned away at the door");
        assert!(event.status_of("D004").is_none());
    }

    #[test]
    fn drive_report_date_matches_the_event_date() {
        let (_, report) = run_drive(sample_donors(), demo_date(), None);
        assert_eq!(report.date, "2024-03-15");
    }
}
