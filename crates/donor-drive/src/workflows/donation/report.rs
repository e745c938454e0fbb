use super::domain::DonorStatus;
use serde::Serialize;

/// Summary snapshot of a drive, suitable for rendering or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventReport {
    pub event_name: String,
    /// Event date formatted as `YYYY-MM-DD`.
    pub date: String,
    pub location: String,
    pub total_registered: usize,
    pub target_donors: u32,
    pub collected_units: u32,
    pub partners: Vec<String>,
    /// Collected units as a percentage of the target, full f64 precision;
    /// exactly 0.0 while the target is unset.
    pub completion_rate: f64,
}

/// One row of the per-status roster breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBreakdownEntry {
    pub status: DonorStatus,
    pub status_label: &'static str,
    pub donors: usize,
}
