use super::domain::{Donor, DonorStatus, ScreeningPolicy};
use super::report::{EventReport, StatusBreakdownEntry};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

/// One blood-donation drive: its metadata, donor roster, and collection
/// counters.
///
/// Every fallible operation reports failure through its `bool` return; the
/// cause is recovered by inspecting state (`status_of`, `target_donors`).
/// The instance is single-threaded by contract — callers wanting to share
/// one across actors must add their own mutual exclusion.
#[derive(Debug, Clone)]
pub struct DonationEvent {
    event_name: String,
    date: NaiveDate,
    location: String,
    donors: Vec<Donor>,
    partners: Vec<String>,
    target_donors: u32,
    collected_units: u32,
    policy: ScreeningPolicy,
}

impl DonationEvent {
    pub fn new(
        event_name: impl Into<String>,
        date: NaiveDate,
        location: impl Into<String>,
    ) -> Self {
        Self::with_policy(event_name, date, location, ScreeningPolicy::default())
    }

    pub fn with_policy(
        event_name: impl Into<String>,
        date: NaiveDate,
        location: impl Into<String>,
        policy: ScreeningPolicy,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            date,
            location: location.into(),
            donors: Vec::new(),
            partners: Vec::new(),
            target_donors: 0,
            collected_units: 0,
            policy,
        }
    }

    /// Set the donor target. No validation: the goal may be raised or
    /// lowered at any time, and a lowered goal only blocks registration
    /// going forward.
    pub fn set_goals(&mut self, target_donors: u32) {
        self.target_donors = target_donors;
        info!(target_donors, event = %self.event_name, "goal set");
    }

    /// Record a partnering organization. Duplicates are permitted.
    pub fn add_partner(&mut self, name: impl Into<String>) {
        let name = name.into();
        info!(partner = %name, "added partner");
        self.partners.push(name);
    }

    /// Add a donor to the roster, unless the roster already meets the
    /// target. With an unset target (0) every registration is rejected:
    /// the goal must be set before registration opens.
    pub fn register_donor(&mut self, donor: Donor) -> bool {
        if self.donors.len() >= self.target_donors as usize {
            warn!(donor = %donor.name, "registration rejected: event is full");
            return false;
        }

        info!(donor = %donor.name, id = %donor.id, "registered donor");
        self.donors.push(donor);
        true
    }

    /// Apply the age-eligibility rule to the donor with the given id.
    ///
    /// The rule fires regardless of the donor's current status, so
    /// re-screening a `Donated` or `Deferred` donor silently resets it to
    /// `Screened` or `Deferred`. An unknown id returns false without
    /// touching anything.
    pub fn screen_donor(&mut self, donor_id: &str) -> bool {
        let policy = self.policy;
        let Some(donor) = self.find_donor_mut(donor_id) else {
            return false;
        };

        if !policy.eligible(donor.age) {
            donor.status = DonorStatus::Deferred;
            warn!(donor = %donor.name, age = donor.age, "donor deferred: age restriction");
            return false;
        }

        donor.status = DonorStatus::Screened;
        info!(donor = %donor.name, "donor passed screening");
        true
    }

    /// Record a completed donation for a screened donor, stamping the
    /// collection time with `Utc::now()`.
    pub fn process_donation(&mut self, donor_id: &str) -> bool {
        self.process_donation_at(donor_id, Utc::now())
    }

    /// Record a completed donation with an explicit collection timestamp.
    ///
    /// Succeeds only from `Screened`; any other status (including an
    /// already-`Donated` donor, which would otherwise double count) returns
    /// false with no mutation.
    pub fn process_donation_at(&mut self, donor_id: &str, collected_at: DateTime<Utc>) -> bool {
        let Some(donor) = self.find_donor_mut(donor_id) else {
            return false;
        };

        if donor.status != DonorStatus::Screened {
            return false;
        }

        donor.status = DonorStatus::Donated;
        donor.last_donation = Some(collected_at);
        self.collected_units += 1;
        info!(
            donor = %donor_id,
            collected_units = self.collected_units,
            "collected donation"
        );
        true
    }

    /// Snapshot the event as a summary report. Pure: no mutation.
    pub fn generate_report(&self) -> EventReport {
        let completion_rate = if self.target_donors > 0 {
            f64::from(self.collected_units) / f64::from(self.target_donors) * 100.0
        } else {
            0.0
        };

        EventReport {
            event_name: self.event_name.clone(),
            date: self.date.format("%Y-%m-%d").to_string(),
            location: self.location.clone(),
            total_registered: self.donors.len(),
            target_donors: self.target_donors,
            collected_units: self.collected_units,
            partners: self.partners.clone(),
            completion_rate,
        }
    }

    /// Count donors per status, in display order. Statuses with no donors
    /// still appear with a zero count.
    pub fn status_breakdown(&self) -> Vec<StatusBreakdownEntry> {
        DonorStatus::ordered()
            .into_iter()
            .map(|status| StatusBreakdownEntry {
                status,
                status_label: status.label(),
                donors: self
                    .donors
                    .iter()
                    .filter(|donor| donor.status == status)
                    .count(),
            })
            .collect()
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn partners(&self) -> &[String] {
        &self.partners
    }

    pub fn target_donors(&self) -> u32 {
        self.target_donors
    }

    pub fn collected_units(&self) -> u32 {
        self.collected_units
    }

    /// Status of the first roster entry with the given id.
    pub fn status_of(&self, donor_id: &str) -> Option<DonorStatus> {
        self.find_donor(donor_id).map(|donor| donor.status)
    }

    fn find_donor(&self, donor_id: &str) -> Option<&Donor> {
        self.donors.iter().find(|donor| donor.id == donor_id)
    }

    fn find_donor_mut(&mut self, donor_id: &str) -> Option<&mut Donor> {
        self.donors.iter_mut().find(|donor| donor.id == donor_id)
    }
}
