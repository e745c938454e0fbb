use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle states for a donor within a single drive.
///
/// Transitions only move forward: `Registered -> Screened -> Donated` on the
/// success path, or `Registered -> Deferred` on rejection. `Approved` belongs
/// to the status vocabulary but is never produced by the core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonorStatus {
    Registered,
    Screened,
    Approved,
    Donated,
    Deferred,
}

impl DonorStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Registered,
            Self::Screened,
            Self::Approved,
            Self::Donated,
            Self::Deferred,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Registered => "Registered",
            Self::Screened => "Screened",
            Self::Approved => "Approved",
            Self::Donated => "Donated",
            Self::Deferred => "Deferred",
        }
    }
}

/// One person's registration record within a drive.
///
/// The `id` is caller-assigned and not checked for uniqueness; lookups over
/// the roster resolve the first matching record in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub blood_type: String,
    pub contact: String,
    pub status: DonorStatus,
    pub last_donation: Option<DateTime<Utc>>,
    pub medical_history: BTreeMap<String, String>,
}

impl Donor {
    /// Build a freshly registered donor with no donation history.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        blood_type: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            blood_type: blood_type.into(),
            contact: contact.into(),
            status: DonorStatus::Registered,
            last_donation: None,
            medical_history: BTreeMap::new(),
        }
    }
}

/// The single eligibility rule applied during screening. Bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningPolicy {
    pub minimum_age: u32,
    pub maximum_age: u32,
}

impl Default for ScreeningPolicy {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            maximum_age: 65,
        }
    }
}

impl ScreeningPolicy {
    pub fn eligible(&self, age: u32) -> bool {
        age >= self.minimum_age && age <= self.maximum_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_bounds_are_inclusive() {
        let policy = ScreeningPolicy::default();
        assert!(!policy.eligible(17));
        assert!(policy.eligible(18));
        assert!(policy.eligible(65));
        assert!(!policy.eligible(66));
    }

    #[test]
    fn new_donor_starts_registered_with_empty_history() {
        let donor = Donor::new("D001", "John Doe", 25, "O+", "555-0001");
        assert_eq!(donor.status, DonorStatus::Registered);
        assert!(donor.last_donation.is_none());
        assert!(donor.medical_history.is_empty());
    }

    #[test]
    fn status_labels_cover_each_variant() {
        assert_eq!(DonorStatus::Registered.label(), "Registered");
        assert_eq!(DonorStatus::Screened.label(), "Screened");
        assert_eq!(DonorStatus::Approved.label(), "Approved");
        assert_eq!(DonorStatus::Donated.label(), "Donated");
        assert_eq!(DonorStatus::Deferred.label(), "Deferred");
    }

    #[test]
    fn ordered_lists_every_status_once() {
        let ordered = DonorStatus::ordered();
        assert_eq!(ordered.len(), 5);
        for status in ordered {
            assert_eq!(
                ordered.iter().filter(|other| **other == status).count(),
                1
            );
        }
    }
}
