use chrono::NaiveDate;
use donor_drive::workflows::donation::domain::Donor;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Built-in roster used when no `--roster` export is supplied. Includes one
/// under-age donor so deferral shows up in the demo output.
pub(crate) fn sample_donors() -> Vec<Donor> {
    vec![
        Donor::new("D001", "John Doe", 25, "O+", "555-0001"),
        Donor::new("D002", "Jane Smith", 30, "A-", "555-0002"),
        Donor::new("D003", "Bob Johnson", 45, "B+", "555-0003"),
        Donor::new("D004", "Dana Reyes", 17, "AB+", "555-0004"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date(" 2024-03-15 ").expect("date parses");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("15/03/2024").is_err());
    }

    #[test]
    fn sample_roster_has_unique_ids() {
        let donors = sample_donors();
        for donor in &donors {
            assert_eq!(
                donors.iter().filter(|other| other.id == donor.id).count(),
                1
            );
        }
    }
}
