pub mod domain;
mod event;
pub mod report;

pub use event::DonationEvent;
pub use report::{EventReport, StatusBreakdownEntry};
