//! Status codes and lookup tables shared by every marketplace payload.
//!
//! The marketplace API encodes statuses as small integers (sometimes
//! sent as strings) and vehicle attributes as lowercase keys. Each of
//! them is an enum here so an unknown value fails at deserialization
//! instead of leaking through as a string comparison.

#[macro_use]
mod macros;
mod labels;

pub use labels::*;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

/// Raw status code as it appears on the wire, either `1` or `"1"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Code {
    Number(i64),
    Text(String),
}

impl Code {
    pub fn to_u8(&self, kind: &'static str) -> Result<u8, UnknownCode> {
        let unknown = || UnknownCode {
            kind,
            code: match self {
                Code::Number(n) => n.to_string(),
                Code::Text(s) => s.clone(),
            },
        };
        match self {
            Code::Number(n) => u8::try_from(*n).map_err(|_| unknown()),
            Code::Text(s) => s.trim().parse::<u8>().map_err(|_| unknown()),
        }
    }
}

coded_enum! {
    /// Lifecycle of a reservation.
    ReservationStatus {
        Upcoming = 1 => "Upcoming",
        Completed = 2 => "Completed",
        Canceled = 3 => "Canceled",
        Removed = 4 => "Removed",
    }
}

impl ReservationStatus {
    /// Whether a reservation in this status still holds its time slot.
    pub fn holds_slot(self) -> bool {
        matches!(self, ReservationStatus::Upcoming | ReservationStatus::Completed)
    }
}

coded_enum! {
    ScheduleStatus {
        Active = 1 => "Active",
        Inactive = 2 => "Inactive",
        Removed = 3 => "Removed",
    }
}

coded_enum! {
    WithdrawalStatus {
        Pending = 1 => "Pending",
        Completed = 2 => "Completed",
        Canceled = 3 => "Canceled",
    }
}

coded_enum! {
    ReviewStatus {
        Published = 1 => "Published",
        Hidden = 2 => "Hidden",
        Removed = 3 => "Removed",
    }
}

coded_enum! {
    /// Whether a parking spot is covered.
    SpotType {
        Indoor = 1 => "Indoor",
        Outdoor = 2 => "Outdoor",
    }
}

/// Label for an optional spot type, "None" when the payload has none.
pub fn spot_type_label(spot_type: Option<SpotType>) -> &'static str {
    spot_type.map_or("None", SpotType::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_numeric_and_string_codes() {
        let a: ReservationStatus = serde_json::from_str("1").unwrap();
        let b: ReservationStatus = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(a, ReservationStatus::Upcoming);
        assert_eq!(b, ReservationStatus::Canceled);
    }

    #[test]
    fn it_rejects_unknown_codes() {
        let err = serde_json::from_str::<WithdrawalStatus>("4").unwrap_err();
        assert!(err.to_string().contains("unknown WithdrawalStatus code: 4"));

        assert!(serde_json::from_str::<SpotType>("\"indoor\"").is_err());
        assert!(serde_json::from_str::<SpotType>("-1").is_err());
    }

    #[test]
    fn it_serializes_as_the_numeric_code() {
        let json = serde_json::to_string(&ReservationStatus::Completed).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn it_labels_statuses() {
        assert_eq!(ReservationStatus::Upcoming.label(), "Upcoming");
        assert_eq!(WithdrawalStatus::Pending.to_string(), "Pending");
        assert_eq!(spot_type_label(Some(SpotType::Outdoor)), "Outdoor");
        assert_eq!(spot_type_label(None), "None");
    }

    #[test]
    fn it_knows_which_reservations_hold_a_slot() {
        assert!(ReservationStatus::Upcoming.holds_slot());
        assert!(ReservationStatus::Completed.holds_slot());
        assert!(!ReservationStatus::Canceled.holds_slot());
        assert!(!ReservationStatus::Removed.holds_slot());
    }
}
