use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ClientError, MarketplaceClient, de};
use crate::availability::ScheduleWindow;
use crate::models::{ScheduleStatus, SpotType};

/// A published availability window for a spot, joined with the spot's
/// details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    #[serde(default)]
    pub spot: Option<i64>,
    #[serde(default)]
    pub spot_name: Option<String>,
    #[serde(default)]
    pub spot_type: Option<SpotType>,
    #[serde(default)]
    pub spot_location: Option<String>,
    #[serde(default)]
    pub spot_address: Option<String>,
    #[serde(default)]
    pub spot_description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub spot_size_width: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub spot_size_length: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub spot_size_height: Option<f64>,
    #[serde(default)]
    pub spot_image_path: Option<String>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub spot_latitude: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub spot_longitude: Option<f64>,
    #[serde(default)]
    pub user_image_path: Option<String>,
    #[serde(default)]
    pub status: Option<ScheduleStatus>,
    #[serde(deserialize_with = "de::decimal")]
    pub price_per_hour: f64,
    #[serde(default, deserialize_with = "de::opt_hours")]
    pub minimum_hour: Option<u32>,
    #[serde(default, deserialize_with = "de::flag")]
    pub charger: bool,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub charger_price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::local_datetime")]
    pub start_date_time: NaiveDateTime,
    #[serde(deserialize_with = "de::local_datetime")]
    pub end_date_time: NaiveDateTime,
    /// Mean review rating.
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub reviews: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_instant")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Schedule {
    pub fn window(&self) -> ScheduleWindow {
        ScheduleWindow::new(self.start_date_time, self.end_date_time, self.minimum_hour)
    }

    /// Floor area of the spot in square meters.
    pub fn spot_area(&self) -> Option<f64> {
        Some(self.spot_size_width? * self.spot_size_length?)
    }
}

impl MarketplaceClient {
    /// Public view of a single schedule.
    pub async fn schedule(&self, id: i64) -> Result<Schedule, ClientError> {
        self.fetch(&format!("member/schedules/display/{}", id)).await
    }

    /// Every bookable schedule, for search.
    pub async fn search_schedules(&self) -> Result<Vec<Schedule>, ClientError> {
        self.fetch("member/schedules/search").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SCHEDULE: &str = r#"{
        "id": 12,
        "spot": 4,
        "spotName": "Siam Square Lot B",
        "spotType": 1,
        "spotSizeWidth": 2.5,
        "spotSizeLength": "5.2",
        "status": 1,
        "pricePerHour": "40.00",
        "minimumHour": null,
        "charger": 1,
        "chargerPrice": 15,
        "startDateTime": "2024-01-01T00:00",
        "endDateTime": "2024-01-02T00:00:00",
        "reviews": 4.5,
        "createdAt": "2023-12-20T10:00:00Z",
        "user": {"id": 3}
    }"#;

    #[test]
    fn it_decodes_a_schedule() {
        let schedule: Schedule = serde_json::from_str(SCHEDULE).unwrap();
        assert_eq!(schedule.spot_type, Some(SpotType::Indoor));
        assert_eq!(schedule.price_per_hour, 40.0);
        assert!(schedule.charger);
        assert_eq!(schedule.spot_area(), Some(2.5 * 5.2));

        let window = schedule.window();
        assert_eq!(window.minimum_hours, 1);
        assert_eq!(
            window.end,
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }
}
