use serde::{Deserialize, Serialize};

use super::{ClientError, MarketplaceClient};
use crate::models::{VehicleColor, VehicleType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_id: i64,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub license_plate: String,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub color: VehicleColor,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Vehicle {
    /// "Brand Model", skipping whichever part is missing.
    pub fn display_name(&self) -> String {
        [self.brand.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl MarketplaceClient {
    /// Vehicles registered by the signed in renter.
    pub async fn vehicles(&self) -> Result<Vec<Vehicle>, ClientError> {
        self.fetch("member/vehicles/index").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_a_vehicle() {
        let vehicle: Vehicle = serde_json::from_str(
            r#"{"vehicleId": 2, "type": "motorcycle_scooter", "licensePlate": "1กข 234",
                "province": "Bangkok", "brand": "Honda", "model": "Click", "color": "red"}"#,
        )
        .unwrap();
        assert_eq!(vehicle.vehicle_type.label(), "Scooter (Motorcycle)");
        assert_eq!(vehicle.color, VehicleColor::Red);
        assert_eq!(vehicle.display_name(), "Honda Click");
    }

    #[test]
    fn it_rejects_an_unknown_vehicle_type() {
        let result = serde_json::from_str::<Vehicle>(
            r#"{"vehicleId": 2, "type": "tank", "licensePlate": "X", "color": "red"}"#,
        );
        assert!(result.is_err());
    }
}
