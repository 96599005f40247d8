//! Vehicle and payment lookup tables.

keyed_enum! {
    VehicleType {
        Sedan = "sedan" => "Sedan",
        Coupe = "coupe" => "Coupe",
        Hatchback = "hatchback" => "Hatchback",
        Crossover = "crossover" => "Crossover",
        Suv = "suv" => "SUV",
        Ppv = "ppv" => "PPV",
        Pickup = "pickup" => "Pickup",
        Wagon = "wagon" => "Wagon",
        Offroad = "offroad" => "Off-road",
        Sports = "sports" => "Sports",
        Micro = "micro" => "Micro",
        Van = "van" => "Van",
        Mpv = "mpv" => "MPV",
        Convertible = "convertible" => "Convertible",
        Muscle = "muscle" => "Muscle",
        Limousine = "limousine" => "Limousine",
        MotorcycleStandard = "motorcycle_standard" => "Standard (Motorcycle)",
        MotorcycleCruiser = "motorcycle_cruiser" => "Cruiser (Motorcycle)",
        MotorcycleTouring = "motorcycle_touring" => "Touring (Motorcycle)",
        MotorcycleSport = "motorcycle_sport" => "Sport (Motorcycle)",
        MotorcycleOffroad = "motorcycle_offroad" => "Off-road (Motorcycle)",
        MotorcycleDualPurpose = "motorcycle_dualpurpose" => "Dual-purpose (Motorcycle)",
        MotorcycleSportTouring = "motorcycle_sporttouring" => "Sport Touring (Motorcycle)",
        MotorcycleScooter = "motorcycle_scooter" => "Scooter (Motorcycle)",
        Other = "other" => "Other",
    }
}

impl VehicleType {
    pub fn is_motorcycle(self) -> bool {
        self.key().starts_with("motorcycle_")
    }
}

keyed_enum! {
    VehicleColor {
        White = "white" => "White",
        Black = "black" => "Black",
        Silver = "silver" => "Silver",
        Red = "red" => "Red",
        Blue = "blue" => "Blue",
        Grey = "grey" => "Grey",
        Green = "green" => "Green",
        Yellow = "yellow" => "Yellow",
        Orange = "orange" => "Orange",
        Brown = "brown" => "Brown",
        Purple = "purple" => "Purple",
        Pink = "pink" => "Pink",
        Beige = "beige" => "Beige",
        Gold = "gold" => "Gold",
        Champagne = "champagne" => "Champagne",
        Maroon = "maroon" => "Maroon",
        Turquoise = "turquoise" => "Turquoise",
        Other = "other" => "Other",
    }
}

keyed_enum! {
    /// Payment methods offered at checkout.
    PaymentMethod {
        Bank = "bank" => "Mobile Banking",
        PromptPay = "promptpay" => "QR Promptpay",
        Card = "card" => "Credit/Debit card",
        PayPal = "paypal" => "PayPal",
        Google = "google" => "Google Pay",
        Apple = "apple" => "Apple Pay",
        Payoneer = "payoneer" => "Payoneer",
        Usdt = "usdt" => "USDT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_maps_keys_to_labels() {
        let vehicle: VehicleType = serde_json::from_str("\"motorcycle_dualpurpose\"").unwrap();
        assert_eq!(vehicle, VehicleType::MotorcycleDualPurpose);
        assert_eq!(vehicle.label(), "Dual-purpose (Motorcycle)");
        assert!(vehicle.is_motorcycle());
        assert!(!VehicleType::Suv.is_motorcycle());

        let color: VehicleColor = "champagne".parse().unwrap();
        assert_eq!(color.to_string(), "Champagne");
    }

    #[test]
    fn it_rejects_unknown_keys() {
        assert!(serde_json::from_str::<VehicleColor>("\"magenta\"").is_err());
        let err = "cash".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(err.kind, "PaymentMethod");
        assert_eq!(err.code, "cash");
    }

    #[test]
    fn it_serializes_the_key() {
        let json = serde_json::to_string(&PaymentMethod::PromptPay).unwrap();
        assert_eq!(json, "\"promptpay\"");
    }

    #[test]
    fn it_has_a_label_for_every_variant() {
        assert_eq!(VehicleType::ALL.len(), 25);
        assert_eq!(VehicleColor::ALL.len(), 18);
        assert!(PaymentMethod::ALL.iter().all(|m| !m.label().is_empty()));
    }
}
