//! Search, sorting and pagination over schedule listings.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::marketplace::{Schedule, de};
use crate::models::SpotType;

coded_enum! {
    /// Hourly price brackets offered in the search sidebar.
    PriceBand {
        Under50 = 1 => "Less than 50",
        From50To100 = 2 => "50 - 100",
        From101To150 = 3 => "101 - 150",
        From151To200 = 4 => "151 - 200",
        Over200 = 5 => "More than 200",
    }
}

impl PriceBand {
    /// Bands are inclusive on whole numbers, so a price such as 100.5
    /// falls in none of them.
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBand::Under50 => price < 50.0,
            PriceBand::From50To100 => (50.0..=100.0).contains(&price),
            PriceBand::From101To150 => (101.0..=150.0).contains(&price),
            PriceBand::From151To200 => (151.0..=200.0).contains(&price),
            PriceBand::Over200 => price > 200.0,
        }
    }
}

coded_enum! {
    /// Vehicle a spot has to fit, judged from its floor size in meters.
    VehicleSize {
        Car = 1 => "Car",
        Motorcycle = 2 => "Motorcycle",
    }
}

impl VehicleSize {
    pub fn fits(self, width: f64, length: f64) -> bool {
        match self {
            VehicleSize::Car => width >= 2.4 && length >= 5.0,
            VehicleSize::Motorcycle => {
                (1.0..2.4).contains(&width) && (2.0..5.0).contains(&length)
            }
        }
    }
}

coded_enum! {
    ChargerFilter {
        With = 1 => "With charger",
        Without = 2 => "Without charger",
    }
}

coded_enum! {
    SortOrder {
        RatingDesc = 0 => "Top rated",
        RatingAsc = 1 => "Lowest rated",
        PriceAsc = 2 => "Price: low to high",
        PriceDesc = 3 => "Price: high to low",
        ChargerPriceAsc = 4 => "Charger price: low to high",
        ChargerPriceDesc = 5 => "Charger price: high to low",
        SizeAsc = 6 => "Size: small to large",
        SizeDesc = 7 => "Size: large to small",
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::RatingDesc
    }
}

/// Criteria of a schedule search. Every unset criterion matches.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleSearch {
    #[serde(default)]
    pub q: Option<String>,
    /// Requested range, which has to lie inside the schedule window.
    #[serde(default, deserialize_with = "de::opt_local_datetime")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de::opt_local_datetime")]
    pub end: Option<NaiveDateTime>,
    #[serde(default, rename = "type")]
    pub spot_type: Option<SpotType>,
    #[serde(default)]
    pub price: Option<PriceBand>,
    #[serde(default)]
    pub vehicle: Option<VehicleSize>,
    #[serde(default)]
    pub charger: Option<ChargerFilter>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

impl ScheduleSearch {
    pub fn matches(&self, schedule: &Schedule) -> bool {
        self.matches_query(schedule)
            && self.matches_range(schedule)
            && self
                .spot_type
                .is_none_or(|t| schedule.spot_type == Some(t))
            && self
                .price
                .is_none_or(|band| band.contains(schedule.price_per_hour))
            && self.vehicle.is_none_or(|size| {
                match (schedule.spot_size_width, schedule.spot_size_length) {
                    (Some(width), Some(length)) => size.fits(width, length),
                    _ => false,
                }
            })
            && self.charger.is_none_or(|charger| match charger {
                ChargerFilter::With => schedule.charger,
                ChargerFilter::Without => !schedule.charger,
            })
    }

    fn matches_query(&self, schedule: &Schedule) -> bool {
        let Some(query) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
            return true;
        };
        let query = query.to_lowercase();
        [
            &schedule.spot_name,
            &schedule.spot_address,
            &schedule.spot_description,
            &schedule.description,
        ]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(&query))
    }

    fn matches_range(&self, schedule: &Schedule) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                schedule.start_date_time <= start && end <= schedule.end_date_time
            }
            _ => true,
        }
    }

    /// Filters then sorts. Ties keep their upstream order.
    pub fn apply(&self, schedules: Vec<Schedule>) -> Vec<Schedule> {
        let mut found: Vec<Schedule> = schedules.into_iter().filter(|s| self.matches(s)).collect();
        let order = self.sort.unwrap_or_default();
        found.sort_by(|a, b| compare(order, a, b));
        found
    }
}

fn rating(schedule: &Schedule) -> f64 {
    schedule.reviews.unwrap_or(0.0)
}

fn size(schedule: &Schedule) -> f64 {
    schedule.spot_area().unwrap_or(0.0)
}

/// Schedules without a charger price sort after every priced one,
/// whichever the direction.
fn compare_charger_price(a: &Schedule, b: &Schedule, descending: bool) -> Ordering {
    let priced = |s: &Schedule| s.charger_price.filter(|p| *p != 0.0);
    match (priced(a), priced(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

fn compare(order: SortOrder, a: &Schedule, b: &Schedule) -> Ordering {
    match order {
        SortOrder::RatingDesc => rating(b).total_cmp(&rating(a)),
        SortOrder::RatingAsc => rating(a).total_cmp(&rating(b)),
        SortOrder::PriceAsc => a.price_per_hour.total_cmp(&b.price_per_hour),
        SortOrder::PriceDesc => b.price_per_hour.total_cmp(&a.price_per_hour),
        SortOrder::ChargerPriceAsc => compare_charger_price(a, b, false),
        SortOrder::ChargerPriceDesc => compare_charger_price(a, b, true),
        SortOrder::SizeAsc => size(a).total_cmp(&size(b)),
        SortOrder::SizeDesc => size(b).total_cmp(&size(a)),
    }
}

/// One page of a listing. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

/// Slices `items` into page `page` of `per_page` items. A page number
/// outside `1..=total_pages` is clamped to the nearest page.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        total_pages,
        total,
    }
}
