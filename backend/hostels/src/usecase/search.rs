use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Deserialize;

use crate::domain::hostel::{HostelType, NearbyHostel};

pub const DEFAULT_PRICE_MIN: u32 = 0;
pub const DEFAULT_PRICE_MAX: u32 = 15000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostelTypeFilter {
    #[default]
    All,
    Boys,
    Girls,
    CoEd,
}

impl HostelTypeFilter {
    fn matches(self, hostel_type: HostelType) -> bool {
        match self {
            HostelTypeFilter::All => true,
            HostelTypeFilter::Boys => hostel_type == HostelType::Boys,
            HostelTypeFilter::Girls => hostel_type == HostelType::Girls,
            HostelTypeFilter::CoEd => hostel_type == HostelType::CoEd,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Distance,
    Price,
    Rating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConstraints {
    pub price_min: u32,
    pub price_max: u32,
    pub hostel_type: HostelTypeFilter,
    pub required_amenities: BTreeSet<String>,
    pub sort_by: SortBy,
}

impl Default for SearchConstraints {
    fn default() -> Self {
        Self {
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            hostel_type: HostelTypeFilter::All,
            required_amenities: BTreeSet::new(),
            sort_by: SortBy::Distance,
        }
    }
}

impl SearchConstraints {
    pub fn matches(&self, candidate: &NearbyHostel) -> bool {
        let hostel = &candidate.hostel;

        (self.price_min..=self.price_max).contains(&hostel.price_per_month)
            && self.hostel_type.matches(hostel.hostel_type)
            && self.required_amenities.iter().all(|a| hostel.has_amenity(a))
    }

    fn compare(&self, a: &NearbyHostel, b: &NearbyHostel) -> Ordering {
        match self.sort_by {
            SortBy::Price => a.hostel.price_per_month.cmp(&b.hostel.price_per_month),
            SortBy::Rating => b.hostel.rating.total_cmp(&a.hostel.rating),
            SortBy::Distance => a.distance_km.total_cmp(&b.distance_km),
        }
    }
}

/// Applies every filter in `constraints` and orders what is left.
///
/// The sort is stable. Callers refining hostels that never went through the
/// proximity filter pass a `distance_km` of 0.
pub fn refine(hostels: Vec<NearbyHostel>, constraints: &SearchConstraints) -> Vec<NearbyHostel> {
    let mut refined: Vec<NearbyHostel> = hostels
        .into_iter()
        .filter(|h| constraints.matches(h))
        .collect();

    refined.sort_by(|a, b| constraints.compare(a, b));
    refined
}
