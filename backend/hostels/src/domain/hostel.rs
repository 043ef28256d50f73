use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::geo::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostelType {
    Boys,
    Girls,
    CoEd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostel {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub price_per_month: u32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub rating: f64,
    pub total_reviews: u32,
    pub description: String,
    pub owner_id: Uuid,
    pub total_beds: u32,
    pub available_beds: u32,
    pub hostel_type: HostelType,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Owner-supplied fields of a new listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HostelListing {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub price_per_month: u32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub description: String,
    pub total_beds: u32,
    pub available_beds: u32,
    pub hostel_type: HostelType,
}

impl Hostel {
    /// New listings start unverified and unrated.
    pub fn new(owner_id: Uuid, listing: HostelListing) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: listing.name,
            address: listing.address,
            coordinates: listing.coordinates,
            price_per_month: listing.price_per_month,
            images: listing.images,
            amenities: listing.amenities,
            rating: 0.0,
            total_reviews: 0,
            description: listing.description,
            owner_id,
            total_beds: listing.total_beds,
            available_beds: listing.available_beds,
            hostel_type: listing.hostel_type,
            verified: false,
            created_at: Utc::now(),
        }
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// A hostel paired with its distance from the college it was searched against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyHostel {
    #[serde(flatten)]
    pub hostel: Hostel,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> HostelListing {
        HostelListing {
            name: "Budget Stay PG".to_string(),
            address: "Ghatkesar, Near Railway Station".to_string(),
            coordinates: Coordinates { lat: 17.5489, lng: 78.6756 },
            price_per_month: 5500,
            images: vec![],
            amenities: vec!["Wi-Fi".to_string(), "Food".to_string()],
            description: String::new(),
            total_beds: 25,
            available_beds: 3,
            hostel_type: HostelType::Boys,
        }
    }

    #[test]
    fn test_new_hostel_is_unverified_and_unrated() {
        let owner_id = Uuid::new_v4();
        let hostel = Hostel::new(owner_id, listing());

        assert_eq!(hostel.owner_id, owner_id);
        assert_eq!(hostel.rating, 0.0);
        assert_eq!(hostel.total_reviews, 0);
        assert!(!hostel.verified);
        assert_eq!(hostel.price_per_month, 5500);
    }

    #[test]
    fn test_has_amenity_is_exact_match() {
        let hostel = Hostel::new(Uuid::new_v4(), listing());

        assert!(hostel.has_amenity("Wi-Fi"));
        assert!(!hostel.has_amenity("wi-fi"));
        assert!(!hostel.has_amenity("AC"));
    }

    #[test]
    fn test_hostel_type_wire_format() {
        assert_eq!(serde_json::to_string(&HostelType::CoEd).unwrap(), "\"co-ed\"");
        let parsed: HostelType = serde_json::from_str("\"girls\"").unwrap();
        assert_eq!(parsed, HostelType::Girls);
    }
}
