use crate::domain::college::College;
use crate::domain::hostel::{Hostel, NearbyHostel};

/// Hostels farther than this from a college are not considered near it.
pub const PROXIMITY_RADIUS_KM: f64 = 2.0;

/// Hostels within `PROXIMITY_RADIUS_KM` of the college, nearest first.
///
/// Distances are rounded to hundredths before the cutoff is applied, so a
/// hostel reported at exactly 2.00 km is kept. Equal distances keep their
/// input order.
pub fn filter_by_college(college: &College, hostels: &[Hostel]) -> Vec<NearbyHostel> {
    let mut nearby: Vec<NearbyHostel> = hostels
        .iter()
        .map(|hostel| NearbyHostel {
            distance_km: college.coordinates.distance_km(&hostel.coordinates),
            hostel: hostel.clone(),
        })
        .filter(|n| n.distance_km <= PROXIMITY_RADIUS_KM)
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::{Coordinates, EARTH_RADIUS_KM};
    use crate::repository::seed::{Seed, FIXTURES};

    fn college_at(lat: f64, lng: f64) -> College {
        College {
            id: "test".to_string(),
            name: "Test College".to_string(),
            location: "Equator".to_string(),
            coordinates: Coordinates { lat, lng },
        }
    }

    fn hostel_at(template: &Hostel, name: &str, lat: f64, lng: f64) -> Hostel {
        Hostel {
            id: uuid::Uuid::new_v4(),
            name: name.to_string(),
            coordinates: Coordinates { lat, lng },
            ..template.clone()
        }
    }

    /// Latitude that lies `km` due north of the equator along the prime meridian.
    fn lat_for_km(km: f64) -> f64 {
        (km / EARTH_RADIUS_KM).to_degrees()
    }

    #[test]
    fn test_snist_keeps_only_nearby_hostels() {
        let seed = Seed::parse(FIXTURES).unwrap();
        let snist = seed.colleges.iter().find(|c| c.id == "snist").unwrap();

        let nearby = filter_by_college(snist, &seed.hostels);
        let found: Vec<(&str, f64)> = nearby
            .iter()
            .map(|n| (n.hostel.name.as_str(), n.distance_km))
            .collect();

        assert_eq!(
            found,
            vec![
                ("Sri Venkateswara Boys Hostel", 0.15),
                ("Comfort Girls PG", 0.85),
                ("Budget Stay PG", 1.57),
            ]
        );
    }

    #[test]
    fn test_far_college_has_no_nearby_hostels() {
        let seed = Seed::parse(FIXTURES).unwrap();

        for id in ["jntu", "vnr"] {
            let college = seed.colleges.iter().find(|c| c.id == id).unwrap();
            assert!(filter_by_college(college, &seed.hostels).is_empty(), "{id}");
        }
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let seed = Seed::parse(FIXTURES).unwrap();
        let template = &seed.hostels[0];
        let college = college_at(0.0, 0.0);
        let hostels = vec![
            hostel_at(template, "at 2.00", lat_for_km(2.0), 0.0),
            hostel_at(template, "at 2.01", lat_for_km(2.01), 0.0),
        ];

        let nearby = filter_by_college(&college, &hostels);

        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].hostel.name, "at 2.00");
        assert_eq!(nearby[0].distance_km, 2.0);
    }

    #[test]
    fn test_equal_distances_keep_input_order() {
        let seed = Seed::parse(FIXTURES).unwrap();
        let template = &seed.hostels[0];
        let college = college_at(0.0, 0.0);
        let hostels = vec![
            hostel_at(template, "far", lat_for_km(1.5), 0.0),
            hostel_at(template, "north", lat_for_km(1.0), 0.0),
            hostel_at(template, "south", -lat_for_km(1.0), 0.0),
            hostel_at(template, "near", lat_for_km(0.5), 0.0),
        ];

        let nearby = filter_by_college(&college, &hostels);
        let names: Vec<&str> = nearby.iter().map(|n| n.hostel.name.as_str()).collect();

        assert_eq!(names, vec!["near", "north", "south", "far"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_college(&college_at(17.5, 78.6), &[]).is_empty());
    }
}
