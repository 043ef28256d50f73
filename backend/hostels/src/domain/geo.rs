use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        let coordinates = Self { lat, lng };
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Checks the range of records that were deserialized rather than built
    /// through `new`. NaN fails both comparisons and is rejected too.
    pub fn validate(&self) -> Result<(), GeoError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(GeoError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }

    /// Great-circle distance in kilometers, rounded to two decimal places.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        round_to_hundredths(EARTH_RADIUS_KM * c)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNIST: Coordinates = Coordinates { lat: 17.5449, lng: 78.6898 };
    const JNTU: Coordinates = Coordinates { lat: 17.4926, lng: 78.3914 };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(SNIST.distance_km(&SNIST), 0.0);
        assert_eq!(JNTU.distance_km(&JNTU), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (SNIST, JNTU),
            (Coordinates { lat: 17.5439, lng: 78.6888 }, SNIST),
            (Coordinates { lat: -33.8688, lng: 151.2093 }, Coordinates { lat: 51.5074, lng: -0.1278 }),
        ];

        for (a, b) in pairs {
            assert_eq!(a.distance_km(&b), b.distance_km(&a));
        }
    }

    #[test]
    fn test_distance_near_campus_gate() {
        let hostel = Coordinates { lat: 17.5439, lng: 78.6888 };
        assert_eq!(SNIST.distance_km(&hostel), 0.15);
    }

    #[test]
    fn test_distance_across_city() {
        let distance = SNIST.distance_km(&JNTU);
        assert!(distance > 30.0 && distance < 35.0, "got {distance}");
    }

    #[test]
    fn test_distance_is_rounded_to_two_decimals() {
        let distance = SNIST.distance_km(&JNTU);
        assert_eq!((distance * 100.0).round() / 100.0, distance);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Coordinates::new(91.0, 0.0), Err(GeoError::LatitudeOutOfRange(91.0)));
        assert_eq!(Coordinates::new(0.0, -180.5), Err(GeoError::LongitudeOutOfRange(-180.5)));
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
    }
}
