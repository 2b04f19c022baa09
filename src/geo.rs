//! Geographic coordinate helpers
//!
//! A plain latitude/longitude value type with great-circle distance,
//! approximate equality, and nearest/farthest selection over slices.

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// ~100 meters accuracy
const APPROX_DECIMAL_PLACES: i32 = 3;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle (haversine) distance in meters to `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use throttlekit::Coordinate;
    ///
    /// let equator = Coordinate::new(0.0, 0.0);
    /// let one_degree_east = Coordinate::new(0.0, 1.0);
    ///
    /// // One degree of longitude at the equator is roughly 111 km.
    /// let d = equator.distance_meters(one_degree_east);
    /// assert!((d - 111_195.0).abs() < 100.0);
    /// ```
    pub fn distance_meters(&self, other: Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
    }

    /// Approximate comparison of coordinates rounded to 3 decimal places
    /// (about 100 meters).
    pub fn approx_eq(&self, other: Coordinate) -> bool {
        round_places(self.latitude) == round_places(other.latitude)
            && round_places(self.longitude) == round_places(other.longitude)
    }
}

fn round_places(value: f64) -> f64 {
    let factor = 10f64.powi(APPROX_DECIMAL_PLACES);
    (value * factor).round() / factor
}

/// Nearest/farthest selection over coordinate slices.
pub trait CoordinateSliceExt {
    /// The coordinate closest to `target`, or `None` for an empty slice.
    fn closest_to(&self, target: Coordinate) -> Option<Coordinate>;

    /// The coordinate farthest from `target`, or `None` for an empty
    /// slice.
    fn farthest_from(&self, target: Coordinate) -> Option<Coordinate>;
}

impl CoordinateSliceExt for [Coordinate] {
    fn closest_to(&self, target: Coordinate) -> Option<Coordinate> {
        self.iter()
            .copied()
            .min_by(|a, b| a.distance_meters(target).total_cmp(&b.distance_meters(target)))
    }

    fn farthest_from(&self, target: Coordinate) -> Option<Coordinate> {
        self.iter()
            .copied()
            .max_by(|a, b| a.distance_meters(target).total_cmp(&b.distance_meters(target)))
    }
}
