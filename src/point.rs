//! Observation point coordinate conversion.

use crate::constants::MEAN_EARTH_RADIUS;

/// An observation point in the frame the kernels expect: longitude in
/// radians, cached sine/cosine of latitude, and geocentric radius.
///
/// `sin_lat`/`cos_lat` are computed once here rather than recomputed per
/// quadrature node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationPoint {
    pub lon: f64,
    pub lat: f64,
    pub sin_lat: f64,
    pub cos_lat: f64,
    pub radius: f64,
}

impl ObservationPoint {
    /// Build an observation point from degrees and height above the mean
    /// Earth radius: convert to radians, cache sin/cos of latitude, and
    /// add height to the mean radius to get the geocentric radius.
    pub fn from_degrees(lon_deg: f64, lat_deg: f64, height_m: f64) -> Self {
        let lon = lon_deg.to_radians();
        let lat = lat_deg.to_radians();
        Self {
            lon,
            lat,
            sin_lat: lat.sin(),
            cos_lat: lat.cos(),
            radius: MEAN_EARTH_RADIUS + height_m,
        }
    }

    /// Build directly from already-converted radians/metres values.
    pub fn from_radians(lon: f64, lat: f64, radius: f64) -> Self {
        Self {
            lon,
            lat,
            sin_lat: lat.sin(),
            cos_lat: lat.cos(),
            radius,
        }
    }
}

/// Convert parallel coordinate arrays into observation points.
pub fn convert_points(lon: &[f64], lat: &[f64], height: &[f64]) -> Vec<ObservationPoint> {
    lon.iter()
        .zip(lat.iter())
        .zip(height.iter())
        .map(|((&lo, &la), &h)| ObservationPoint::from_degrees(lo, la, h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_trig_of_latitude() {
        let p = ObservationPoint::from_degrees(10.0, 30.0, 0.0);
        assert!((p.sin_lat - 0.5).abs() < 1e-10);
        assert!((p.cos_lat - (3f64.sqrt() / 2.0)).abs() < 1e-10);
    }

    #[test]
    fn radius_is_earth_radius_plus_height() {
        let p = ObservationPoint::from_degrees(0.0, 0.0, 250_000.0);
        assert!((p.radius - (MEAN_EARTH_RADIUS + 250_000.0)).abs() < 1e-6);
    }

    #[test]
    fn convert_points_preserves_order() {
        let pts = convert_points(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 100.0]);
        assert_eq!(pts.len(), 2);
        assert!((pts[1].radius - (MEAN_EARTH_RADIUS + 100.0)).abs() < 1e-6);
    }
}
