//! Distance-size estimator: decides whether a (sub-)tesseroid is far
//! enough from an observation point for direct quadrature.

use crate::model::Bounds;
use crate::point::ObservationPoint;

/// The tesseroid's three linear dimensions in metres: `(Lr, Lphi, Llambda)`.
pub fn dimensions(bounds: &Bounds) -> (f64, f64, f64) {
    let r_center = (bounds.bottom + bounds.top) / 2.0;
    let lat_center = (bounds.s + bounds.n) / 2.0;

    let l_r = bounds.top - bounds.bottom;
    let l_phi = r_center * (bounds.n - bounds.s);
    let l_lambda = r_center * lat_center.cos() * (bounds.e - bounds.w);

    (l_r, l_phi, l_lambda)
}

/// The largest of the three linear dimensions.
pub fn largest_dimension(bounds: &Bounds) -> f64 {
    let (l_r, l_phi, l_lambda) = dimensions(bounds);
    l_r.max(l_phi).max(l_lambda)
}

/// Geocentric distance between the observation point and the tesseroid's
/// center, via the spherical law of cosines.
/// Clamped to `>= 0` to guard against floating-point round-off pushing
/// the squared distance slightly negative for coincident points.
pub fn distance_to_center(bounds: &Bounds, point: &ObservationPoint) -> f64 {
    let lon_center = (bounds.w + bounds.e) / 2.0;
    let lat_center = (bounds.s + bounds.n) / 2.0;
    let r_center = (bounds.bottom + bounds.top) / 2.0;

    let (sin_lat_c, cos_lat_c) = lat_center.sin_cos();
    let cos_delta_lon = (lon_center - point.lon).cos();

    let cos_angle =
        point.sin_lat * sin_lat_c + point.cos_lat * cos_lat_c * cos_delta_lon;

    let d2 = point.radius * point.radius + r_center * r_center
        - 2.0 * point.radius * r_center * cos_angle;

    d2.max(0.0).sqrt()
}

/// True if `bounds` may be integrated directly (without further
/// subdivision) for `point` at the given distance-size `ratio`.
pub fn accept(bounds: &Bounds, point: &ObservationPoint, ratio: f64) -> bool {
    let d = distance_to_center(bounds, point);
    let l = largest_dimension(bounds);
    d > ratio * l
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MEAN_EARTH_RADIUS;

    fn small_tesseroid() -> Bounds {
        Bounds {
            w: -0.5f64.to_radians(),
            e: 0.5f64.to_radians(),
            s: -0.5f64.to_radians(),
            n: 0.5f64.to_radians(),
            bottom: MEAN_EARTH_RADIUS - 10_000.0,
            top: MEAN_EARTH_RADIUS,
        }
    }

    #[test]
    fn far_point_is_accepted() {
        let bounds = small_tesseroid();
        let point = ObservationPoint::from_radians(0.0, 0.0, MEAN_EARTH_RADIUS + 250_000.0);
        assert!(accept(&bounds, &point, 1.0));
    }

    #[test]
    fn close_point_is_rejected_for_large_ratio() {
        let bounds = small_tesseroid();
        let point = ObservationPoint::from_radians(0.0, 0.0, MEAN_EARTH_RADIUS + 1.0);
        assert!(!accept(&bounds, &point, 8.0));
    }

    #[test]
    fn splitting_reduces_largest_dimension() {
        let bounds = small_tesseroid();
        let l_before = largest_dimension(&bounds);
        let mid_lon = (bounds.w + bounds.e) / 2.0;
        let half = Bounds {
            e: mid_lon,
            ..bounds
        };
        let l_after = largest_dimension(&half);
        assert!(l_after <= l_before);
    }

    #[test]
    fn distance_is_never_negative() {
        let bounds = small_tesseroid();
        let point = ObservationPoint::from_radians(0.0, 0.0, MEAN_EARTH_RADIUS - 5_000.0);
        assert!(distance_to_center(&bounds, &point) >= 0.0);
    }
}
