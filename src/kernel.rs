//! Kernel library: pure integrand functions for the ten gravitational
//! fields.

use std::fmt;
use std::str::FromStr;

use crate::error::TesseroidError;
use crate::point::ObservationPoint;
use crate::scale::ScaledNode;

/// One of the ten fields this engine can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    V,
    Gx,
    Gy,
    Gz,
    Gxx,
    Gxy,
    Gxz,
    Gyy,
    Gyz,
    Gzz,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::V,
        Field::Gx,
        Field::Gy,
        Field::Gz,
        Field::Gxx,
        Field::Gxy,
        Field::Gxz,
        Field::Gyy,
        Field::Gyz,
        Field::Gzz,
    ];

    /// Default distance-size ratio for this field:
    /// potential uses 1.0, attraction components use 1.6, gradient tensor
    /// components use 8.0 -- the gradient decays faster and tolerates
    /// less geometric aliasing.
    pub fn default_ratio(self) -> f64 {
        match self {
            Field::V => 1.0,
            Field::Gx | Field::Gy | Field::Gz => 1.6,
            Field::Gxx | Field::Gxy | Field::Gxz | Field::Gyy | Field::Gyz | Field::Gzz => 8.0,
        }
    }

    /// SI-to-output-unit scaling factor applied once to the whole result
    /// buffer by the orchestrator.
    pub fn unit_factor(self) -> f64 {
        use crate::constants::{SI_TO_EOTVOS, SI_TO_MGAL};
        match self {
            Field::V => 1.0,
            Field::Gx | Field::Gy | Field::Gz => SI_TO_MGAL,
            Field::Gxx | Field::Gxy | Field::Gxz | Field::Gyy | Field::Gyz | Field::Gzz => {
                SI_TO_EOTVOS
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::V => "potential",
            Field::Gx => "gx",
            Field::Gy => "gy",
            Field::Gz => "gz",
            Field::Gxx => "gxx",
            Field::Gxy => "gxy",
            Field::Gxz => "gxz",
            Field::Gyy => "gyy",
            Field::Gyz => "gyz",
            Field::Gzz => "gzz",
        };
        f.write_str(s)
    }
}

impl FromStr for Field {
    type Err = TesseroidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "potential" | "v" => Ok(Field::V),
            "gx" => Ok(Field::Gx),
            "gy" => Ok(Field::Gy),
            "gz" => Ok(Field::Gz),
            "gxx" => Ok(Field::Gxx),
            "gxy" => Ok(Field::Gxy),
            "gxz" => Ok(Field::Gxz),
            "gyy" => Ok(Field::Gyy),
            "gyz" => Ok(Field::Gyz),
            "gzz" => Ok(Field::Gzz),
            other => Err(TesseroidError::UnknownField(other.to_string())),
        }
    }
}

/// Quantities shared by every field's integrand, computed once per
/// (point, node) pair.
struct SharedGeometry {
    delta_x: f64,
    delta_y: f64,
    delta_z: f64,
    ell2: f64,
    kappa: f64,
}

fn shared_geometry(point: &ObservationPoint, node: &ScaledNode) -> SharedGeometry {
    let dlon = node.lon - point.lon;
    let (sin_dlon, cos_dlon) = dlon.sin_cos();

    let cos_psi =
        point.sin_lat * node.sin_lat + point.cos_lat * node.cos_lat * cos_dlon;
    let k_phi = point.cos_lat * node.sin_lat - point.sin_lat * node.cos_lat * cos_dlon;

    let delta_x = node.radius * k_phi;
    let delta_y = node.radius * node.cos_lat * sin_dlon;
    let delta_z = node.radius * cos_psi - point.radius;

    let ell2 = node.radius * node.radius + point.radius * point.radius
        - 2.0 * node.radius * point.radius * cos_psi;

    let kappa = node.radius * node.radius * node.cos_lat;

    SharedGeometry {
        delta_x,
        delta_y,
        delta_z,
        ell2,
        kappa,
    }
}

/// Evaluate the integrand for `field` at one quadrature node, in SI units
/// before the outer `G` multiplication.
///
/// Returns 0.0 when `ell2` is not strictly positive -- the observation
/// point coincides with the node. The adaptive driver is responsible for
/// guaranteeing this never happens for an accepted quadrature.
pub fn integrand(field: Field, point: &ObservationPoint, node: &ScaledNode) -> f64 {
    let g = shared_geometry(point, node);

    if g.ell2 <= 0.0 {
        return 0.0;
    }

    let ell = g.ell2.sqrt();
    let ell3 = ell * g.ell2;
    let ell5 = ell3 * g.ell2;

    match field {
        Field::V => g.kappa / ell,
        Field::Gx => g.kappa * g.delta_x / ell3,
        Field::Gy => g.kappa * g.delta_y / ell3,
        // z-down convention: positive density yields positive gz.
        Field::Gz => -(g.kappa * g.delta_z / ell3),
        Field::Gxx => g.kappa * (3.0 * g.delta_x * g.delta_x / ell5 - 1.0 / ell3),
        Field::Gyy => g.kappa * (3.0 * g.delta_y * g.delta_y / ell5 - 1.0 / ell3),
        Field::Gzz => g.kappa * (3.0 * g.delta_z * g.delta_z / ell5 - 1.0 / ell3),
        Field::Gxy => g.kappa * 3.0 * g.delta_x * g.delta_y / ell5,
        Field::Gxz => g.kappa * 3.0 * g.delta_x * g.delta_z / ell5,
        Field::Gyz => g.kappa * 3.0 * g.delta_y * g.delta_z / ell5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_point_and_node() -> (ObservationPoint, ScaledNode) {
        let point = ObservationPoint::from_radians(0.0, 0.0, 10_000_000.0);
        let node = ScaledNode {
            lon: 0.001,
            sin_lat: 0.0,
            cos_lat: 1.0,
            radius: 6_370_000.0,
        };
        (point, node)
    }

    #[test]
    fn field_roundtrips_through_display_and_fromstr() {
        for field in Field::ALL {
            let parsed: Field = field.to_string().parse().unwrap();
            assert_eq!(field, parsed);
        }
    }

    #[test]
    fn unknown_field_name_errors() {
        let err = "bogus".parse::<Field>();
        assert!(matches!(err, Err(TesseroidError::UnknownField(_))));
    }

    #[test]
    fn coincident_node_returns_zero() {
        let point = ObservationPoint::from_radians(0.0, 0.0, 6_378_137.0);
        let node = ScaledNode {
            lon: 0.0,
            sin_lat: 0.0,
            cos_lat: 1.0,
            radius: 6_378_137.0,
        };
        for field in Field::ALL {
            assert_eq!(integrand(field, &point, &node), 0.0);
        }
    }

    #[test]
    fn potential_is_positive_for_node_below_point() {
        let (point, node) = far_point_and_node();
        assert!(integrand(Field::V, &point, &node) > 0.0);
    }

    #[test]
    fn gz_is_positive_for_mass_below_point() {
        // Node directly below the point: positive density should pull
        // "down" in the z-down convention, i.e. positive gz.
        let (point, node) = far_point_and_node();
        assert!(integrand(Field::Gz, &point, &node) > 0.0);
    }

    #[test]
    fn gradient_tensor_is_symmetric_in_construction() {
        let (point, node) = far_point_and_node();
        // gxy and gyx would be the same formula; we only expose the
        // six independent components, confirm gxz/gyz share delta_z.
        let gxz = integrand(Field::Gxz, &point, &node);
        let gyz = integrand(Field::Gyz, &point, &node);
        assert!(gxz.is_finite() && gyz.is_finite());
    }
}
