//! Maps canonical Gauss-Legendre nodes onto a tesseroid's bounds.

use crate::model::Bounds;
use crate::quadrature::{GaussLegendreTable, ORDER};

/// One scaled quadrature node, in the coordinates the kernel needs.
/// `sin_lat`/`cos_lat` are computed once here rather than recomputed per
/// field evaluation at this node.
#[derive(Debug, Clone, Copy)]
pub struct ScaledNode {
    pub lon: f64,
    pub sin_lat: f64,
    pub cos_lat: f64,
    pub radius: f64,
}

#[inline]
fn scale_axis(x: f64, midpoint: f64, half_span: f64) -> f64 {
    midpoint + x * half_span
}

/// Number of product nodes per tesseroid: `ORDER^3`.
pub const PRODUCT_NODES: usize = ORDER * ORDER * ORDER;

/// Scale the canonical table onto `bounds`, returning the eight product
/// nodes, their combined canonical weight, and the jacobian volume factor
/// `(de_lon * de_lat * de_radius) / 8`.
pub fn scaled_nodes(
    bounds: &Bounds,
    table: &GaussLegendreTable,
) -> ([ScaledNode; PRODUCT_NODES], [f64; PRODUCT_NODES], f64) {
    let lon_mid = (bounds.w + bounds.e) / 2.0;
    let lon_half = (bounds.e - bounds.w) / 2.0;
    let lat_mid = (bounds.s + bounds.n) / 2.0;
    let lat_half = (bounds.n - bounds.s) / 2.0;
    let r_mid = (bounds.bottom + bounds.top) / 2.0;
    let r_half = (bounds.top - bounds.bottom) / 2.0;

    let mut nodes = [ScaledNode {
        lon: 0.0,
        sin_lat: 0.0,
        cos_lat: 0.0,
        radius: 0.0,
    }; PRODUCT_NODES];
    let mut weights = [0.0f64; PRODUCT_NODES];

    let mut idx = 0;
    for i in 0..ORDER {
        let lon = scale_axis(table.nodes[i], lon_mid, lon_half);
        for j in 0..ORDER {
            let lat = scale_axis(table.nodes[j], lat_mid, lat_half);
            let (sin_lat, cos_lat) = lat.sin_cos();
            for k in 0..ORDER {
                let radius = scale_axis(table.nodes[k], r_mid, r_half);
                nodes[idx] = ScaledNode {
                    lon,
                    sin_lat,
                    cos_lat,
                    radius,
                };
                weights[idx] = table.weights[i] * table.weights[j] * table.weights[k];
                idx += 1;
            }
        }
    }

    let jacobian = ((bounds.e - bounds.w) * (bounds.n - bounds.s) * (bounds.top - bounds.bottom))
        / 8.0;

    (nodes, weights, jacobian)
}
