//! The adaptive Gauss-Legendre quadrature driver.
//!
//! This is the core of the engine: for one (observation point, tesseroid)
//! pair, maintain an explicit LIFO stack of sub-tesseroids, accept each
//! one for direct quadrature or split it into up to eight children, and
//! accumulate the density-free contribution until the stack drains.

use crate::constants::DEFAULT_STACK_SIZE;
use crate::error::TesseroidError;
use crate::estimator::accept;
use crate::kernel::{integrand, Field};
use crate::model::{Bounds, Tesseroid};
use crate::point::ObservationPoint;
use crate::quadrature::order2;
use crate::scale::scaled_nodes;

/// Split `bounds` along all three axes, producing up to eight children.
/// Every child has a strictly smaller linear dimension than its parent
/// along every refined axis, which is what guarantees the stack drains in
/// finite time.
fn split(bounds: &Bounds) -> [Bounds; 8] {
    let lon_mid = (bounds.w + bounds.e) / 2.0;
    let lat_mid = (bounds.s + bounds.n) / 2.0;
    let r_mid = (bounds.bottom + bounds.top) / 2.0;

    let mut children = [*bounds; 8];
    let mut idx = 0;
    for &(w, e) in &[(bounds.w, lon_mid), (lon_mid, bounds.e)] {
        for &(s, n) in &[(bounds.s, lat_mid), (lat_mid, bounds.n)] {
            for &(bottom, top) in &[(bounds.bottom, r_mid), (r_mid, bounds.top)] {
                children[idx] = Bounds {
                    w,
                    e,
                    s,
                    n,
                    bottom,
                    top,
                };
                idx += 1;
            }
        }
    }
    children
}

/// Accumulate the contribution of one root tesseroid to `field` at one
/// observation point.
///
/// Returns the density-free contribution; the caller multiplies by the
/// tesseroid's density exactly once.
pub fn accumulate(
    field: Field,
    root: &Tesseroid,
    point: &ObservationPoint,
    ratio: f64,
    stack_limit: usize,
    point_index: usize,
) -> Result<f64, TesseroidError> {
    if root
        .bounds
        .contains(point.lon, point.lat, point.radius)
    {
        return Err(TesseroidError::PointInsideTesseroid { point_index });
    }

    let table = order2();
    let mut stack: Vec<Bounds> = Vec::with_capacity(stack_limit.min(64));
    stack.push(root.bounds);

    let mut total = 0.0f64;

    while let Some(bounds) = stack.pop() {
        if accept(&bounds, point, ratio) {
            let (nodes, weights, jacobian) = scaled_nodes(&bounds, table);
            let mut sum = 0.0f64;
            for (node, weight) in nodes.iter().zip(weights.iter()) {
                sum += weight * integrand(field, point, node);
            }
            total += sum * jacobian;
        } else {
            let children = split(&bounds);
            if stack.len() + children.len() > stack_limit {
                return Err(TesseroidError::StackOverflow { point_index });
            }
            for child in children {
                stack.push(child);
            }
        }
    }

    Ok(total)
}

/// Convenience wrapper using the default stack capacity (`S_max = 500`).
pub fn accumulate_default_stack(
    field: Field,
    root: &Tesseroid,
    point: &ObservationPoint,
    ratio: f64,
    point_index: usize,
) -> Result<f64, TesseroidError> {
    accumulate(field, root, point, ratio, DEFAULT_STACK_SIZE, point_index)
}
