//! Precomputed Gauss-Legendre quadrature tables.
//!
//! The engine never adapts the quadrature order; it adapts the domain
//! subdivision instead. Order 2 is the canonical
//! choice for this engine: eight product nodes per tesseroid.

/// Order of the Gauss-Legendre rule used on each of the three axes.
pub const ORDER: usize = 2;

/// Nodes and weights of a fixed-order Gauss-Legendre rule on `[-1, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct GaussLegendreTable {
    pub nodes: [f64; ORDER],
    pub weights: [f64; ORDER],
}

const ORDER2_NODE: f64 = 0.577_350_269_189_625_8; // 1 / sqrt(3)

/// The canonical order-2 table: nodes at +/- 1/sqrt(3), unit weights.
pub fn order2() -> &'static GaussLegendreTable {
    static TABLE: GaussLegendreTable = GaussLegendreTable {
        nodes: [-ORDER2_NODE, ORDER2_NODE],
        weights: [1.0, 1.0],
    };
    &TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order2_nodes_are_symmetric() {
        let t = order2();
        assert!((t.nodes[0] + t.nodes[1]).abs() < 1e-15);
    }

    #[test]
    fn order2_weights_sum_to_two() {
        let t = order2();
        let sum: f64 = t.weights.iter().sum();
        assert!((sum - 2.0).abs() < 1e-15);
    }
}
