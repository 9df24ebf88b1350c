use super::models::Cell;

/// Number of decimal places two vertex coordinates must agree on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Precision(pub u32);

impl Default for Precision {
    fn default() -> Self {
        Self(3)
    }
}

impl Precision {
    // past this, scaled coordinates stop being exact integers in f64
    pub const MAX: u32 = 15;

    pub fn scale(self) -> f64 {
        10f64.powi(self.0.min(Self::MAX) as i32)
    }
}

/// Canonical fixed-point vertex position: both components scaled by
/// 10^precision and rounded to the nearest integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VertexKey(pub i64, pub i64);

impl VertexKey {
    /// Returns `None` for non-finite or out-of-range coordinates; such a
    /// vertex can never match anything.
    pub fn from_point(x: f64, y: f64, precision: Precision) -> Option<Self> {
        let s = precision.scale();
        Some(Self(quantize(x, s)?, quantize(y, s)?))
    }
}

fn quantize(v: f64, scale: f64) -> Option<i64> {
    let q = (v * scale).round();
    if !q.is_finite() || q.abs() >= i64::MAX as f64 { return None; }
    Some(q as i64)
}

/// Keys of every absolute vertex of `cell`, in boundary order. Unusable
/// vertices are dropped.
pub fn cell_keys(cell: &Cell, precision: Precision) -> Vec<VertexKey> {
    cell.absolute_vertices()
        .filter_map(|(x, y)| VertexKey::from_point(x, y, precision))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexgraph::models::Vertex;

    #[test]
    fn float_drift_below_precision_collapses() {
        let p = Precision::default();
        let a = VertexKey::from_point(0.1 + 0.2, 1.0, p);
        let b = VertexKey::from_point(0.3, 1.0000001, p);
        assert_eq!(a, b);
        assert_eq!(a, Some(VertexKey(300, 1000)));
    }

    #[test]
    fn precision_is_configurable() {
        let coarse = Precision(1);
        let fine = Precision(4);
        assert_eq!(
            VertexKey::from_point(1.23, 0.0, coarse),
            VertexKey::from_point(1.21, 0.0, coarse)
        );
        assert_ne!(
            VertexKey::from_point(1.23, 0.0, fine),
            VertexKey::from_point(1.21, 0.0, fine)
        );
    }

    #[test]
    fn non_finite_vertices_are_dropped() {
        let c = Cell::new(
            "A",
            0.0,
            0.0,
            vec![Vertex { x: f64::NAN, y: 0.0 }, Vertex { x: 1.0, y: f64::INFINITY }, Vertex { x: 1.0, y: 1.0 }],
        );
        assert_eq!(cell_keys(&c, Precision::default()), vec![VertexKey(1000, 1000)]);
    }

    #[test]
    fn negative_coordinates_round_symmetrically() {
        let p = Precision(0);
        assert_eq!(VertexKey::from_point(-1.6, -0.4, p), Some(VertexKey(-2, 0)));
    }
}
