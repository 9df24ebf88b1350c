use serde::{Deserialize, Serialize};

/// Cell identifiers are the map's string keys (e.g. area codes).
pub type CellId = String;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// One hexagonal map region. Vertex offsets are relative to the center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub key: CellId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

impl Cell {
    pub fn new(key: impl Into<CellId>, x: f64, y: f64, vertices: Vec<Vertex>) -> Self {
        Self { key: key.into(), x, y, vertices }
    }

    /// Absolute vertex positions (center + offset), in boundary order.
    pub fn absolute_vertices(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.vertices.iter().map(move |v| (self.x + v.x, self.y + v.y))
    }
}

/// Regular pointy-top hexagon offsets for a cell of circumradius `r`.
pub fn hex_vertices(r: f64) -> Vec<Vertex> {
    (0..6)
        .map(|i| {
            let a = (60.0 * i as f64 + 30.0).to_radians();
            Vertex { x: r * a.cos(), y: r * a.sin() }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_json_without_vertices_defaults_to_empty() {
        let c: Cell = serde_json::from_str(r#"{"key":"E1","x":1.5,"y":-2,"name":"ignored"}"#).unwrap();
        assert_eq!(c.key, "E1");
        assert!(c.vertices.is_empty());
    }

    #[test]
    fn absolute_vertices_add_center() {
        let c = Cell::new("A", 10.0, 20.0, vec![Vertex { x: 1.0, y: -1.0 }]);
        let v: Vec<_> = c.absolute_vertices().collect();
        assert_eq!(v, vec![(11.0, 19.0)]);
    }

    #[test]
    fn hex_vertices_has_six_points_on_radius() {
        let vs = hex_vertices(2.0);
        assert_eq!(vs.len(), 6);
        for v in vs {
            assert!(((v.x * v.x + v.y * v.y).sqrt() - 2.0).abs() < 1e-9);
        }
    }
}
