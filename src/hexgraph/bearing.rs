use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::Cell;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compass {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl Compass {
    pub fn label(self) -> &'static str {
        match self {
            Compass::East => "east",
            Compass::Northeast => "northeast",
            Compass::North => "north",
            Compass::Northwest => "northwest",
            Compass::West => "west",
            Compass::Southwest => "southwest",
            Compass::South => "south",
            Compass::Southeast => "southeast",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Angle of `(dx, dy)` in degrees, counter-clockwise from east, in (-180, 180].
pub fn angle_degrees(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}

/// Map an angle in degrees to a 45° compass sector.
///
/// Sector edges sit at odd multiples of 22.5°. The east sector includes both
/// of its edges, the remaining northern sectors include their upper edge and
/// the southern sectors their lower edge. Anything that fails every test
/// (including NaN) lands in southeast.
pub fn compass_for_angle(angle: f64) -> Compass {
    if angle.abs() <= 22.5 {
        Compass::East
    } else if angle > 22.5 && angle <= 67.5 {
        Compass::Northeast
    } else if angle > 67.5 && angle <= 112.5 {
        Compass::North
    } else if angle > 112.5 && angle <= 157.5 {
        Compass::Northwest
    } else if angle.abs() > 157.5 {
        Compass::West
    } else if angle < -112.5 && angle >= -157.5 {
        Compass::Southwest
    } else if angle < -67.5 && angle >= -112.5 {
        Compass::South
    } else {
        Compass::Southeast
    }
}

pub fn classify_bearing(dx: f64, dy: f64) -> Compass {
    compass_for_angle(angle_degrees(dx, dy))
}

/// Direction of `to`'s center as seen from `from`'s center.
pub fn bearing_between(from: &Cell, to: &Cell) -> Compass {
    classify_bearing(to.x - from.x, to.y - from.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_directions() {
        assert_eq!(classify_bearing(1.0, 0.0), Compass::East);
        assert_eq!(classify_bearing(0.0, 1.0), Compass::North);
        assert_eq!(classify_bearing(-1.0, 0.0), Compass::West);
        assert_eq!(classify_bearing(0.0, -1.0), Compass::South);
    }

    #[test]
    fn intercardinal_directions() {
        assert_eq!(classify_bearing(1.0, 1.0), Compass::Northeast);
        assert_eq!(classify_bearing(-1.0, 1.0), Compass::Northwest);
        assert_eq!(classify_bearing(-1.0, -1.0), Compass::Southwest);
        assert_eq!(classify_bearing(1.0, -1.0), Compass::Southeast);
    }

    #[test]
    fn sector_edges() {
        assert_eq!(compass_for_angle(22.5), Compass::East);
        assert_eq!(compass_for_angle(-22.5), Compass::East);
        assert_eq!(compass_for_angle(67.5), Compass::Northeast);
        assert_eq!(compass_for_angle(112.5), Compass::North);
        assert_eq!(compass_for_angle(157.5), Compass::Northwest);
        assert_eq!(compass_for_angle(-157.5), Compass::Southwest);
        assert_eq!(compass_for_angle(-112.5), Compass::South);
        assert_eq!(compass_for_angle(-67.5), Compass::Southeast);
        assert_eq!(compass_for_angle(180.0), Compass::West);
        assert_eq!(compass_for_angle(-180.0), Compass::West);
    }

    #[test]
    fn just_past_east_edge_is_northeast() {
        assert_eq!(compass_for_angle(22.5000001), Compass::Northeast);
        assert_eq!(compass_for_angle(-22.5000001), Compass::Southeast);
    }

    #[test]
    fn degenerate_inputs_still_classify() {
        assert_eq!(classify_bearing(0.0, 0.0), Compass::East);
        assert_eq!(classify_bearing(f64::NAN, 1.0), Compass::Southeast);
    }

    #[test]
    fn bearing_between_cells_uses_centers() {
        let a = Cell::new("A", 0.0, 0.0, Vec::new());
        let b = Cell::new("B", -3.0, 0.2, Vec::new());
        assert_eq!(bearing_between(&a, &b), Compass::West);
        assert_eq!(bearing_between(&b, &a), Compass::East);
    }

    #[test]
    fn labels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Compass::Northwest).unwrap(), "\"northwest\"");
        assert_eq!(Compass::Southeast.to_string(), "southeast");
    }
}
