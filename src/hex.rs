//! Hex board geometry: axial/cube coordinates, distance, rotation, line walks.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate, the form stored at rest in the public state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i8,
    pub r: i8,
}

impl AxialCoord {
    pub const ORIGIN: AxialCoord = AxialCoord { q: 0, r: 0 };

    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    pub const fn to_cube(self) -> CubeCoord {
        CubeCoord {
            q: self.q,
            r: self.r,
            s: -self.q - self.r,
        }
    }

    /// Stable hash/map key for this coordinate. Any hashable representation
    /// is acceptable internally; this one is exposed for hosts that want a
    /// canonical key without re-deriving it.
    pub fn to_key(self) -> HexKey {
        HexKey(self.q, self.r)
    }

    pub fn distance_to(self, other: AxialCoord) -> i32 {
        self.to_cube().distance_to(other.to_cube())
    }

    pub fn neighbor(self, dir: HexDirection) -> AxialCoord {
        self.to_cube().neighbor(dir).to_axial()
    }

    pub fn is_on_board(self, radius: i8) -> bool {
        self.distance_to(AxialCoord::ORIGIN) <= radius as i32
    }

    pub fn is_on_edge(self, radius: i8) -> bool {
        self.distance_to(AxialCoord::ORIGIN) == radius as i32
    }

    pub fn rotate(self, steps: i32) -> AxialCoord {
        self.to_cube().rotate(steps).to_axial()
    }

    /// Pointy-top pixel projection at the given hex size.
    pub fn to_pixel(self, size: f64) -> (f64, f64) {
        let q = self.q as f64;
        let r = self.r as f64;
        let x = size * 3f64.sqrt() * (q + r / 2.0);
        let y = size * 1.5 * r;
        (x, y)
    }

    /// Angle (radians) of this hex's pixel position from the origin, with
    /// unit hex size.
    pub fn to_angle(self) -> f64 {
        let (x, y) = self.to_pixel(1.0);
        y.atan2(x)
    }
}

/// Stable canonical key for use as a hash/map key outside the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexKey(pub i8, pub i8);

/// Cube coordinate; always satisfies `q + r + s == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeCoord {
    pub q: i8,
    pub r: i8,
    pub s: i8,
}

impl CubeCoord {
    pub const fn to_axial(self) -> AxialCoord {
        AxialCoord {
            q: self.q,
            r: self.r,
        }
    }

    pub fn distance_to(self, other: CubeCoord) -> i32 {
        let dq = (self.q as i32 - other.q as i32).abs();
        let dr = (self.r as i32 - other.r as i32).abs();
        let ds = (self.s as i32 - other.s as i32).abs();
        (dq + dr + ds) / 2
    }

    pub fn neighbor(self, dir: HexDirection) -> CubeCoord {
        let (dq, dr) = dir.axial_vector();
        let q = self.q + dq;
        let r = self.r + dr;
        CubeCoord {
            q,
            r,
            s: -q - r,
        }
    }

    /// Rotate by `steps` 60-degree turns about the origin. `steps` may be
    /// negative or exceed 6 in magnitude; only `steps mod 6` matters.
    pub fn rotate(self, steps: i32) -> CubeCoord {
        let mut normalized = steps % 6;
        if normalized < 0 {
            normalized += 6;
        }
        let mut cur = self;
        for _ in 0..normalized {
            cur = CubeCoord {
                q: -cur.r,
                r: -cur.s,
                s: -cur.q,
            };
        }
        cur
    }
}

/// The six hex directions, numbered in the order East, Northeast, Northwest,
/// West, Southwest, Southeast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexDirection {
    East = 0,
    Northeast = 1,
    Northwest = 2,
    West = 3,
    Southwest = 4,
    Southeast = 5,
}

pub const ALL_DIRECTIONS: [HexDirection; 6] = [
    HexDirection::East,
    HexDirection::Northeast,
    HexDirection::Northwest,
    HexDirection::West,
    HexDirection::Southwest,
    HexDirection::Southeast,
];

impl HexDirection {
    pub fn from_index(i: u8) -> HexDirection {
        ALL_DIRECTIONS[(i % 6) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn opposite(self) -> HexDirection {
        HexDirection::from_index(self.index() + 3)
    }

    pub fn axial_vector(self) -> (i8, i8) {
        match self {
            HexDirection::East => (1, 0),
            HexDirection::Northeast => (1, -1),
            HexDirection::Northwest => (0, -1),
            HexDirection::West => (-1, 0),
            HexDirection::Southwest => (-1, 1),
            HexDirection::Southeast => (0, 1),
        }
    }
}

/// Linear interpolation between two cube coordinates at parameter `t`.
fn cube_lerp(a: CubeCoord, b: CubeCoord, t: f64) -> (f64, f64, f64) {
    (
        a.q as f64 + (b.q as f64 - a.q as f64) * t,
        a.r as f64 + (b.r as f64 - a.r as f64) * t,
        a.s as f64 + (b.s as f64 - a.s as f64) * t,
    )
}

/// Round a fractional cube coordinate to the nearest valid cube hex,
/// re-deriving the coordinate with the largest rounding error so that
/// `q + r + s == 0` holds exactly.
fn cube_round(q: f64, r: f64, s: f64) -> CubeCoord {
    let mut rq = q.round();
    let mut rr = r.round();
    let mut rs = s.round();

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    } else {
        rs = -rq - rr;
    }

    CubeCoord {
        q: rq as i8,
        r: rr as i8,
        s: rs as i8,
    }
}

/// Ordered sequence of hexes from `a` to `b`, inclusive of both endpoints,
/// produced by linear interpolation of cube coordinates with a small
/// epsilon to break ties consistently along a straight line.
pub fn line_walk(a: AxialCoord, b: AxialCoord) -> Vec<AxialCoord> {
    let ac = a.to_cube();
    let bc = b.to_cube();
    let n = ac.distance_to(bc);
    if n == 0 {
        return vec![a];
    }

    // Epsilon nudges one endpoint off-grid so ties on hex edges round
    // consistently to one side rather than flip-flopping.
    const EPS: f64 = 1e-6;
    let aq = ac.q as f64 + EPS;
    let ar = ac.r as f64 + EPS;
    let as_ = ac.s as f64 - 2.0 * EPS;
    let a_nudged = (aq, ar, as_);

    let mut out = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let t = i as f64 / n as f64;
        let (lq, lr, ls) = (
            a_nudged.0 + (bc.q as f64 - ac.q as f64) * t,
            a_nudged.1 + (bc.r as f64 - ac.r as f64) * t,
            a_nudged.2 + (bc.s as f64 - ac.s as f64) * t,
        );
        out.push(cube_round(lq, lr, ls).to_axial());
    }
    out
}

/// If `a` and `b` lie on one of the six straight lines through a hex (they
/// share a coordinate on one of the three cube axes), return the direction
/// from `a` toward `b`. Otherwise `None`. `a == b` also yields `None`.
pub fn line_direction(a: AxialCoord, b: AxialCoord) -> Option<HexDirection> {
    if a == b {
        return None;
    }
    let ac = a.to_cube();
    let bc = b.to_cube();
    let dq = bc.q as i32 - ac.q as i32;
    let dr = bc.r as i32 - ac.r as i32;
    let ds = bc.s as i32 - ac.s as i32;

    // On a straight hex line, exactly one of the three cube axes is
    // unchanged; the sign of the other two (equal and opposite) picks the
    // direction.
    if dq == 0 && dr != 0 {
        return Some(if dr > 0 {
            HexDirection::Southeast
        } else {
            HexDirection::Northwest
        });
    }
    if dr == 0 && dq != 0 {
        return Some(if dq > 0 {
            HexDirection::East
        } else {
            HexDirection::West
        });
    }
    if ds == 0 && dq != 0 {
        return Some(if dq > 0 {
            HexDirection::Northeast
        } else {
            HexDirection::Southwest
        });
    }
    None
}

/// Direction from `a` to `b` if they are adjacent (`distance == 1`), else
/// `None`.
pub fn direction_between_adjacent(a: AxialCoord, b: AxialCoord) -> Option<HexDirection> {
    if a.distance_to(b) != 1 {
        return None;
    }
    line_direction(a, b)
}

/// All `3r^2 + 3r + 1` hexes of a board with the given radius, center
/// first, then rings of `6*d` hexes at increasing distance `d`.
pub fn generate_all_board_hexes(radius: i8) -> Vec<AxialCoord> {
    let mut out = vec![AxialCoord::ORIGIN];
    for d in 1..=radius {
        let start = AxialCoord::new(0, -d).to_cube();
        // Walk the ring: start at (0, -d) and step around through all six
        // edges of the ring, d hexes per edge.
        let mut hex = start;
        for side in 0..6u8 {
            let dir = HexDirection::from_index(side + 4); // ring-walk direction
            for _ in 0..d {
                out.push(hex.to_axial());
                hex = hex.neighbor(dir);
            }
        }
    }
    out
}
