use itertools::Itertools;
use nalgebra::Vector2;

/// 2D polyline, in the local (East, North) frame [m]
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    vertices: Vec<Vector2<f64>>,
}

/// Closest point of segment [a, b] to p, with the projection parameter clamped to [0, 1].
/// Returns (parameter, point).
fn segment_projection(a: &Vector2<f64>, b: &Vector2<f64>, p: &Vector2<f64>) -> (f64, Vector2<f64>) {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (0.0, *a);
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (t, a + ab * t)
}

impl Polyline {
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }
    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Total length [m]
    pub fn length(&self) -> f64 {
        self.vertices
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b - a).norm())
            .sum()
    }
    /// Locates the closest point to p.
    /// Returns (arc length at that point, point). First segment wins on ties.
    fn locate(&self, p: &Vector2<f64>) -> Option<(f64, Vector2<f64>)> {
        if self.vertices.len() == 1 {
            return Some((0.0, self.vertices[0]));
        }
        let mut offset = 0.0;
        let mut nearest: Option<(f64, f64, Vector2<f64>)> = None;

        for (a, b) in self.vertices.iter().tuple_windows() {
            let (t, q) = segment_projection(a, b, p);
            let seg_len = (b - a).norm();
            let dist = (p - q).norm();
            let better = match nearest {
                Some((best, _, _)) => dist.total_cmp(&best).is_lt(),
                None => true,
            };
            if better {
                nearest = Some((dist, offset + t * seg_len, q));
            }
            offset += seg_len;
        }
        nearest.map(|(_, s, q)| (s, q))
    }
    /// Returns closest point of the polyline to p
    pub fn nearest(&self, p: &Vector2<f64>) -> Option<Vector2<f64>> {
        self.locate(p).map(|(_, q)| q)
    }
    /// Returns distance [m] from p to the polyline
    pub fn distance(&self, p: &Vector2<f64>) -> Option<f64> {
        self.nearest(p).map(|q| (p - q).norm())
    }
    /// Projects p onto the polyline, returning the arc length [m]
    /// from the first vertex, to the closest point.
    pub fn project(&self, p: &Vector2<f64>) -> Option<f64> {
        self.locate(p).map(|(s, _)| s)
    }
    /// Returns the point at given arc length [m], clamped to the polyline extent.
    pub fn interpolate(&self, s: f64) -> Option<Vector2<f64>> {
        let first = self.vertices.first()?;
        if s <= 0.0 {
            return Some(*first);
        }
        let mut offset = 0.0;
        for (a, b) in self.vertices.iter().tuple_windows() {
            let seg_len = (b - a).norm();
            if seg_len > 0.0 && s <= offset + seg_len {
                return Some(a + (b - a) * ((s - offset) / seg_len));
            }
            offset += seg_len;
        }
        self.vertices.last().copied()
    }
}
