//! Minimum enclosing circle (Welzl) and circle sampling.
//!
//! Purpose
//! - Compute the smallest circle enclosing a polygon's vertices. The result is
//!   the bounding proxy used by the frustum test and by occlusion.
//!
//! Model
//! - `welzl(P, R)` recurses over a working set `P` and a support set `R`
//!   (points forced onto the boundary, `|R| <= 3`).
//! - `P` is a slice view into one shuffled buffer: the recursive call sees the
//!   prefix `P[..i]`, so recursion never copies or mutates the caller's
//!   vertices. Peeling points off `P` is a loop, and the call stack only grows
//!   with `|R|`.
//! - `R` is a by-value array of at most three points (`SupportSet`).
//! - Shuffling first gives expected linear time. The generator is a parameter
//!   (`bounding_circle_with_rng`); `bounding_circle` seeds from the thread RNG.
//!
//! Degenerate inputs
//! - Three exactly collinear support points make the circumcenter determinant
//!   zero and the result non-finite. Callers check `Circle::is_finite` at the
//!   rendering boundary.
//! - A point identical to a support point is enclosed by construction and
//!   never re-enters the support set.
//!
//! Code cross-refs: `geom2::{inside_of, Circle}`, `visibility::compute_visibility_with`

use rand::seq::SliceRandom;
use rand::Rng;

use crate::geom2::{distance, inside_of, Circle, Polygon, Vertex};

/// Up to three points constrained to lie on the circle boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SupportSet {
    pts: [Vertex; 3],
    len: usize,
}

impl SupportSet {
    #[inline]
    pub fn empty() -> Self {
        Self {
            pts: [Vertex::zeros(); 3],
            len: 0,
        }
    }

    /// None when more than three points are given.
    pub fn from_slice(points: &[Vertex]) -> Option<Self> {
        if points.len() > 3 {
            return None;
        }
        let mut out = Self::empty();
        out.pts[..points.len()].copy_from_slice(points);
        out.len = points.len();
        Some(out)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.pts[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == 3
    }

    #[inline]
    fn contains(&self, p: Vertex) -> bool {
        self.as_slice().contains(&p)
    }

    /// Copy with `p` appended. Pre: not full.
    #[inline]
    fn with(mut self, p: Vertex) -> Self {
        debug_assert!(!self.is_full(), "support set holds at most three points");
        self.pts[self.len] = p;
        self.len += 1;
        self
    }
}

/// Smallest circle enclosing `points ∪ support` with `support` on its boundary.
///
/// Points are added front to back; a point outside the running circle is
/// pushed onto the support set and the prefix before it is solved again.
/// Recursion only happens on support growth, so depth stays at most three
/// whatever the number of points.
pub fn welzl(points: &[Vertex], support: SupportSet) -> Circle {
    let mut d = circle_from_support(&support);
    if support.is_full() {
        return d;
    }
    for (i, &p) in points.iter().enumerate() {
        if support.contains(p) || inside_of(p, &d) {
            continue;
        }
        d = welzl(&points[..i], support.with(p));
    }
    d
}

/// Circle determined by 0..=3 boundary points.
fn circle_from_support(support: &SupportSet) -> Circle {
    match *support.as_slice() {
        [] => Circle::null(),
        [a] => Circle::new(a, 0.0),
        [a, b] => {
            let c = (a + b) * 0.5;
            Circle::new(c, distance(a, c))
        }
        [a, b, c] => circumcircle(a, b, c),
        _ => unreachable!("support set holds at most three points"),
    }
}

/// Circle through three points via the determinant circumcenter formula.
///
/// Pre: non-collinear. Collinear input divides by zero (non-finite result).
pub fn circumcircle(a: Vertex, b: Vertex, c: Vertex) -> Circle {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let a2 = a.norm_squared();
    let b2 = b.norm_squared();
    let c2 = c.norm_squared();
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Vertex::new(ux, uy);
    Circle::new(center, distance(a, center))
}

/// Shuffle a private copy of `points` with `rng`, then run `welzl` with no support.
pub fn enclosing_circle_with_rng<R: Rng + ?Sized>(points: &[Vertex], rng: &mut R) -> Circle {
    let mut buf = points.to_vec();
    buf.shuffle(rng);
    welzl(&buf, SupportSet::empty())
}

/// Minimum enclosing circle of the polygon's vertices, using the given generator.
#[inline]
pub fn bounding_circle_with_rng<R: Rng + ?Sized>(poly: &Polygon, rng: &mut R) -> Circle {
    enclosing_circle_with_rng(&poly.vertices, rng)
}

/// Minimum enclosing circle of the polygon's vertices (non-deterministic shuffle).
///
/// Total: `[]` gives the null circle, `[p]` gives `(p, 0)`.
pub fn bounding_circle(poly: &Polygon) -> Circle {
    bounding_circle_with_rng(poly, &mut rand::thread_rng())
}

/// Regular `n`-gon on the circle: vertex `i` at angle `2π·i/n`. Empty for `n < 3`.
pub fn polygonize(circle: &Circle, n: usize) -> Polygon {
    if n < 3 {
        return Polygon::default();
    }
    let vertices = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64) / (n as f64);
            circle.center + Vertex::new(angle.cos(), angle.sin()) * circle.radius
        })
        .collect();
    Polygon::new(vertices)
}
