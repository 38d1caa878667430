//! Pairwise elastic collisions between spheres
//!
//! The classic 1-D elastic result is computed on the full velocity vectors,
//! reduced to its magnitude, and reapplied strictly along the line of
//! centers `n`. Any velocity component perpendicular to `n` is dropped.
//! There is no de-penetration: spheres that still overlap after resolution
//! stay where they are.

use tracing::warn;

use super::error::SimError;
use super::states::{Sphere, System};

/// Test `a` against `b` and, if they touch or overlap, resolve their velocities.
///
/// Returns `Ok(true)` when a collision was processed, `Ok(false)` when the
/// spheres are apart, and `Err(ConcentricSpheres)` when the centers coincide
/// (the pair is left untouched).
pub fn resolve_collision(a: &mut Sphere, b: &mut Sphere) -> Result<bool, SimError> {
    let r = b.position() - a.position();
    let d = r.norm();

    if d > a.radius() + b.radius() {
        return Ok(false);
    }
    if d == 0.0 {
        return Err(SimError::ConcentricSpheres);
    }

    let n = r / d;
    let (m1, m2) = (a.mass(), b.mass());
    let (v1, v2) = (a.velocity(), b.velocity());
    let m_sum = m1 + m2;

    let speed_a = (((m1 - m2) * v1 + 2.0 * m2 * v2) / m_sum).norm();
    let speed_b = (((m2 - m1) * v2 + 2.0 * m1 * v1) / m_sum).norm();

    a.body.v = -n * speed_a;
    b.body.v = n * speed_b;

    Ok(true)
}

/// Outcome of one all-pairs pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairPass {
    pub collisions: u64,              // touching or overlapping pairs found this pass
    pub skipped: Vec<(usize, usize)>, // concentric pairs, counted but left alone
}

/// Visit every unordered pair `(i, j)` with `i < j` exactly once, in index order.
///
/// Every touching pair counts as a collision, including a concentric pair
/// whose velocities cannot be resolved.
pub fn resolve_all_pairs(sys: &mut System) -> PairPass {
    let mut pass = PairPass::default();
    let n = sys.len();

    for i in 0..n {
        // split so that sphere i and the tail after it can be borrowed mutably together
        let (head, tail) = sys.spheres.split_at_mut(i + 1);
        let si = &mut head[i];

        for (k, sj) in tail.iter_mut().enumerate() {
            let j = i + 1 + k;
            match resolve_collision(si, sj) {
                Ok(true) => pass.collisions += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(i, j, "skipping collision: {e}");
                    pass.collisions += 1;
                    pass.skipped.push((i, j));
                }
            }
        }
    }
    pass
}
