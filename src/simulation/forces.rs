//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct Newtonian gravity term
//! used by the planetary scenario

use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Reads only the current positions and masses, so the caller can use
    /// `out` as a pre-step snapshot before any body is advanced.
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct Newtonian gravity with a hard separation floor
///
/// Pairs separated by `min_separation` or less contribute nothing. The floor
/// is a singularity guard, not a physical cutoff: it prevents division by
/// near-zero and impulsive forces at coincident positions. Planetary
/// separations sit many orders of magnitude above it.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_separation: f64, // skip distance (m)
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j. Indexing skips
        // the self-pair without relying on identity comparison.
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r, j along -r
                let r = bj.x - xi;
                let dist = r.norm();

                // At or below the floor the pair contributes nothing
                if dist <= self.min_separation {
                    continue;
                }

                // a_i = G * m_j * r / |r|^3   (f = G m_i m_j / r^2 decomposed
                // along r/|r|, then divided by the target's own mass)
                let inv_r3 = 1.0 / (dist * dist * dist);
                let coef = self.g * inv_r3;

                // Equal and opposite contributions
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
