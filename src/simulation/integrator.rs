//! Fixed-step time integration for the N-body system
//!
//! Provides the semi-implicit (symplectic) Euler step used by the planetary
//! scenario, driven by an `AccelSet` and `Parameters`

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step using semi-implicit Euler.
///
/// All accelerations are evaluated first from the pre-step positions of
/// every body, then each body applies
///
///   v_n+1 = v_n + a_n * dt
///   x_n+1 = x_n + v_n+1 * dt
///
/// The velocity-then-position order is what makes the scheme symplectic:
/// long-run energy stays bounded instead of drifting as it does under
/// explicit Euler. The single snapshot force evaluation also keeps the
/// result independent of body iteration order.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt;

    // a_n from x_n at time t_n, for every body, before any update
    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    // Kick then drift, per body, using the already-updated velocity
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    // Advance time by one full step
    sys.t += dt;
}
