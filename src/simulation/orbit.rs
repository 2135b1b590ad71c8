//! Initial conditions from orbital elements
//!
//! Converts an [`OrbitConfig`] record (semi-major axis, eccentricity, mass,
//! display attributes) into a runtime [`Body`] placed at perihelion with the
//! matching tangential velocity.

use crate::configuration::config::OrbitConfig;
use crate::simulation::states::{Body, NVec2};

use std::collections::VecDeque;

/// Build a body at perihelion of the ellipse described by `cfg`.
///
/// The body is placed on the +x axis at r = a(1 - e) with a purely
/// tangential velocity v = sqrt(G * M * (1 + e) / (a * (1 - e))) along +y,
/// where M is the central mass. A record with `a == 0` is the central body
/// itself and sits at the origin at rest.
///
/// Preconditions: a >= 0, 0 <= e < 1, mass > 0, central_mass > 0.
/// Hyperbolic or degenerate elements (e >= 1) are a caller contract
/// violation and produce meaningless state; [`ScenarioConfig::validate`]
/// rejects them at the load boundary.
///
/// [`ScenarioConfig::validate`]: crate::configuration::config::ScenarioConfig::validate
pub fn body_at_perihelion(cfg: &OrbitConfig, g: f64, central_mass: f64) -> Body {
    let (x, v) = if cfg.a == 0.0 {
        (NVec2::zeros(), NVec2::zeros())
    } else {
        let r = cfg.a * (1.0 - cfg.e);
        let speed = (g * central_mass * (1.0 + cfg.e) / r).sqrt();
        (NVec2::new(r, 0.0), NVec2::new(0.0, speed))
    };

    Body {
        x,
        v,
        m: cfg.m,
        radius: cfg.radius,
        color: cfg.color,
        name: cfg.name.clone(),
        trail: VecDeque::new(),
    }
}
