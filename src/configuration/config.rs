//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! planetary scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters, physical constants, and
//!   viewport settings
//! - [`OrbitConfig`]      – orbital elements and display attributes for one body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 6.6743e-11           # gravitational constant
//!   dt: 3600.0              # fixed time step (1 hour)
//!   min_separation: 1.0e3   # pairs closer than this contribute no force
//!   trail_capacity: 200     # screen points kept per body
//!   scale_out: 2.5e-11      # zoomed-out px per meter
//!   scale_in: 1.0e-10       # zoomed-in px per meter
//!   pan_step: 50.0          # camera offset per arrow key press (px)
//!   central_mass: 1.989e30  # mass shared by all orbit calculations
//!
//! bodies:
//!   - { a: 0.0,      e: 0.0,    m: 1.989e30, radius: 8.0, color: [255, 255, 0], name: "Sun" }
//!   - { a: 1.496e11, e: 0.0167, m: 5.972e24, radius: 4.0, color: [0, 100, 255], name: "Earth" }
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; the body with `a: 0` must come first, since body 0 is the
//! central reference for the distance display.

use anyhow::{bail, Result};
use serde::Deserialize;

/// Global numerical, physical, and viewport parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,              // gravitational constant
    pub dt: f64,             // fixed time step (s)
    pub min_separation: f64, // near-singularity force floor (m)
    pub trail_capacity: usize, // max trail points per body
    pub scale_out: f64,      // zoomed-out scale (px per m)
    pub scale_in: f64,       // zoomed-in scale (px per m)
    pub pan_step: f64,       // keyboard pan step (px)
    pub central_mass: f64,   // central body mass (kg)
}

/// Orbital elements and display attributes for a single body
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub a: f64,          // semi-major axis (m), 0 marks the central body
    pub e: f64,          // eccentricity, 0 <= e < 1
    pub m: f64,          // mass (kg)
    pub radius: f64,     // display radius (px)
    pub color: [u8; 3],  // display color
    pub name: String,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<OrbitConfig>, // orbital records, central body first
}

impl ScenarioConfig {
    /// Reject non-physical configurations before any runtime state is built.
    ///
    /// The simulation core assumes these preconditions and never re-checks
    /// them, so the load boundary is the one place violations surface.
    pub fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            bail!("scenario has no bodies");
        }
        if self.bodies[0].a != 0.0 {
            bail!("body 0 must be the central body (a = 0), got a = {}", self.bodies[0].a);
        }
        if self.parameters.central_mass <= 0.0 {
            bail!("central mass must be positive, got {}", self.parameters.central_mass);
        }
        if self.parameters.dt <= 0.0 {
            bail!("time step must be positive, got {}", self.parameters.dt);
        }
        for body in &self.bodies {
            if body.m <= 0.0 {
                bail!("body {:?} has non-positive mass {}", body.name, body.m);
            }
            if body.a < 0.0 {
                bail!("body {:?} has negative semi-major axis {}", body.name, body.a);
            }
            if !(0.0..1.0).contains(&body.e) {
                bail!("body {:?} has non-elliptical eccentricity {}", body.name, body.e);
            }
        }
        Ok(())
    }

    /// Built-in ten-body solar system, used when no YAML file is given.
    pub fn solar_system() -> Self {
        let parameters = ParametersConfig {
            g: 6.6743e-11,
            dt: 3600.0,
            min_separation: 1.0e3,
            trail_capacity: 200,
            scale_out: 2.5e-11,
            scale_in: 1.0e-10,
            pan_step: 50.0,
            central_mass: 1.989e30,
        };

        let records: [(f64, f64, f64, f64, [u8; 3], &str); 10] = [
            (0.0, 0.0, 1.989e30, 8.0, [255, 255, 0], "Sun"),
            (5.791e10, 0.2056, 3.301e23, 2.0, [169, 169, 169], "Mercury"),
            (1.082e11, 0.0067, 4.867e24, 3.0, [255, 165, 0], "Venus"),
            (1.496e11, 0.0167, 5.972e24, 4.0, [0, 100, 255], "Earth"),
            (2.279e11, 0.0934, 6.39e23, 3.0, [255, 100, 0], "Mars"),
            (7.785e11, 0.0489, 1.898e27, 6.0, [200, 150, 100], "Jupiter"),
            (1.429e12, 0.0565, 5.683e26, 5.0, [250, 200, 100], "Saturn"),
            (2.871e12, 0.0463, 8.681e25, 4.0, [100, 200, 255], "Uranus"),
            (4.498e12, 0.0086, 1.024e26, 4.0, [0, 0, 255], "Neptune"),
            (5.906e12, 0.2488, 1.309e22, 2.0, [150, 100, 50], "Pluto"),
        ];

        let bodies = records
            .into_iter()
            .map(|(a, e, m, radius, color, name)| OrbitConfig {
                a,
                e,
                m,
                radius,
                color,
                name: name.to_string(),
            })
            .collect();

        Self { parameters, bodies }
    }
}
