//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at perihelion, t = 0)
//! - active force set (`AccelSet`)
//! - the orbital records, retained so `reset` can rebuild the body set
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! frame driver and visualization systems.

use bevy::prelude::Resource;

use crate::configuration::config::{OrbitConfig, ScenarioConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::orbit::body_at_perihelion;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// Bevy resource representing a fully-initialized planetary scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the parameters, current system state, the set of active
/// force laws, and the static orbital records used for reset.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub orbits: Vec<OrbitConfig>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            dt: p_cfg.dt,
            min_separation: p_cfg.min_separation,
            trail_capacity: p_cfg.trail_capacity,
            scale_out: p_cfg.scale_out,
            scale_in: p_cfg.scale_in,
            pan_step: p_cfg.pan_step,
            central_mass: p_cfg.central_mass,
        };

        // Bodies: every orbital record starts at perihelion, t = 0
        let system = System {
            bodies: initial_bodies(&cfg.bodies, &parameters),
            t: 0.0,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_separation: parameters.min_separation,
        });

        Self {
            parameters,
            system,
            forces,
            orbits: cfg.bodies,
        }
    }

    /// Replace the whole body set with fresh perihelion initial conditions.
    /// Running it again from the same records yields the identical state.
    pub fn reset(&mut self) {
        self.system = System {
            bodies: initial_bodies(&self.orbits, &self.parameters),
            t: 0.0,
        };
    }
}

fn initial_bodies(orbits: &[OrbitConfig], params: &Parameters) -> Vec<Body> {
    orbits
        .iter()
        .map(|oc| body_at_perihelion(oc, params.g, params.central_mass))
        .collect()
}
