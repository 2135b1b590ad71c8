//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and fixed integration step,
//! - the near-singularity separation floor,
//! - trail capacity and the two viewport scale constants,
//! - keyboard pan step and the shared central mass

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // fixed time step (s)
    pub min_separation: f64, // pairs at or below this distance contribute no force (m)
    pub trail_capacity: usize, // max screen points kept per body
    pub scale_out: f64, // zoomed-out scale (px per m)
    pub scale_in: f64, // zoomed-in scale (px per m)
    pub pan_step: f64, // camera offset per key press (px)
    pub central_mass: f64, // mass of the central body, shared by all orbits (kg)
}
