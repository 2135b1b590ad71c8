pub mod engine;
pub mod forces;
pub mod integrator;
pub mod orbit;
pub mod params;
pub mod scenario;
pub mod states;
