pub mod configuration;
pub mod simulation;
pub mod view;
pub mod visualization;

pub use simulation::engine::step_frame;
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::orbit::body_at_perihelion;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, NVec2, System, TrailPoint};

pub use configuration::config::{OrbitConfig, ParametersConfig, ScenarioConfig};

pub use view::camera::{InputEvent, PanDirection, ViewState};
pub use view::projector::{world_to_screen, CameraOffset};

pub use visualization::viewer::{run_viewer, viewport_center, AU, HEIGHT, WIDTH};
