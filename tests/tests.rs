use planetsim::simulation::engine::step_frame;
use planetsim::simulation::forces::{AccelSet, NewtonianGravity};
use planetsim::simulation::integrator::semi_implicit_euler;
use planetsim::simulation::orbit::body_at_perihelion;
use planetsim::simulation::params::Parameters;
use planetsim::simulation::scenario::Scenario;
use planetsim::simulation::states::{Body, NVec2, System};
use planetsim::configuration::config::{OrbitConfig, ScenarioConfig};
use planetsim::view::camera::{InputEvent, PanDirection, ViewState};
use planetsim::view::projector::world_to_screen;

use std::collections::VecDeque;

/// Real solar-system parameters used throughout the tests
pub fn solar_params() -> Parameters {
    Parameters {
        g: 6.6743e-11,
        dt: 3600.0,
        min_separation: 1.0e3,
        trail_capacity: 200,
        scale_out: 2.5e-11,
        scale_in: 1.0e-10,
        pan_step: 50.0,
        central_mass: 1.989e30,
    }
}

/// Build a bare body at rest for force tests
pub fn test_body(x: f64, y: f64, m: f64) -> Body {
    Body {
        x: NVec2::new(x, y),
        v: NVec2::zeros(),
        m,
        radius: 2.0,
        color: [255, 255, 255],
        name: "Body".to_string(),
        trail: VecDeque::new(),
    }
}

/// Build a simple 2-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    System {
        bodies: vec![test_body(0.0, 0.0, m1), test_body(dist, 0.0, m2)],
        t: 0.0,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        g: p.g,
        min_separation: p.min_separation,
    })
}

/// Sun + Earth subset of the built-in solar system
pub fn sun_earth_config() -> ScenarioConfig {
    let full = ScenarioConfig::solar_system();
    ScenarioConfig {
        parameters: full.parameters.clone(),
        bodies: vec![full.bodies[0].clone(), full.bodies[3].clone()],
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0e10, 2.0e24, 3.0e24);
    let p = solar_params();
    let forces = gravity_set(&p);

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let f1 = acc[0] * sys.bodies[0].m;
    let f2 = acc[1] * sys.bodies[1].m;

    // Equal magnitude, opposite direction
    let net = f1 + f2;
    assert!(
        net.norm() < 1e-9 * f1.norm(),
        "Net force not zero: {:?}",
        net
    );
    assert!(f1.x > 0.0 && f2.x < 0.0, "Forces not attractive");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0e10, 1.0e24, 1.0e24);
    let sys_2r = two_body_system(2.0e10, 1.0e24, 1.0e24);
    let p = solar_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![NVec2::zeros(); 2];
    let mut acc_2r = vec![NVec2::zeros(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_floor_is_inclusive_at_1000_m() {
    let p = solar_params();
    let forces = gravity_set(&p);

    // Exactly at the floor: the pair contributes nothing
    let sys_at = two_body_system(1000.0, 1.0e24, 1.0e24);
    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys_at.t, &sys_at, &mut acc);
    assert_eq!(acc[0], NVec2::zeros());
    assert_eq!(acc[1], NVec2::zeros());

    // Just past the floor: a small but nonzero force
    let sys_past = two_body_system(1000.001, 1.0e24, 1.0e24);
    forces.accumulate_accels(sys_past.t, &sys_past, &mut acc);
    assert!(acc[0].norm() > 0.0);
    assert!(acc[1].norm() > 0.0);
}

// ==================================================================================
// Orbit initializer tests
// ==================================================================================

#[test]
fn perihelion_initial_conditions_for_earth() {
    let p = solar_params();
    let earth = OrbitConfig {
        a: 1.496e11,
        e: 0.0167,
        m: 5.972e24,
        radius: 4.0,
        color: [0, 100, 255],
        name: "Earth".to_string(),
    };

    let body = body_at_perihelion(&earth, p.g, p.central_mass);

    let r = earth.a * (1.0 - earth.e);
    let v = (p.g * p.central_mass * (1.0 + earth.e) / r).sqrt();

    assert!((body.x.x - r).abs() < 1.0, "got x = {}", body.x.x);
    assert_eq!(body.x.y, 0.0);
    assert_eq!(body.v.x, 0.0);
    assert!((body.v.y - v).abs() < 1e-6, "got vy = {}", body.v.y);

    // Concrete magnitudes: r ~ 1.4711e11 m, v ~ 3e4 m/s
    assert!((body.x.x - 1.4711e11).abs() / 1.4711e11 < 1e-3);
    assert!((body.v.y - 2.978e4).abs() / 2.978e4 < 0.05);
}

#[test]
fn central_body_starts_at_origin_at_rest() {
    let p = solar_params();
    let sun = OrbitConfig {
        a: 0.0,
        e: 0.0,
        m: 1.989e30,
        radius: 8.0,
        color: [255, 255, 0],
        name: "Sun".to_string(),
    };

    let body = body_at_perihelion(&sun, p.g, p.central_mass);

    assert_eq!(body.x, NVec2::zeros());
    assert_eq!(body.v, NVec2::zeros());
    assert!(body.trail.is_empty());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn semi_implicit_euler_updates_velocity_before_position() {
    // One step against a single attractor: the position update must use the
    // already-kicked velocity, x1 = x0 + (v0 + a*dt) * dt
    let p = solar_params();
    let forces = gravity_set(&p);
    let mut sys = two_body_system(1.0e11, 1.989e30, 5.972e24);

    let mut acc = vec![NVec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);
    let expected_v = sys.bodies[1].v + p.dt * acc[1];
    let expected_x = sys.bodies[1].x + p.dt * expected_v;

    semi_implicit_euler(&mut sys, &forces, &p);

    assert_eq!(sys.bodies[1].v, expected_v);
    assert_eq!(sys.bodies[1].x, expected_x);
    assert_eq!(sys.t, p.dt);
}

#[test]
fn earth_orbit_stays_bounded_over_one_period() {
    let mut scenario = Scenario::build_scenario(sun_earth_config());
    let a = scenario.orbits[1].a;
    let start = scenario.system.bodies[1].x;

    // Kepler period for the semi-major axis, in whole hourly steps
    let period = std::f64::consts::TAU
        * (a.powi(3) / (scenario.parameters.g * scenario.parameters.central_mass)).sqrt();
    let steps = (period / scenario.parameters.dt).round() as u64;

    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut scenario;

    for _ in 0..steps {
        semi_implicit_euler(system, forces, parameters);

        let r = (system.bodies[1].x - system.bodies[0].x).norm();
        assert!(
            (0.9 * a..1.1 * a).contains(&r),
            "orbit left the bounded band: r = {:.4e} at t = {:.0}",
            r,
            system.t
        );
    }

    // Back near the starting point after one full revolution
    let drift = (system.bodies[1].x - start).norm();
    assert!(
        drift < 0.05 * a,
        "did not return to perihelion: drift = {:.4e} m",
        drift
    );
}

// ==================================================================================
// Projector tests
// ==================================================================================

#[test]
fn projector_is_pure() {
    let pos = NVec2::new(7.3e11, -2.1e11);
    let first = world_to_screen(pos, 2.5e-11, (12.0, -3.0), (450.0, 300.0));
    let second = world_to_screen(pos, 2.5e-11, (12.0, -3.0), (450.0, 300.0));
    assert_eq!(first, second);
}

#[test]
fn projector_concrete_value() {
    // 1 AU at the zoomed-out scale is 3.74 px right of center
    let screen = world_to_screen(NVec2::new(1.496e11, 0.0), 2.5e-11, (0.0, 0.0), (450.0, 300.0));
    assert_eq!(screen, (454, 300));

    // Camera offset shifts the result the opposite way
    let panned = world_to_screen(NVec2::new(1.496e11, 0.0), 2.5e-11, (50.0, -20.0), (450.0, 300.0));
    assert_eq!(panned, (404, 320));
}

// ==================================================================================
// View state machine tests
// ==================================================================================

#[test]
fn pointer_drag_accumulates_camera_offset() {
    let p = solar_params();
    let mut view = ViewState::new();

    view.apply(
        &InputEvent::PointerDown { x: 100.0, y: 100.0, primary: true, over_reset: false },
        &p,
    );
    assert!(view.is_panning());

    // Drag down-right: the offset moves by anchor - current
    view.apply(&InputEvent::PointerMoved { x: 90.0, y: 120.0 }, &p);
    assert_eq!(view.camera, (10.0, -20.0));

    view.apply(&InputEvent::PointerMoved { x: 80.0, y: 120.0 }, &p);
    assert_eq!(view.camera, (20.0, -20.0));
    assert!(view.take_trail_reset());

    view.apply(&InputEvent::PointerUp { primary: true }, &p);
    assert!(!view.is_panning());

    // Motion without a held button changes nothing
    view.apply(&InputEvent::PointerMoved { x: 0.0, y: 0.0 }, &p);
    assert_eq!(view.camera, (20.0, -20.0));
    assert!(!view.take_trail_reset());
}

#[test]
fn key_pan_and_zoom_toggle() {
    let p = solar_params();
    let mut view = ViewState::new();

    assert_eq!(view.scale(&p), p.scale_out);

    view.apply(&InputEvent::Pan(PanDirection::Left), &p);
    view.apply(&InputEvent::Pan(PanDirection::Up), &p);
    assert_eq!(view.camera, (-p.pan_step, -p.pan_step));

    view.apply(&InputEvent::ToggleZoom, &p);
    assert!(view.zoomed);
    assert_eq!(view.scale(&p), p.scale_in);

    // Several mutations in one frame coalesce into a single reset signal
    assert!(view.take_trail_reset());
    assert!(!view.take_trail_reset());
}

#[test]
fn pointer_down_on_reset_control_requests_reset_not_pan() {
    let p = solar_params();
    let mut view = ViewState::new();

    view.apply(
        &InputEvent::PointerDown { x: 20.0, y: 20.0, primary: true, over_reset: true },
        &p,
    );
    assert!(!view.is_panning());
    assert!(view.take_reset_request());
    assert!(!view.take_reset_request());
}

#[test]
fn secondary_button_never_pans() {
    let p = solar_params();
    let mut view = ViewState::new();

    view.apply(
        &InputEvent::PointerDown { x: 5.0, y: 5.0, primary: false, over_reset: false },
        &p,
    );
    assert!(!view.is_panning());
}

// ==================================================================================
// Frame driver tests
// ==================================================================================

const CENTER: (f64, f64) = (450.0, 300.0);

#[test]
fn trail_length_tracks_frames_up_to_capacity() {
    let mut scenario = Scenario::build_scenario(sun_earth_config());
    let mut view = ViewState::new();
    let capacity = scenario.parameters.trail_capacity;

    for frame in 1..=capacity + 50 {
        step_frame(&mut scenario, &mut view, CENTER);
        for body in &scenario.system.bodies {
            assert_eq!(body.trail.len(), frame.min(capacity));
        }
    }
}

#[test]
fn camera_change_clears_trails_once() {
    let mut scenario = Scenario::build_scenario(sun_earth_config());
    let mut view = ViewState::new();

    for _ in 0..10 {
        step_frame(&mut scenario, &mut view, CENTER);
    }

    // Three pans in one frame: still just one coalesced clear
    view.apply(&InputEvent::Pan(PanDirection::Left), &scenario.parameters);
    view.apply(&InputEvent::Pan(PanDirection::Left), &scenario.parameters);
    view.apply(&InputEvent::Pan(PanDirection::Down), &scenario.parameters);

    step_frame(&mut scenario, &mut view, CENTER);
    for body in &scenario.system.bodies {
        assert!(body.trail.is_empty());
    }

    // The next frame records into the new frame of reference
    step_frame(&mut scenario, &mut view, CENTER);
    for body in &scenario.system.bodies {
        assert_eq!(body.trail.len(), 1);
    }
}

#[test]
fn reset_restores_initial_conditions_and_is_idempotent() {
    let mut scenario = Scenario::build_scenario(ScenarioConfig::solar_system());
    let initial: Vec<NVec2> = scenario.system.bodies.iter().map(|b| b.x).collect();
    let mut view = ViewState::new();

    for _ in 0..100 {
        step_frame(&mut scenario, &mut view, CENTER);
    }
    view.apply(&InputEvent::ToggleZoom, &scenario.parameters);
    view.apply(&InputEvent::Pan(PanDirection::Right), &scenario.parameters);

    scenario.reset();
    view.reset_view();

    let after_once: Vec<NVec2> = scenario.system.bodies.iter().map(|b| b.x).collect();
    assert_eq!(after_once, initial);
    assert_eq!(view.camera, (0.0, 0.0));
    assert!(!view.zoomed);
    assert_eq!(scenario.system.t, 0.0);

    // A second reset changes nothing further
    scenario.reset();
    view.reset_view();
    let after_twice: Vec<NVec2> = scenario.system.bodies.iter().map(|b| b.x).collect();
    assert_eq!(after_twice, after_once);
}

#[test]
fn reset_click_replaces_bodies_within_the_frame() {
    let mut scenario = Scenario::build_scenario(sun_earth_config());
    let mut view = ViewState::new();
    let p = scenario.parameters.clone();

    for _ in 0..50 {
        step_frame(&mut scenario, &mut view, CENTER);
    }
    view.apply(&InputEvent::ToggleZoom, &p);

    view.apply(
        &InputEvent::PointerDown { x: 20.0, y: 20.0, primary: true, over_reset: true },
        &p,
    );
    step_frame(&mut scenario, &mut view, CENTER);

    // The frame advanced exactly one step past fresh initial conditions,
    // with the view recentered and the stale trails gone
    let mut fresh = Scenario::build_scenario(sun_earth_config());
    let mut fresh_view = ViewState::new();
    fresh_view.apply(
        &InputEvent::PointerDown { x: 20.0, y: 20.0, primary: true, over_reset: true },
        &p,
    );
    step_frame(&mut fresh, &mut fresh_view, CENTER);

    for (b, f) in scenario.system.bodies.iter().zip(fresh.system.bodies.iter()) {
        assert_eq!(b.x, f.x);
        assert_eq!(b.v, f.v);
    }
    assert_eq!(view.camera, (0.0, 0.0));
    assert!(!view.zoomed);
    for body in &scenario.system.bodies {
        assert!(body.trail.is_empty());
    }
}

#[test]
fn frame_is_order_independent_via_snapshot_forces() {
    // Accelerations must come from the pre-frame snapshot: reversing body
    // order yields mirrored, otherwise identical trajectories
    let cfg = sun_earth_config();
    let mut forward = Scenario::build_scenario(cfg.clone());
    let mut reversed_cfg = cfg;
    reversed_cfg.bodies.reverse();
    let mut reversed = Scenario::build_scenario(reversed_cfg);

    let mut view_a = ViewState::new();
    let mut view_b = ViewState::new();
    for _ in 0..500 {
        step_frame(&mut forward, &mut view_a, CENTER);
        step_frame(&mut reversed, &mut view_b, CENTER);
    }

    assert_eq!(forward.system.bodies[0].x, reversed.system.bodies[1].x);
    assert_eq!(forward.system.bodies[1].x, reversed.system.bodies[0].x);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn builtin_solar_system_is_valid() {
    let cfg = ScenarioConfig::solar_system();
    cfg.validate().expect("built-in scenario must validate");

    assert_eq!(cfg.bodies.len(), 10);
    assert_eq!(cfg.bodies[0].name, "Sun");
    assert_eq!(cfg.bodies[0].a, 0.0);
}

#[test]
fn validation_rejects_non_physical_records() {
    let mut cfg = ScenarioConfig::solar_system();
    cfg.bodies[3].e = 1.2;
    assert!(cfg.validate().is_err(), "hyperbolic eccentricity accepted");

    let mut cfg = ScenarioConfig::solar_system();
    cfg.bodies[5].m = -1.0;
    assert!(cfg.validate().is_err(), "negative mass accepted");

    let mut cfg = ScenarioConfig::solar_system();
    cfg.bodies.rotate_left(1); // central body no longer first
    assert!(cfg.validate().is_err(), "misplaced central body accepted");
}

#[test]
fn scenario_yaml_round_trip() {
    let yaml = r#"
parameters:
  g: 6.6743e-11
  dt: 3600.0
  min_separation: 1.0e3
  trail_capacity: 200
  scale_out: 2.5e-11
  scale_in: 1.0e-10
  pan_step: 50.0
  central_mass: 1.989e30
bodies:
  - { a: 0.0, e: 0.0, m: 1.989e30, radius: 8.0, color: [255, 255, 0], name: "Sun" }
  - { a: 1.496e11, e: 0.0167, m: 5.972e24, radius: 4.0, color: [0, 100, 255], name: "Earth" }
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("parse scenario yaml");
    cfg.validate().expect("parsed scenario must validate");

    let scenario = Scenario::build_scenario(cfg);
    assert_eq!(scenario.system.bodies.len(), 2);
    assert_eq!(scenario.system.bodies[1].name, "Earth");
    assert!(scenario.system.bodies[1].v.y > 0.0);
}
