//! Frame driver for the interactive simulation
//!
//! One call to [`step_frame`] executes a whole logical frame as an
//! uninterrupted unit: input has already been applied to the view state by
//! the caller, then
//!
//! 1. accelerations are accumulated for every body from the pre-frame
//!    position snapshot (no body sees a neighbor's updated position),
//! 2. every body advances by one semi-implicit Euler step,
//! 3. the new position is projected through the shared projector and
//!    appended to the trail, evicting the oldest point past capacity,
//! 4. a pending scenario reset or trail-reset signal is drained exactly
//!    once, clearing every body's trail.
//!
//! Rendering reads the resulting state afterwards; the driver itself does
//! no I/O, which keeps it callable from headless runs and tests.

use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::scenario::Scenario;
use crate::view::camera::ViewState;
use crate::view::projector::world_to_screen;

/// Advance the scenario by one frame and maintain the trails.
///
/// `center` is the viewport midpoint in logical pixels. The projection uses
/// the view's current scale and camera offset, the same arguments the
/// renderer uses for live positions, so trail points and drawn bodies stay
/// in one coordinate frame.
pub fn step_frame(scenario: &mut Scenario, view: &mut ViewState, center: (f64, f64)) {
    // A click on the reset control replaces the body set and recenters the
    // view before the step, so the frame advances the fresh state
    if view.take_reset_request() {
        scenario.reset();
        view.reset_view();
    }

    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = scenario;

    // Snapshot forces, then integrate (steps 1 and 2)
    semi_implicit_euler(system, forces, parameters);

    // Record the new screen position of every body (step 3)
    let scale = view.scale(parameters);
    let camera = view.camera;
    for body in &mut system.bodies {
        let point = world_to_screen(body.x, scale, camera, center);
        body.push_trail_point(point, parameters.trail_capacity);
    }

    // Camera, zoom, or reset changes this frame invalidated the recorded
    // frame of reference; one coalesced clear regardless of how many
    // transitions raised the signal (step 4)
    if view.take_trail_reset() {
        for body in &mut system.bodies {
            body.clear_trail();
        }
    }
}
