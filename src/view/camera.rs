//! Camera / view state machine
//!
//! Owns the zoom flag, the screen-space camera offset, and the panning
//! state, and raises the one-shot signals (trail reset, scenario reset,
//! quit) that the frame driver drains once per frame.
//!
//! Input arrives as normalized [`InputEvent`]s sampled by the front end at
//! frame start; applying them never touches simulation state directly.

use bevy::prelude::Resource;

use crate::simulation::params::Parameters;
use crate::view::projector::CameraOffset;

/// Direction of a discrete keyboard pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// One normalized input event.
///
/// Pointer events carry logical window coordinates; pointer-down is tagged
/// with whether it landed on the reset control so the state machine never
/// needs to know the control's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    ToggleZoom,
    Pan(PanDirection),
    PointerDown { x: f64, y: f64, primary: bool, over_reset: bool },
    PointerUp { primary: bool },
    PointerMoved { x: f64, y: f64 },
}

/// Camera offset, zoom mode, panning state, and one-shot frame signals.
///
/// `pan_anchor` is `Some` exactly while a primary-button drag is active;
/// the anchor is the last pointer position consumed by the drag.
#[derive(Debug, Clone, Resource)]
pub struct ViewState {
    pub zoomed: bool,
    pub camera: CameraOffset,
    pan_anchor: Option<(f64, f64)>,
    trail_reset: bool,
    reset_requested: bool,
    quit_requested: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            zoomed: false,
            camera: (0.0, 0.0),
            pan_anchor: None,
            trail_reset: false,
            reset_requested: false,
            quit_requested: false,
        }
    }

    /// The active scale constant, selected by the zoom flag.
    pub fn scale(&self, params: &Parameters) -> f64 {
        if self.zoomed {
            params.scale_in
        } else {
            params.scale_out
        }
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Apply one event. Camera or zoom mutations raise the trail-reset
    /// signal; repeated mutations within a frame coalesce into one.
    pub fn apply(&mut self, event: &InputEvent, params: &Parameters) {
        match *event {
            InputEvent::Quit => {
                self.quit_requested = true;
            }
            InputEvent::ToggleZoom => {
                self.zoomed = !self.zoomed;
                self.trail_reset = true;
            }
            InputEvent::Pan(direction) => {
                let step = params.pan_step;
                match direction {
                    PanDirection::Left => self.camera.0 -= step,
                    PanDirection::Right => self.camera.0 += step,
                    PanDirection::Up => self.camera.1 -= step,
                    PanDirection::Down => self.camera.1 += step,
                }
                self.trail_reset = true;
            }
            InputEvent::PointerDown { x, y, primary, over_reset } => {
                if !primary {
                    return;
                }
                if over_reset {
                    self.reset_requested = true;
                } else {
                    self.pan_anchor = Some((x, y));
                }
            }
            InputEvent::PointerUp { primary } => {
                if primary {
                    self.pan_anchor = None;
                }
            }
            InputEvent::PointerMoved { x, y } => {
                if let Some((ax, ay)) = self.pan_anchor {
                    // Dragging moves the world with the pointer, so the
                    // offset grows by anchor minus current position
                    self.camera.0 += ax - x;
                    self.camera.1 += ay - y;
                    self.pan_anchor = Some((x, y));
                    self.trail_reset = true;
                }
            }
        }
    }

    /// Zero the camera and zoom after a scenario reset and invalidate the
    /// trails. Any in-progress drag is abandoned.
    pub fn reset_view(&mut self) {
        self.zoomed = false;
        self.camera = (0.0, 0.0);
        self.pan_anchor = None;
        self.trail_reset = true;
    }

    /// Drain the coalesced trail-reset signal. Called once per frame by the
    /// driver; returns true at most once per raising frame.
    pub fn take_trail_reset(&mut self) -> bool {
        std::mem::take(&mut self.trail_reset)
    }

    /// Drain the scenario-reset request raised by the reset control.
    pub fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    /// Drain the quit request.
    pub fn take_quit_request(&mut self) -> bool {
        std::mem::take(&mut self.quit_requested)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
