//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec2` for position and velocity, plus display
//!   attributes (radius, color, name) and the bounded screen-space trail
//! - `System` holding the ordered body list and the current time `t`
//!
//! Body 0 of a `System` is the central reference body ("Sun"); the order
//! of the list is fixed at creation and never changes.

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// One screen-space trail sample, in whole pixels.
pub type TrailPoint = (i32, i32);

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg), always > 0
    pub radius: f64, // display radius (px), not physical
    pub color: [u8; 3], // display color
    pub name: String,
    pub trail: VecDeque<TrailPoint>, // screen-space history, oldest first
}

impl Body {
    /// Append a projected screen point, evicting the oldest sample once
    /// `capacity` is exceeded.
    pub fn push_trail_point(&mut self, point: TrailPoint, capacity: usize) {
        self.trail.push_back(point);
        while self.trail.len() > capacity {
            self.trail.pop_front();
        }
    }

    /// Drop the whole trail. Used when the camera or zoom changes, since
    /// every recorded point is in the old coordinate frame.
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // index 0 is the central body
    pub t: f64, // time (s)
}
