//! Hexa Spin - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Deterministic fixed-step physics (boundary, ball, collisions, tick)
//! - `params`: Per-tick simulation parameters and arena geometry
//! - `renderer`: Vertex tessellation of the shapes the simulation exposes
//! - `error`: Validation and settings errors

pub mod error;
pub mod params;
pub mod renderer;
pub mod sim;

pub use error::{Result, SimError};
pub use params::{ArenaConfig, Settings, SimParams};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Canvas the default scene was laid out for
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 650.0;
    /// Hexagon sits slightly above the canvas middle
    pub const HEX_CENTER_X: f32 = CANVAS_WIDTH / 2.0;
    pub const HEX_CENTER_Y: f32 = CANVAS_HEIGHT / 2.0 - 50.0;

    /// Distance from hexagon center to each vertex
    pub const HEX_CIRCUMRADIUS: f32 = 200.0;
    /// Number of hexagon sides
    pub const HEX_SIDES: usize = 6;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_MASS: f32 = 1.0;

    /// Overlap is pushed out slightly past the contact surface
    pub const POSITION_CORRECTION: f32 = 1.01;
    /// Edges shorter than this (squared) are skipped
    pub const MIN_EDGE_LENGTH_SQ: f32 = 1.0e-5;

    /// Rate the scene was tuned for; one tick per frame
    pub const TICKS_PER_SECOND: f32 = 60.0;
    /// Maximum ticks per stepper update to prevent spiral of death
    pub const MAX_TICKS_PER_UPDATE: u32 = 8;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_to_cartesian_axes() {
        let p = polar_to_cartesian(2.0, 0.0);
        assert!((p.x - 2.0).abs() < 1e-6 && p.y.abs() < 1e-6);

        let p = polar_to_cartesian(3.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5 && (p.y - 3.0).abs() < 1e-5);
    }
}
