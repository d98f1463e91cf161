//! Simulation state
//!
//! Everything needed to continue a run deterministically lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hexagon::{Hexagon, Vertices};
use crate::error::{Result, SimError};
use crate::params::ArenaConfig;

/// The simulated ball
///
/// Deserialization runs the same checks as `Ball::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BallRecord")]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Acceleration gathered this tick, cleared by integration
    pub acc: Vec2,
    radius: f32,
    mass: f32,
}

impl Ball {
    /// A ball at rest
    pub fn new(pos: Vec2, radius: f32, mass: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        if !pos.is_finite() {
            return Err(SimError::NonFinitePosition { x: pos.x, y: pos.y });
        }
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius,
            mass,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Accumulate a force as acceleration (a = F / m)
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force / self.mass;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Unchecked serialized form of `Ball`
#[derive(Deserialize)]
struct BallRecord {
    pos: Vec2,
    vel: Vec2,
    acc: Vec2,
    radius: f32,
    mass: f32,
}

impl TryFrom<BallRecord> for Ball {
    type Error = SimError;

    fn try_from(record: BallRecord) -> Result<Self> {
        let mut ball = Ball::new(record.pos, record.radius, record.mass)?;
        for v in [record.vel, record.acc] {
            if !v.is_finite() {
                return Err(SimError::NonFiniteVelocity { x: v.x, y: v.y });
            }
        }
        ball.vel = record.vel;
        ball.acc = record.acc;
        Ok(ball)
    }
}

/// What an external renderer needs to draw one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub vertices: Vertices,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub ball: Ball,
    pub hexagon: Hexagon,
    /// Ticks completed so far
    pub time_ticks: u64,
}

impl SimState {
    /// Build the initial scene: ball at rest at its start point, hexagon unrotated
    pub fn new(arena: &ArenaConfig) -> Result<Self> {
        let ball = Ball::new(arena.ball_start, arena.ball_radius, arena.ball_mass)?;
        let hexagon = Hexagon::new(arena.hex_center, arena.hex_circumradius)?;
        log::info!(
            "New simulation: hexagon r={} at ({}, {}), ball r={} at ({}, {})",
            hexagon.circumradius(),
            hexagon.center().x,
            hexagon.center().y,
            ball.radius(),
            ball.pos.x,
            ball.pos.y
        );
        Ok(Self {
            ball,
            hexagon,
            time_ticks: 0,
        })
    }

    /// Snapshot of the drawable shapes
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.time_ticks,
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius(),
            vertices: self.hexagon.vertices(),
        }
    }
}
