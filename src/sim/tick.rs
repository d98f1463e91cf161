//! Fixed timestep simulation tick
//!
//! One tick is one implicit time unit: every rate in `SimParams` is already
//! expressed per tick. Order: rotate hexagon, accumulate forces, integrate
//! (semi-implicit Euler), resolve contacts edge by edge.

use glam::Vec2;
use serde::Serialize;

use super::collision::{ball_edge_contact, resolve_contact, separation};
use super::hexagon::{Hexagon, edges};
use super::state::{Ball, SimState};
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::params::SimParams;

/// A resolved wall contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContactEvent {
    /// Edge index; edge `i` runs from vertex `i` to vertex `i + 1`
    pub edge: usize,
    pub point: Vec2,
    pub normal: Vec2,
    /// Velocity of the wall surface at the contact point
    pub wall_velocity: Vec2,
    /// Relative normal speed before (negative) and after the bounce
    pub normal_speed_before: f32,
    pub normal_speed_after: f32,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub contacts: Vec<ContactEvent>,
}

/// Gravity and linear air drag
pub fn apply_forces(ball: &mut Ball, params: &SimParams) {
    // F = m * g, so gravity's acceleration is independent of mass
    ball.apply_force(Vec2::new(0.0, params.gravity) * ball.mass());

    let speed = ball.speed();
    if speed > 0.0 {
        let direction = ball.vel / speed;
        ball.apply_force(-direction * (params.air_drag * speed));
    }
}

/// Semi-implicit Euler: velocity first, then position with the new velocity
pub fn integrate(ball: &mut Ball) {
    ball.vel += ball.acc;
    ball.pos += ball.vel;
    ball.acc = Vec2::ZERO;
}

/// Test and resolve each edge in order
///
/// Edges are handled independently; near a vertex two corrections can both
/// apply in the same tick.
pub fn resolve_collisions(ball: &mut Ball, hexagon: &Hexagon, params: &SimParams) -> Vec<ContactEvent> {
    let vertices = hexagon.vertices();
    let mut contacts = Vec::new();

    for (edge, (a, b)) in edges(&vertices).enumerate() {
        let Some(contact) = ball_edge_contact(ball.pos, ball.radius(), a, b) else {
            continue;
        };

        let wall_velocity = hexagon.surface_velocity(contact.point, params.angular_rate);
        let Some(response) = resolve_contact(
            ball.vel,
            wall_velocity,
            contact.normal,
            params.restitution,
            params.tangential_friction,
        ) else {
            continue;
        };

        ball.vel = response.velocity;
        ball.pos += separation(&contact, POSITION_CORRECTION);

        log::debug!(
            "edge {} contact at ({:.2}, {:.2}): vn {:.3} -> {:.3}",
            edge,
            contact.point.x,
            contact.point.y,
            response.normal_speed_before,
            response.normal_speed_after
        );

        contacts.push(ContactEvent {
            edge,
            point: contact.point,
            normal: contact.normal,
            wall_velocity,
            normal_speed_before: response.normal_speed_before,
            normal_speed_after: response.normal_speed_after,
        });
    }

    contacts
}

/// Advance the simulation by one tick
///
/// `params` must hold finite values (see `SimParams::validate`).
pub fn tick(state: &mut SimState, params: &SimParams) -> TickReport {
    debug_assert!(params.validate().is_ok(), "non-finite parameters: {params:?}");

    state.hexagon.advance(params.angular_rate);

    apply_forces(&mut state.ball, params);
    integrate(&mut state.ball);
    let contacts = resolve_collisions(&mut state.ball, &state.hexagon, params);

    state.time_ticks += 1;

    log::trace!(
        "tick {}: pos ({:.3}, {:.3}) vel ({:.3}, {:.3}) contacts {}",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y,
        contacts.len()
    );

    TickReport {
        tick: state.time_ticks,
        contacts,
    }
}

/// Turns elapsed wall-clock time into whole ticks
#[derive(Debug, Clone)]
pub struct FixedStepper {
    tick_seconds: f32,
    max_ticks: u32,
    accumulator: f32,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self {
            tick_seconds: 1.0 / TICKS_PER_SECOND,
            max_ticks: MAX_TICKS_PER_UPDATE,
            accumulator: 0.0,
        }
    }
}

impl FixedStepper {
    /// `ticks_per_second` must be positive and finite
    pub fn new(ticks_per_second: f32, max_ticks: u32) -> Result<Self> {
        if !(ticks_per_second.is_finite() && ticks_per_second > 0.0) {
            return Err(SimError::InvalidTickRate(ticks_per_second));
        }
        Ok(Self {
            tick_seconds: 1.0 / ticks_per_second,
            max_ticks: max_ticks.max(1),
            accumulator: 0.0,
        })
    }

    /// Seconds per tick
    pub fn tick_seconds(&self) -> f32 {
        self.tick_seconds
    }

    /// Run as many ticks as `elapsed` seconds cover, at most `budget`
    ///
    /// `on_tick` sees the state right after each tick; an error from it
    /// stops the update. Time beyond the per-call cap or the budget is
    /// dropped rather than carried, so a stalled host does not trigger a
    /// burst of catch-up ticks. Returns the number of ticks run.
    pub fn update<E>(
        &mut self,
        state: &mut SimState,
        params: &SimParams,
        elapsed: f32,
        budget: u64,
        mut on_tick: impl FnMut(&SimState, &TickReport) -> std::result::Result<(), E>,
    ) -> std::result::Result<u32, E> {
        self.accumulator += elapsed.max(0.0);

        let limit = u64::from(self.max_ticks).min(budget) as u32;
        let mut ran = 0;
        while self.accumulator >= self.tick_seconds && ran < limit {
            let report = tick(state, params);
            self.accumulator -= self.tick_seconds;
            ran += 1;
            on_tick(state, &report)?;
        }
        if self.accumulator >= self.tick_seconds {
            self.accumulator %= self.tick_seconds;
        }

        Ok(ran)
    }
}
