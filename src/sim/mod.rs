//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one time unit)
//! - Parameters passed in per tick, never stored
//! - Stable edge iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod hexagon;
pub mod state;
pub mod tick;

pub use collision::{
    ContactResponse, EdgeContact, ball_edge_contact, closest_point_on_segment, resolve_contact,
};
pub use hexagon::{Hexagon, Vertices, edges, hexagon_vertices, rigid_rotation_velocity};
pub use state::{Ball, Frame, SimState};
pub use tick::{
    ContactEvent, FixedStepper, TickReport, apply_forces, integrate, resolve_collisions, tick,
};
