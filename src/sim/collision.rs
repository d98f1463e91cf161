//! Collision detection and response against moving straight walls
//!
//! Detection finds the closest point on an edge segment to the ball center.
//! Response works in the wall's frame: the wall's own velocity at the
//! contact point is subtracted before applying restitution and friction,
//! then added back.

use glam::Vec2;

use crate::consts::MIN_EDGE_LENGTH_SQ;

/// A ball overlapping an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeContact {
    /// Closest point on the edge segment to the ball center
    pub point: Vec2,
    /// Unit normal from the contact point toward the ball center
    pub normal: Vec2,
    /// Distance from the contact point to the ball center
    pub distance: f32,
    /// How far the ball overlaps the edge (radius - distance)
    pub penetration: f32,
}

/// Closest point to `p` on segment `a`-`b`
///
/// Returns `None` for a degenerate (near zero length) segment.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<Vec2> {
    let edge = b - a;
    let len_sq = edge.length_squared();
    if len_sq < MIN_EDGE_LENGTH_SQ {
        return None;
    }
    let t = ((p - a).dot(edge) / len_sq).clamp(0.0, 1.0);
    Some(a + edge * t)
}

/// Check a ball against one edge segment
///
/// Returns `None` when there is no overlap, when the edge is degenerate, or
/// when the ball center sits exactly on the edge (normal undefined).
pub fn ball_edge_contact(center: Vec2, radius: f32, a: Vec2, b: Vec2) -> Option<EdgeContact> {
    let point = closest_point_on_segment(center, a, b)?;
    let offset = center - point;
    let distance = offset.length();
    if distance >= radius || distance <= 0.0 {
        return None;
    }
    Some(EdgeContact {
        point,
        normal: offset / distance,
        distance,
        penetration: radius - distance,
    })
}

/// Outcome of resolving one contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResponse {
    /// New absolute ball velocity
    pub velocity: Vec2,
    /// Relative normal speed before (negative = approaching)
    pub normal_speed_before: f32,
    /// Relative normal speed after
    pub normal_speed_after: f32,
    /// Relative tangential speed before and after friction
    pub tangent_speed_before: f32,
    pub tangent_speed_after: f32,
}

/// Friction impulse along the tangent for tangential speed `vt`
///
/// Opposes `vt` and never exceeds it, so friction can stop sliding but
/// cannot reverse it or add speed.
#[inline]
pub fn friction_impulse(vt: f32, friction: f32) -> f32 {
    let stop = -vt;
    (stop * friction).clamp(stop.min(0.0), stop.max(0.0))
}

/// Resolve a ball hitting a wall moving at `wall_vel`
///
/// Returns `None` if the ball is not approaching the wall in the wall's
/// frame. Restitution is applied first; friction then acts on the
/// post-restitution tangential speed.
pub fn resolve_contact(
    ball_vel: Vec2,
    wall_vel: Vec2,
    normal: Vec2,
    restitution: f32,
    friction: f32,
) -> Option<ContactResponse> {
    let relative = ball_vel - wall_vel;
    let vn = relative.dot(normal);
    if vn >= 0.0 {
        return None;
    }

    let bounced = relative + normal * (-(1.0 + restitution) * vn);

    let tangent = normal.perp();
    let vt = bounced.dot(tangent);
    let after = bounced + tangent * friction_impulse(vt, friction);

    Some(ContactResponse {
        velocity: after + wall_vel,
        normal_speed_before: vn,
        normal_speed_after: after.dot(normal),
        tangent_speed_before: vt,
        tangent_speed_after: after.dot(tangent),
    })
}

/// Push a ball out of a contact along the normal, slightly past the surface
#[inline]
pub fn separation(contact: &EdgeContact, correction: f32) -> Vec2 {
    contact.normal * (contact.penetration * correction)
}
