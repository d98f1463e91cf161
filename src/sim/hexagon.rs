//! Rotating regular hexagon boundary
//!
//! The only state is the rotation angle. Vertices are regenerated from
//! center, circumradius and angle whenever they are needed, so they always
//! sit exactly on the circumcircle, 60° apart.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::HEX_SIDES;
use crate::error::{Result, SimError};
use crate::polar_to_cartesian;

/// Hexagon vertices in order of increasing angle
pub type Vertices = [Vec2; HEX_SIDES];

/// A regular hexagon spinning about its center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HexagonRecord")]
pub struct Hexagon {
    center: Vec2,
    circumradius: f32,
    /// Accumulated rotation (radians, unbounded)
    angle: f32,
}

impl Hexagon {
    pub fn new(center: Vec2, circumradius: f32) -> Result<Self> {
        if !(circumradius.is_finite() && circumradius > 0.0) {
            return Err(SimError::InvalidCircumradius(circumradius));
        }
        if !center.is_finite() {
            return Err(SimError::NonFinitePosition {
                x: center.x,
                y: center.y,
            });
        }
        Ok(Self {
            center,
            circumradius,
            angle: 0.0,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn circumradius(&self) -> f32 {
        self.circumradius
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotate by `angular_rate` radians. The angle is never wrapped.
    pub fn advance(&mut self, angular_rate: f32) {
        self.angle += angular_rate;
    }

    /// Current vertex positions
    pub fn vertices(&self) -> Vertices {
        hexagon_vertices(self.center, self.circumradius, self.angle)
    }

    /// Velocity of a point rigidly attached to the hexagon
    #[inline]
    pub fn surface_velocity(&self, point: Vec2, angular_rate: f32) -> Vec2 {
        rigid_rotation_velocity(self.center, point, angular_rate)
    }
}

#[derive(Deserialize)]
struct HexagonRecord {
    center: Vec2,
    circumradius: f32,
    angle: f32,
}

impl TryFrom<HexagonRecord> for Hexagon {
    type Error = SimError;

    fn try_from(record: HexagonRecord) -> Result<Self> {
        let mut hexagon = Hexagon::new(record.center, record.circumradius)?;
        if !record.angle.is_finite() {
            return Err(SimError::NonFiniteParameter {
                field: "angle",
                value: record.angle,
            });
        }
        hexagon.angle = record.angle;
        Ok(hexagon)
    }
}

/// Vertex `i` lies at angle `TAU / 6 * i + angle` from `center`
pub fn hexagon_vertices(center: Vec2, circumradius: f32, angle: f32) -> Vertices {
    std::array::from_fn(|i| {
        let theta = TAU / HEX_SIDES as f32 * i as f32 + angle;
        center + polar_to_cartesian(circumradius, theta)
    })
}

/// Edges as consecutive vertex pairs, the last wrapping to the first
pub fn edges(vertices: &Vertices) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    (0..HEX_SIDES).map(move |i| (vertices[i], vertices[(i + 1) % HEX_SIDES]))
}

/// `ω × r` in 2D: `ω * (-r.y, r.x)` with `r = point - center`
#[inline]
pub fn rigid_rotation_velocity(center: Vec2, point: Vec2, angular_rate: f32) -> Vec2 {
    (point - center).perp() * angular_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_rejects_bad_circumradius() {
        assert!(matches!(
            Hexagon::new(Vec2::ZERO, 0.0),
            Err(SimError::InvalidCircumradius(_))
        ));
        assert!(Hexagon::new(Vec2::ZERO, -5.0).is_err());
        assert!(Hexagon::new(Vec2::ZERO, f32::NAN).is_err());
        assert!(Hexagon::new(Vec2::new(f32::INFINITY, 0.0), 10.0).is_err());
    }

    #[test]
    fn test_unrotated_vertices() {
        let hex = Hexagon::new(Vec2::new(10.0, 20.0), 100.0).unwrap();
        let v = hex.vertices();
        assert!((v[0] - Vec2::new(110.0, 20.0)).length() < 1e-4);
        assert!((v[3] - Vec2::new(-90.0, 20.0)).length() < 1e-3);
        // Vertex 1 at 60°
        let expected = Vec2::new(10.0 + 50.0, 20.0 + 100.0 * (PI / 3.0).sin());
        assert!((v[1] - expected).length() < 1e-3);
    }

    #[test]
    fn test_advance_accumulates_without_wrapping() {
        let mut hex = Hexagon::new(Vec2::ZERO, 1.0).unwrap();
        for _ in 0..1000 {
            hex.advance(0.05);
        }
        assert!((hex.angle() - 50.0).abs() < 1e-3);
        hex.advance(-0.05);
        assert!((hex.angle() - 49.95).abs() < 1e-3);
    }

    #[test]
    fn test_edges_wrap_around() {
        let hex = Hexagon::new(Vec2::ZERO, 50.0).unwrap();
        let v = hex.vertices();
        let e: Vec<_> = edges(&v).collect();
        assert_eq!(e.len(), HEX_SIDES);
        assert_eq!(e[5], (v[5], v[0]));
        // Regular hexagon: side length equals circumradius
        for (a, b) in e {
            assert!(((b - a).length() - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_surface_velocity_is_tangential() {
        let hex = Hexagon::new(Vec2::new(5.0, 5.0), 10.0).unwrap();
        let point = Vec2::new(15.0, 5.0);
        let v = hex.surface_velocity(point, 0.5);
        // r = (10, 0) -> 0.5 * (0, 10)
        assert!((v - Vec2::new(0.0, 5.0)).length() < 1e-6);
        assert_eq!(hex.surface_velocity(point, 0.0), Vec2::ZERO);
        assert_eq!(hex.surface_velocity(hex.center(), 0.3), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_vertices_are_pure_and_regular(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            radius in 1.0f32..400.0,
            angle in -100.0f32..100.0,
        ) {
            let center = Vec2::new(cx, cy);
            let a = hexagon_vertices(center, radius, angle);
            let b = hexagon_vertices(center, radius, angle);
            prop_assert_eq!(a, b);

            for i in 0..HEX_SIDES {
                let r = a[i] - center;
                prop_assert!((r.length() - radius).abs() < radius * 1e-4 + 1e-3);
                let next = a[(i + 1) % HEX_SIDES] - center;
                // Consecutive vertices 60° apart, counter-clockwise in math orientation
                let cross = r.perp_dot(next);
                prop_assert!(cross > 0.0);
                let cos = r.dot(next) / (radius * radius);
                prop_assert!((cos - 0.5).abs() < 1e-3);
            }
        }

        #[test]
        fn prop_surface_velocity_perpendicular_to_radius(
            px in -300.0f32..300.0,
            py in -300.0f32..300.0,
            rate in -0.05f32..0.05,
        ) {
            let point = Vec2::new(px, py);
            let v = rigid_rotation_velocity(Vec2::ZERO, point, rate);
            prop_assert!(v.dot(point).abs() < 1e-2);
            prop_assert!((v.length() - rate.abs() * point.length()).abs() < 1e-2);
        }
    }
}
