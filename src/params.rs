//! Simulation parameters and arena geometry
//!
//! `SimParams` is owned by the caller and handed to every tick; the physics
//! core never stores or mutates it. `ArenaConfig` describes the fixed scene
//! a `SimState` is built from. Both persist together as `Settings` JSON.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Recommended operating bounds for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Values read at the start of each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Downward acceleration per tick² (+y is down)
    pub gravity: f32,
    /// Linear drag coefficient; acceleration is `-air_drag * velocity / mass`
    pub air_drag: f32,
    /// Coefficient of restitution (0 = no bounce, 1 = perfectly elastic)
    pub restitution: f32,
    /// Fraction of tangential relative speed removed on contact
    pub tangential_friction: f32,
    /// Hexagon rotation in radians per tick (sign gives direction)
    pub angular_rate: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: 0.15,
            air_drag: 0.005,
            restitution: 0.7,
            tangential_friction: 0.1,
            angular_rate: 0.01,
        }
    }
}

impl SimParams {
    /// Recommended bounds, in field order
    pub const RANGES: [ParamRange; 5] = [
        ParamRange { name: "gravity", min: 0.0, max: 0.5 },
        ParamRange { name: "air_drag", min: 0.0, max: 0.1 },
        ParamRange { name: "restitution", min: 0.0, max: 1.0 },
        ParamRange { name: "tangential_friction", min: 0.0, max: 1.0 },
        ParamRange { name: "angular_rate", min: -0.05, max: 0.05 },
    ];

    /// A static, lossless wall with no drag or gravity
    pub fn elastic() -> Self {
        Self {
            gravity: 0.0,
            air_drag: 0.0,
            restitution: 1.0,
            tangential_friction: 0.0,
            angular_rate: 0.0,
        }
    }

    fn values(&self) -> [f32; 5] {
        [
            self.gravity,
            self.air_drag,
            self.restitution,
            self.tangential_friction,
            self.angular_rate,
        ]
    }

    /// Reject non-finite values; everything finite is accepted
    pub fn validate(&self) -> Result<()> {
        for (range, value) in Self::RANGES.iter().zip(self.values()) {
            if !value.is_finite() {
                return Err(SimError::NonFiniteParameter {
                    field: range.name,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Parameters outside their recommended bounds (still usable)
    pub fn out_of_range(&self) -> Vec<(ParamRange, f32)> {
        Self::RANGES
            .iter()
            .zip(self.values())
            .filter(|(range, value)| !range.contains(*value))
            .map(|(range, value)| (*range, value))
            .collect()
    }

    /// Validate, then log a warning for each out-of-range value
    pub fn checked(self) -> Result<Self> {
        self.validate()?;
        for (range, value) in self.out_of_range() {
            log::warn!(
                "{} = {} is outside the recommended range [{}, {}]",
                range.name,
                value,
                range.min,
                range.max
            );
        }
        Ok(self)
    }
}

/// Fixed scene geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub hex_center: Vec2,
    pub hex_circumradius: f32,
    pub ball_radius: f32,
    pub ball_mass: f32,
    /// Where the ball starts, at rest
    pub ball_start: Vec2,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let hex_center = Vec2::new(HEX_CENTER_X, HEX_CENTER_Y);
        Self {
            hex_center,
            hex_circumradius: HEX_CIRCUMRADIUS,
            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            // Near the top of the hexagon
            ball_start: hex_center - Vec2::new(0.0, HEX_CIRCUMRADIUS / 2.0),
        }
    }
}

/// Everything a run is configured from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: ArenaConfig,
    pub params: SimParams,
}

impl Settings {
    /// Load settings from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|source| SimError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        settings.params.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SimError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
