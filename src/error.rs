//! Error types
//!
//! Only construction and settings handling can fail. The per-tick physics
//! never returns errors; numeric degeneracies are skipped where they occur.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or configuring a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("ball radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("ball mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("hexagon circumradius must be positive and finite, got {0}")]
    InvalidCircumradius(f32),

    #[error("{field} must be finite, got {value}")]
    NonFiniteParameter { field: &'static str, value: f32 },

    #[error("non-finite position ({x}, {y})")]
    NonFinitePosition { x: f32, y: f32 },

    #[error("non-finite velocity ({x}, {y})")]
    NonFiniteVelocity { x: f32, y: f32 },

    #[error("tick rate must be positive and finite, got {0}")]
    InvalidTickRate(f32),

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
