use hs_core::HsError;
use hs_projection::ProjectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown {kind} preset {name:?}")]
    UnknownPreset {
        kind: &'static str,
        name: String,
    },

    #[error("duplicate {kind} preset {name:?}")]
    DuplicatePreset {
        kind: &'static str,
        name: String,
    },

    #[error("preset parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario horizon: {0}")]
    Horizon(#[from] HsError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
