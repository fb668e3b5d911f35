use std::fmt;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two per-configuration series a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    AverageReward,
    OptimalAction,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::AverageReward => f.write_str("average reward"),
            SeriesKind::OptimalAction => f.write_str("optimal action"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("num_steps must be positive")]
    EmptySteps,

    #[error("{labels} labels, {rewards} reward series, {optimal} optimal action series")]
    SeriesCountMismatch {
        labels: usize,
        rewards: usize,
        optimal: usize,
    },

    #[error("{kind} series `{label}` has {len} values, expected {num_steps}")]
    SeriesLength {
        kind: SeriesKind,
        label: String,
        len: usize,
        num_steps: usize,
    },

    #[error("{kind} series `{label}` has a non-finite value at step {step}")]
    NonFinite {
        kind: SeriesKind,
        label: String,
        step: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// plotters 的错误类型依赖后端，这里统一转成字符串
impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Drawing(err.to_string())
    }
}
