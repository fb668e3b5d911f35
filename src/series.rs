//! Experiment results: the validated input of the comparison figure.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result, SeriesKind};

/// Per-step metrics for a set of experimental configurations, one series per
/// plot label.
///
/// `average_rewards[i]` and `optimal_actions[i]` belong to `labels[i]`, and every
/// series holds exactly `num_steps` values. Optimal action values are fractions
/// in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResults {
    num_steps: usize,
    labels: Vec<String>,
    average_rewards: Vec<Vec<f64>>,
    optimal_actions: Vec<Vec<f64>>,
}

/// One labeled configuration borrowed out of [`ExperimentResults`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesView<'a> {
    pub label: &'a str,
    pub average_rewards: &'a [f64],
    pub optimal_actions: &'a [f64],
}

impl ExperimentResults {
    pub fn new<L: Into<String>>(
        num_steps: usize,
        average_rewards: Vec<Vec<f64>>,
        optimal_actions: Vec<Vec<f64>>,
        plot_label: impl IntoIterator<Item = L>,
    ) -> Result<Self> {
        let results = ExperimentResults {
            num_steps,
            labels: plot_label.into_iter().map(Into::into).collect(),
            average_rewards,
            optimal_actions,
        };
        results.validate()?;
        Ok(results)
    }

    /// Checks the shape invariants. Anything that would otherwise show up as a
    /// truncated or misaligned line is rejected here.
    pub fn validate(&self) -> Result<()> {
        if self.num_steps == 0 {
            return Err(Error::EmptySteps);
        }
        if self.labels.len() != self.average_rewards.len()
            || self.labels.len() != self.optimal_actions.len()
        {
            return Err(Error::SeriesCountMismatch {
                labels: self.labels.len(),
                rewards: self.average_rewards.len(),
                optimal: self.optimal_actions.len(),
            });
        }

        for (index, label) in self.labels.iter().enumerate() {
            check_series(
                SeriesKind::AverageReward,
                label,
                &self.average_rewards[index],
                self.num_steps,
            )?;
            check_series(
                SeriesKind::OptimalAction,
                label,
                &self.optimal_actions[index],
                self.num_steps,
            )?;
        }
        Ok(())
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn average_rewards(&self) -> &[Vec<f64>] {
        &self.average_rewards
    }

    pub fn optimal_actions(&self) -> &[Vec<f64>] {
        &self.optimal_actions
    }

    /// Number of labeled series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SeriesView<'_>> {
        self.labels
            .iter()
            .zip(&self.average_rewards)
            .zip(&self.optimal_actions)
            .map(|((label, rewards), optimal)| SeriesView {
                label,
                average_rewards: rewards,
                optimal_actions: optimal,
            })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates. Shape errors are reported the same way as for
    /// [`ExperimentResults::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let results: ExperimentResults = serde_json::from_str(json)?;
        results.validate()?;
        Ok(results)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), series = self.len(), "saved experiment results");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn check_series(kind: SeriesKind, label: &str, values: &[f64], num_steps: usize) -> Result<()> {
    if values.len() != num_steps {
        return Err(Error::SeriesLength {
            kind,
            label: label.to_owned(),
            len: values.len(),
            num_steps,
        });
    }
    if let Some(step) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFinite {
            kind,
            label: label.to_owned(),
            step,
        });
    }
    Ok(())
}
