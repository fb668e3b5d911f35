//! In-memory description of the bandit comparison figure.
//!
//! Building the figure is separate from drawing it, so what ends up on each
//! panel (lines, labels, axis bounds) can be checked without a font stack.

use std::ops::Range;

use tracing::debug;

use crate::series::ExperimentResults;
use crate::utils::{to_percent, value_range};

pub const STEPS_DESC: &str = "Number of Steps";
pub const AVERAGE_REWARD_DESC: &str = "Average Reward";
pub const OPTIMAL_ACTION_DESC: &str = "% Optimal Action";

/// Panel B always shows the full percentage scale.
pub const PERCENT_RANGE: Range<f64> = 0.0..100.0;

/// One legend entry and the `(step, value)` points it draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: String,
    pub points: Vec<(usize, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub x_desc: String,
    pub y_desc: String,
    pub num_steps: usize,
    /// Fixed y bounds. `None` means the bounds follow the data.
    pub y_range: Option<Range<f64>>,
    pub lines: Vec<Line>,
}

impl Panel {
    fn new(x_desc: &str, y_desc: &str, num_steps: usize) -> Self {
        Panel {
            x_desc: x_desc.to_owned(),
            y_desc: y_desc.to_owned(),
            num_steps,
            y_range: None,
            lines: Vec::new(),
        }
    }

    /// x axis from step 0 to the last step. A single step still gets a unit
    /// wide axis.
    pub fn x_range(&self) -> Range<usize> {
        0..self.num_steps.saturating_sub(1).max(1)
    }

    pub fn y_bounds(&self) -> Range<f64> {
        match &self.y_range {
            Some(range) => range.clone(),
            None => value_range(&self.lines),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.label.as_str())
    }
}

/// A row of panels laid out left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Average reward on the left, percentage of optimal actions on the right,
    /// one line per labeled configuration in input order.
    pub fn bandit_comparison(results: &ExperimentResults) -> Self {
        let num_steps = results.num_steps();
        let mut rewards = Panel::new(STEPS_DESC, AVERAGE_REWARD_DESC, num_steps);
        let mut optimal = Panel::new(STEPS_DESC, OPTIMAL_ACTION_DESC, num_steps);
        optimal.y_range = Some(PERCENT_RANGE);

        for series in results.iter() {
            debug!(label = series.label, num_steps, "adding series");
            rewards.lines.push(Line {
                label: series.label.to_owned(),
                points: series.average_rewards.iter().copied().enumerate().collect(),
            });
            optimal.lines.push(Line {
                label: series.label.to_owned(),
                points: to_percent(series.optimal_actions).enumerate().collect(),
            });
        }

        Figure {
            panels: vec![rewards, optimal],
        }
    }

    pub fn average_reward_panel(&self) -> Option<&Panel> {
        self.panels.first()
    }

    pub fn optimal_action_panel(&self) -> Option<&Panel> {
        self.panels.get(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn figure(
        num_steps: usize,
        rewards: Vec<Vec<f64>>,
        optimal: Vec<Vec<f64>>,
        labels: &[&str],
    ) -> Figure {
        let labels = labels.iter().copied();
        let results = ExperimentResults::new(num_steps, rewards, optimal, labels);
        Figure::bandit_comparison(&results.unwrap())
    }

    #[test]
    fn single_series_scenario() {
        let fig = figure(
            3,
            vec![vec![1.0, 2.0, 3.0]],
            vec![vec![0.5, 0.5, 1.0]],
            &["eps=0.1"],
        );
        assert_eq!(fig.panels.len(), 2);

        let rewards = fig.average_reward_panel().unwrap();
        assert_eq!(rewards.x_desc, "Number of Steps");
        assert_eq!(rewards.y_desc, "Average Reward");
        assert_eq!(rewards.lines.len(), 1);
        assert_eq!(rewards.lines[0].label, "eps=0.1");
        assert_eq!(rewards.lines[0].points, vec![(0, 1.0), (1, 2.0), (2, 3.0)]);

        let optimal = fig.optimal_action_panel().unwrap();
        assert_eq!(optimal.x_desc, "Number of Steps");
        assert_eq!(optimal.y_desc, "% Optimal Action");
        assert_eq!(optimal.lines[0].points, vec![(0, 50.0), (1, 50.0), (2, 100.0)]);
        assert_eq!(optimal.y_bounds(), 0.0..100.0);
    }

    #[test]
    fn optimal_axis_ignores_data_range() {
        for value in [0.0, 1.0, 0.3] {
            let fig = figure(4, vec![vec![0.0; 4]], vec![vec![value; 4]], &["x"]);
            assert_eq!(fig.optimal_action_panel().unwrap().y_bounds(), 0.0..100.0);
        }
    }

    #[test]
    fn reward_axis_follows_data() {
        let fig = figure(2, vec![vec![0.0, 1.0]], vec![vec![0.0, 0.0]], &["x"]);
        let bounds = fig.average_reward_panel().unwrap().y_bounds();
        assert_relative_eq!(bounds.start, -0.05);
        assert_relative_eq!(bounds.end, 1.05);
    }

    #[test]
    fn legend_order_matches_labels() {
        let labels = ["eps=0", "eps=0.01", "eps=0.1"];
        let fig = figure(
            2,
            vec![vec![0.0, 0.0]; 3],
            vec![vec![0.0, 0.0]; 3],
            &labels,
        );
        for panel in &fig.panels {
            assert_eq!(panel.labels().collect::<Vec<_>>(), labels);
        }
    }

    #[test]
    fn x_axis_spans_every_step() {
        let fig = figure(5, vec![vec![0.0; 5]], vec![vec![0.0; 5]], &["x"]);
        for panel in &fig.panels {
            assert_eq!(panel.x_range(), 0..4);
            let xs: Vec<usize> = panel.lines[0].points.iter().map(|p| p.0).collect();
            assert_eq!(xs, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn single_step_axis_is_not_empty() {
        let fig = figure(1, vec![vec![0.0]], vec![vec![1.0]], &["x"]);
        assert_eq!(fig.panels[0].x_range(), 0..1);
    }
}
