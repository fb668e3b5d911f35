use std::path::Path;

use crate::config::FigureConfig;
use crate::error::Result;
use crate::figure::Figure;
use crate::render::render_to_file;
use crate::series::ExperimentResults;

/// Draws average reward and percentage of optimal actions against the step
/// index, side by side, one line per entry of `plot_label`, and writes the
/// figure to `path`.
///
/// `average_rewards` and `optimal_actions` are indexed in parallel with
/// `plot_label`, and every series must hold `num_steps` values. Optimal action
/// values are fractions and are shown as percentages on a fixed 0 to 100 axis.
/// Shape mismatches are returned as errors and nothing is written.
pub fn plotting<R, O, L>(
    num_steps: usize,
    average_rewards: &[R],
    optimal_actions: &[O],
    plot_label: &[L],
    path: impl AsRef<Path>,
) -> Result<()>
where
    R: AsRef<[f64]>,
    O: AsRef<[f64]>,
    L: AsRef<str>,
{
    plotting_with_config(
        num_steps,
        average_rewards,
        optimal_actions,
        plot_label,
        &FigureConfig::default(),
        path,
    )
}

pub fn plotting_with_config<R, O, L>(
    num_steps: usize,
    average_rewards: &[R],
    optimal_actions: &[O],
    plot_label: &[L],
    config: &FigureConfig,
    path: impl AsRef<Path>,
) -> Result<()>
where
    R: AsRef<[f64]>,
    O: AsRef<[f64]>,
    L: AsRef<str>,
{
    let results = ExperimentResults::new(
        num_steps,
        owned(average_rewards),
        owned(optimal_actions),
        plot_label.iter().map(|l| l.as_ref()),
    )?;
    render_to_file(&Figure::bandit_comparison(&results), config, path)
}

fn owned<S: AsRef<[f64]>>(series: &[S]) -> Vec<Vec<f64>> {
    series.iter().map(|s| s.as_ref().to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn mismatched_labels_fail_without_writing() {
        let path = std::env::temp_dir().join("banditplot_mismatch_never_written.png");
        let _ = std::fs::remove_file(&path);

        let err = plotting(
            3,
            &[vec![1.0, 2.0, 3.0]],
            &[vec![0.5, 0.5, 1.0]],
            &["eps=0.1", "eps=0.01"],
            &path,
        )
        .unwrap_err();

        assert!(matches!(err, Error::SeriesCountMismatch { labels: 2, .. }));
        assert!(!path.exists());
    }

    #[test]
    fn zero_steps_fail() {
        let empty: [&[f64]; 0] = [];
        let labels: [&str; 0] = [];
        let path = std::env::temp_dir().join("banditplot_zero_steps.png");
        let err = plotting(0, &empty, &empty, &labels, &path).unwrap_err();
        assert!(matches!(err, Error::EmptySteps));
    }

    #[test]
    fn writes_svg_file() {
        if !crate::render::font_available(&FigureConfig::default().font) {
            return;
        }
        let dir = std::env::temp_dir().join("banditplot_plotting_test");
        let path = dir.join("comparison.svg");
        plotting(
            3,
            &[[1.0, 2.0, 3.0]],
            &[[0.5, 0.5, 1.0]],
            &["eps=0.1"],
            &path,
        )
        .unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("eps=0.1"));
    }
}
