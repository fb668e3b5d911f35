use banditplot::config::{FigureConfig, TestbedConfig};
use banditplot::experiment::run_testbed;
use banditplot::figure::Figure;
use banditplot::render::{font_available, render_svg_string};
use banditplot::{Error, ExperimentResults};

fn small_testbed() -> TestbedConfig {
    TestbedConfig {
        steps: 100,
        runs: 50,
        seed: Some(7),
        ..TestbedConfig::default()
    }
}

#[test]
fn testbed_feeds_comparison_figure() {
    let results = run_testbed(&small_testbed()).unwrap();
    let figure = Figure::bandit_comparison(&results);

    let rewards = figure.average_reward_panel().unwrap();
    let optimal = figure.optimal_action_panel().unwrap();
    assert_eq!(rewards.lines.len(), 3);
    assert_eq!(optimal.lines.len(), 3);
    assert_eq!(optimal.y_bounds(), 0.0..100.0);

    for (line, fractions) in optimal.lines.iter().zip(results.optimal_actions()) {
        for (&(_, percent), fraction) in line.points.iter().zip(fractions) {
            assert_eq!(percent, fraction * 100.0);
        }
    }
}

#[test]
fn saved_results_reload_into_the_same_figure() {
    let results = run_testbed(&small_testbed()).unwrap();
    let path = std::env::temp_dir().join("banditplot_integration_results.json");
    results.save(&path).unwrap();
    let loaded = ExperimentResults::load(&path).unwrap();
    assert_eq!(
        Figure::bandit_comparison(&loaded),
        Figure::bandit_comparison(&results)
    );
}

#[test]
fn two_labels_one_series_is_an_error() {
    let err = banditplot::plotting(
        3,
        &[vec![1.0, 2.0, 3.0]],
        &[vec![0.5, 0.5, 1.0]],
        &["eps=0.1", "eps=0.01"],
        std::env::temp_dir().join("banditplot_integration_mismatch.png"),
    )
    .unwrap_err();
    assert!(matches!(err, Error::SeriesCountMismatch { .. }));
}

#[test]
fn testbed_figure_renders_to_svg() {
    let config = FigureConfig::default();
    if !font_available(&config.font) {
        return;
    }
    let results = run_testbed(&small_testbed()).unwrap();
    let svg = render_svg_string(&Figure::bandit_comparison(&results), &config).unwrap();
    for label in results.labels() {
        assert!(svg.contains(label.as_str()));
    }
}
