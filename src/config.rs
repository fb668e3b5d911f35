use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Size and typography of the rendered figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Pixels. The default 1600 x 800 is a 16 x 8 inch figure at 100 dpi.
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub font: String,
    pub label_font_size: u32,
    pub desc_font_size: u32,
    pub legend_font_size: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    /// Title drawn above both panels.
    pub caption: Option<String>,
    pub caption_font_size: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        FigureConfig {
            width: 1600,
            height: 800,
            margin: 20,
            font: "sans-serif".to_owned(),
            label_font_size: 16,
            desc_font_size: 20,
            legend_font_size: 16,
            x_label_area: 50,
            y_label_area: 60,
            caption: None,
            caption_font_size: 28,
        }
    }
}

impl FigureConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "figure size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Parameters of the k-armed bandit testbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestbedConfig {
    pub arms: usize,
    pub steps: usize,
    /// Independent bandit problems averaged per epsilon.
    pub runs: usize,
    pub epsilons: Vec<f64>,
    /// Standard deviation of the reward around an arm's true value.
    pub reward_std: f64,
    /// Starting action-value estimate of every arm.
    pub initial_value: f64,
    pub seed: Option<u64>,
}

impl Default for TestbedConfig {
    fn default() -> Self {
        TestbedConfig {
            arms: 10,
            steps: 1000,
            runs: 2000,
            epsilons: vec![0.0, 0.01, 0.1],
            reward_std: 1.0,
            initial_value: 0.0,
            seed: None,
        }
    }
}

impl TestbedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.arms == 0 {
            return Err(Error::InvalidConfig("arms must be positive".into()));
        }
        if self.steps == 0 {
            return Err(Error::EmptySteps);
        }
        if self.runs == 0 {
            return Err(Error::InvalidConfig("runs must be positive".into()));
        }
        if let Some(eps) = self.epsilons.iter().find(|e| !(0.0..=1.0).contains(*e)) {
            return Err(Error::InvalidConfig(format!(
                "epsilon {eps} is outside [0, 1]"
            )));
        }
        if !self.reward_std.is_finite() || self.reward_std < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "reward_std must be a non-negative number, got {}",
                self.reward_std
            )));
        }
        if !self.initial_value.is_finite() {
            return Err(Error::InvalidConfig("initial_value must be finite".into()));
        }
        Ok(())
    }
}

/// Everything the testbed binary needs: what to simulate and where to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub testbed: TestbedConfig,
    pub figure: FigureConfig,
    pub output: PathBuf,
    /// Where to keep the raw series as JSON, if anywhere.
    pub results: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            testbed: TestbedConfig::default(),
            figure: FigureConfig::default(),
            output: PathBuf::from("bandit_testbed.png"),
            results: None,
        }
    }
}

impl RunConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.testbed.validate()?;
        config.figure.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
