use crate::environment::{Environment, StepResult};
use crate::error::{Error, Result};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, StandardNormal};

/// k 臂老虎机：每个臂的真实价值 q*(a) ~ N(0, 1)，拉动后奖励 ~ N(q*(a), σ²)
pub struct KArmedBandit {
    q_star: Vec<f64>,
    noise: Normal<f64>,
    rng: StdRng,
}

impl KArmedBandit {
    /// Draws `arms` true values from a standard normal.
    pub fn new(arms: usize, reward_std: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let q_star: Vec<f64> = (0..arms).map(|_| rng.sample(StandardNormal)).collect();
        Self::build(q_star, reward_std, rng)
    }

    /// A bandit with known true values, mostly for tests.
    pub fn with_values(q_star: Vec<f64>, reward_std: f64, seed: u64) -> Result<Self> {
        Self::build(q_star, reward_std, StdRng::seed_from_u64(seed))
    }

    fn build(q_star: Vec<f64>, reward_std: f64, rng: StdRng) -> Result<Self> {
        if q_star.is_empty() {
            return Err(Error::InvalidConfig("bandit has no arms".into()));
        }
        // Normal::new 只检查有限性，负的标准差要自己拒绝
        if !reward_std.is_finite() || reward_std < 0.0 {
            let msg = format!("reward_std must be a non-negative number, got {reward_std}");
            return Err(Error::InvalidConfig(msg));
        }
        let noise = match Normal::new(0.0, reward_std) {
            Ok(noise) => noise,
            Err(e) => return Err(Error::InvalidConfig(e.to_string())),
        };
        Ok(KArmedBandit { q_star, noise, rng })
    }

    pub fn true_values(&self) -> &[f64] {
        &self.q_star
    }

    /// Arm with the highest true value. Ties go to the lowest index.
    pub fn optimal_action(&self) -> usize {
        let mut best = 0;
        for (arm, &q) in self.q_star.iter().enumerate() {
            if q > self.q_star[best] {
                best = arm;
            }
        }
        best
    }

    /// Panics if `arm` is out of range.
    pub fn pull(&mut self, arm: usize) -> f64 {
        self.q_star[arm] + self.noise.sample(&mut self.rng)
    }
}

impl Environment for KArmedBandit {
    type State = ();
    type Action = usize;
    type Reward = f64;

    fn reset(&mut self) -> Self::State {}

    fn step(&mut self, action: &Self::Action) -> StepResult<Self::State, Self::Reward> {
        StepResult {
            next_state: (),
            reward: self.pull(*action),
        }
    }

    fn action_space(&self) -> usize {
        self.q_star.len()
    }
}
