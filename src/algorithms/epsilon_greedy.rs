use std::marker::PhantomData;

use crate::agent::{Agent, Episode};
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::policy::Policy;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// ε-greedy agent with sample-average action-value estimates.
///
/// With probability ε it pulls a uniformly random arm, otherwise one of the
/// arms with the highest estimate, ties broken uniformly at random.
pub struct EpsilonGreedyAgent<E: Environment> {
    estimates: Vec<f64>,
    counts: Vec<u64>,
    epsilon: f64,
    initial_value: f64,
    rng: StdRng,
    _marker: PhantomData<E>,
}

impl<E> EpsilonGreedyAgent<E>
where
    E: Environment<Action = usize>,
{
    pub fn new(action_space: usize, epsilon: f64, initial_value: f64, seed: u64) -> Result<Self> {
        if action_space == 0 {
            return Err(Error::InvalidConfig("action space is empty".into()));
        }
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(Error::InvalidConfig(format!(
                "epsilon {epsilon} is outside [0, 1]"
            )));
        }
        Ok(EpsilonGreedyAgent {
            estimates: vec![initial_value; action_space],
            counts: vec![0; action_space],
            epsilon,
            initial_value,
            rng: StdRng::seed_from_u64(seed),
            _marker: PhantomData,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn greedy_action(&mut self) -> usize {
        let best = self
            .estimates
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let ties: Vec<usize> = self
            .estimates
            .iter()
            .enumerate()
            .filter(|&(_, &q)| q == best)
            .map(|(arm, _)| arm)
            .collect();
        ties.choose(&mut self.rng).copied().unwrap_or(0)
    }
}

impl<E> Policy<E::State, usize> for EpsilonGreedyAgent<E>
where
    E: Environment<Action = usize>,
{
    fn select_action(&mut self, _state: &E::State) -> usize {
        if self.rng.random::<f64>() < self.epsilon {
            // 探索
            self.rng.random_range(0..self.estimates.len())
        } else {
            self.greedy_action()
        }
    }
}

impl<E> Agent<E> for EpsilonGreedyAgent<E>
where
    E: Environment<Action = usize>,
{
    fn run(&mut self, env: &mut E, num_steps: usize) -> Episode<usize> {
        let mut episode = Episode::with_capacity(num_steps);
        let mut state = env.reset();

        for _ in 0..num_steps {
            let action = self.select_action(&state);
            let result = env.step(&action);
            self.observe(&action, result.reward);

            episode.actions.push(action);
            episode.rewards.push(result.reward.into());
            state = result.next_state;
        }

        episode
    }

    fn observe(&mut self, action: &usize, reward: E::Reward) {
        let arm = *action;
        self.counts[arm] += 1;
        // 增量式样本均值: Q <- Q + (R - Q) / N
        let n = self.counts[arm] as f64;
        self.estimates[arm] += (reward.into() - self.estimates[arm]) / n;
    }

    fn reset(&mut self) {
        self.estimates.fill(self.initial_value);
        self.counts.fill(0);
    }
}
