//! The k-armed testbed: averages ε-greedy runs over many random bandit
//! problems and produces the series the comparison figure draws.

use rand::Rng;
use tracing::{debug, info};

use crate::agent::Agent;
use crate::algorithms::epsilon_greedy::EpsilonGreedyAgent;
use crate::config::TestbedConfig;
use crate::environments::bandit::KArmedBandit;
use crate::error::Result;
use crate::series::ExperimentResults;

// 智能体随机数种子与老虎机种子错开
const AGENT_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Per-step averages of one ε over all runs.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsilonCurve {
    pub epsilon: f64,
    pub average_rewards: Vec<f64>,
    pub optimal_actions: Vec<f64>,
}

pub fn epsilon_label(epsilon: f64) -> String {
    format!("eps={epsilon}")
}

/// Runs every ε of `config` and collects the curves, labelled `eps=<ε>` in
/// config order.
///
/// Run `i` faces the same bandit problem for every ε, so the curves differ only
/// by the agent's behaviour.
pub fn run_testbed(config: &TestbedConfig) -> Result<ExperimentResults> {
    config.validate()?;
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());

    let mut average_rewards = Vec::with_capacity(config.epsilons.len());
    let mut optimal_actions = Vec::with_capacity(config.epsilons.len());
    let mut labels = Vec::with_capacity(config.epsilons.len());

    for (index, &epsilon) in config.epsilons.iter().enumerate() {
        let curve = run_epsilon(config, epsilon, base_seed, index as u64)?;
        debug!(
            epsilon,
            final_reward = curve.average_rewards.last().copied().unwrap_or_default(),
            final_optimal = curve.optimal_actions.last().copied().unwrap_or_default(),
            "epsilon finished"
        );
        labels.push(epsilon_label(epsilon));
        average_rewards.push(curve.average_rewards);
        optimal_actions.push(curve.optimal_actions);
    }

    info!(
        epsilons = ?config.epsilons,
        runs = config.runs,
        steps = config.steps,
        "testbed sweep finished"
    );
    ExperimentResults::new(config.steps, average_rewards, optimal_actions, labels)
}

/// Averages `config.runs` independent runs of one ε.
pub fn run_epsilon(
    config: &TestbedConfig,
    epsilon: f64,
    base_seed: u64,
    stream: u64,
) -> Result<EpsilonCurve> {
    let steps = config.steps;
    let mut reward_sums = vec![0.0; steps];
    let mut optimal_counts = vec![0u64; steps];

    let agent_seed = (base_seed ^ AGENT_SEED_MIX).wrapping_add(stream);
    let mut agent = EpsilonGreedyAgent::<KArmedBandit>::new(
        config.arms,
        epsilon,
        config.initial_value,
        agent_seed,
    )?;

    for run in 0..config.runs {
        let problem_seed = base_seed.wrapping_add(run as u64);
        let mut bandit = KArmedBandit::new(config.arms, config.reward_std, problem_seed)?;
        let optimal = bandit.optimal_action();

        // 每个问题从头学起，随机数流继续往下走
        agent.reset();
        let episode = agent.run(&mut bandit, steps);
        let steps_taken = episode.actions.iter().zip(&episode.rewards);
        for (step, (&action, &reward)) in steps_taken.enumerate() {
            reward_sums[step] += reward;
            if action == optimal {
                optimal_counts[step] += 1;
            }
        }
    }

    let runs = config.runs as f64;
    Ok(EpsilonCurve {
        epsilon,
        average_rewards: reward_sums.into_iter().map(|sum| sum / runs).collect(),
        optimal_actions: optimal_counts
            .into_iter()
            .map(|count| count as f64 / runs)
            .collect(),
    })
}
