use crate::environment::Environment;

/// Actions taken and rewards received over one run, step by step.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode<A> {
    pub actions: Vec<A>,
    pub rewards: Vec<f64>,
}

impl<A> Episode<A> {
    pub fn with_capacity(num_steps: usize) -> Self {
        Episode {
            actions: Vec::with_capacity(num_steps),
            rewards: Vec::with_capacity(num_steps),
        }
    }
}

pub trait Agent<E: Environment> {
    // 与环境交互 num_steps 步，边走边学习
    fn run(&mut self, env: &mut E, num_steps: usize) -> Episode<E::Action>;

    // 根据一次奖励更新估计
    fn observe(&mut self, action: &E::Action, reward: E::Reward);

    // 清空已学到的估计
    fn reset(&mut self);
}
