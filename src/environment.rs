pub struct StepResult<S, R> {
    pub next_state: S,
    pub reward: R,
}

pub trait Environment {
    type State;
    type Action;
    type Reward: Copy + Into<f64>;

    fn reset(&mut self) -> Self::State;

    /// 执行动作，返回 (next_state, reward)
    fn step(&mut self, action: &Self::Action) -> StepResult<Self::State, Self::Reward>;

    /// 动作空间维度
    fn action_space(&self) -> usize;
}
