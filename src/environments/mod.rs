pub mod bandit;
