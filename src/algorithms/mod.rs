pub mod epsilon_greedy;
