// detailed implementation
pub mod algorithms;
pub mod config;
pub mod environments;
pub mod error;
pub mod experiment;
pub mod figure;
pub mod plotting;
pub mod render;
pub mod series;
pub mod utils;

// Traits
pub mod agent;
pub mod environment;
pub mod policy;

pub use error::{Error, Result};
pub use figure::Figure;
pub use plotting::{plotting, plotting_with_config};
pub use series::ExperimentResults;
