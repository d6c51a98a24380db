pub mod candidate;
pub mod pass_catalog;
pub mod plan;
pub mod planner_config;
pub mod scheduler;
pub mod strategy;
pub mod time_range;
pub mod utils;
