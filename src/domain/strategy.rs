pub mod aos_priority_strategy;
pub mod max_elevation_strategy;
pub mod strategy_trait;
pub mod strategy_type;

pub use aos_priority_strategy::AosPriorityStrategy;
pub use max_elevation_strategy::MaxElevationStrategy;
pub use strategy_trait::{PriorityKey, SelectionStrategy};
pub use strategy_type::StrategyType;
