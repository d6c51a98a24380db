use std::collections::HashSet;

use crate::api::planner_config_dto::PlannerConfigDto;
use crate::domain::scheduler::{DEFAULT_MIN_DURATION_SECONDS, PassScheduler};
use crate::domain::strategy::StrategyType;
use crate::domain::utils::id::SatelliteId;
use crate::error::ConversionError;

pub const DEFAULT_RECEIVER_COMMAND: &str = "receiver";

/// Validated planner settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub strategy: StrategyType,
    pub min_duration_seconds: f64,
    /// Prefix of the command line of every planned recording job.
    pub receiver_command: String,
    pub disabled_satellites: HashSet<SatelliteId>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            strategy: StrategyType::default(),
            min_duration_seconds: DEFAULT_MIN_DURATION_SECONDS,
            receiver_command: DEFAULT_RECEIVER_COMMAND.to_string(),
            disabled_satellites: HashSet::new(),
        }
    }
}

impl PlannerConfig {
    pub fn from_dto(dto: PlannerConfigDto) -> Result<Self, ConversionError> {
        let mut config = PlannerConfig::default();

        if let Some(name) = dto.strategy {
            config.strategy = name.parse()?;
        }

        if let Some(min_duration_seconds) = dto.min_duration_seconds {
            config.set_min_duration_seconds(min_duration_seconds)?;
        }

        if let Some(receiver_command) = dto.receiver_command {
            config.receiver_command = receiver_command;
        }

        config.disabled_satellites =
            dto.satellites.into_iter().filter(|satellite| satellite.disabled).map(|satellite| SatelliteId::new(satellite.name)).collect();

        Ok(config)
    }

    pub fn set_min_duration_seconds(&mut self, min_duration_seconds: f64) -> Result<(), ConversionError> {
        if !min_duration_seconds.is_finite() || min_duration_seconds < 0.0 {
            return Err(ConversionError::InvalidMinDuration(min_duration_seconds));
        }

        self.min_duration_seconds = min_duration_seconds;
        Ok(())
    }

    pub fn is_enabled(&self, satellite: &SatelliteId) -> bool {
        !self.disabled_satellites.contains(satellite)
    }

    pub fn build_scheduler(&self) -> Result<PassScheduler, ConversionError> {
        PassScheduler::from_type(self.strategy, self.min_duration_seconds)
    }
}
