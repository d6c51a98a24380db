use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::strategy::aos_priority_strategy::AosPriorityStrategy;
use crate::domain::strategy::max_elevation_strategy::MaxElevationStrategy;
use crate::domain::strategy::strategy_trait::SelectionStrategy;
use crate::error::ConversionError;

/// The built-in selection strategies, addressable by their configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// `"aos"`: earliest acquisition of signal wins.
    Aos,
    /// `"max-elevation"`: highest peak elevation wins.
    #[default]
    MaxElevation,
}

impl StrategyType {
    // Factory method to create the concrete strategy
    pub fn get_instance(&self) -> Box<dyn SelectionStrategy> {
        match self {
            StrategyType::Aos => Box::new(AosPriorityStrategy),
            StrategyType::MaxElevation => Box::new(MaxElevationStrategy),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyType::Aos => "aos",
            StrategyType::MaxElevation => "max-elevation",
        }
    }
}

impl FromStr for StrategyType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aos" => Ok(StrategyType::Aos),
            "max-elevation" => Ok(StrategyType::MaxElevation),
            _ => Err(ConversionError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StrategyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StrategyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("aos".parse::<StrategyType>().unwrap(), StrategyType::Aos);
        assert_eq!("max-elevation".parse::<StrategyType>().unwrap(), StrategyType::MaxElevation);

        let err = "max_elevation".parse::<StrategyType>().unwrap_err();
        assert!(matches!(err, ConversionError::UnknownStrategy(ref name) if name == "max_elevation"));
    }

    #[test]
    fn test_instance_names_match_config_names() {
        for typ in [StrategyType::Aos, StrategyType::MaxElevation] {
            assert_eq!(typ.get_instance().name(), typ.to_string());
        }
    }

    #[test]
    fn test_serde_uses_config_names() {
        let typ: StrategyType = serde_json::from_str("\"aos\"").unwrap();
        assert_eq!(typ, StrategyType::Aos);
        assert_eq!(serde_json::to_string(&StrategyType::MaxElevation).unwrap(), "\"max-elevation\"");
        assert!(serde_json::from_str::<StrategyType>("\"random\"").is_err());
    }
}
