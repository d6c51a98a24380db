use crate::api::pass_dto::PassCatalogDto;
use crate::domain::candidate::PredictedPass;
use crate::domain::utils::id::SatelliteId;
use crate::error::ConversionError;

/// Predicted passes in the order the predictor delivered them.
#[derive(Debug, Clone, Default)]
pub struct PassCatalog {
    pub passes: Vec<(SatelliteId, PredictedPass)>,
}

impl PassCatalog {
    pub fn from_dto(dto: PassCatalogDto) -> Result<Self, ConversionError> {
        let mut passes = Vec::with_capacity(dto.passes.len());

        for pass_dto in dto.passes {
            if !pass_dto.max_elevation.is_finite() {
                return Err(ConversionError::InvalidPass {
                    name: pass_dto.satellite,
                    reason: format!("max elevation must be a finite number, got {}", pass_dto.max_elevation),
                });
            }

            let pass = match pass_dto.max_elevation_at {
                Some(max_elevation_at) => PredictedPass::new(pass_dto.aos, pass_dto.los, pass_dto.max_elevation, max_elevation_at),
                None => PredictedPass::with_peak_fraction(pass_dto.aos, pass_dto.los, pass_dto.max_elevation, 0.5),
            };

            if !pass.range().contains(pass.max_elevation_at) {
                log::warn!(
                    "Pass of '{}' peaks at {} outside of its window {}.",
                    pass_dto.satellite,
                    pass.max_elevation_at.to_rfc3339(),
                    pass.range()
                );
            }

            passes.push((SatelliteId::new(pass_dto.satellite), pass));
        }

        Ok(PassCatalog { passes })
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Keeps only the passes for which `keep` returns `true`, preserving their order.
    pub fn retain_satellites(&mut self, mut keep: impl FnMut(&SatelliteId) -> bool) {
        self.passes.retain(|(satellite, _)| keep(satellite));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parser::parse_json_str;

    const CATALOG: &str = r#"{
        "passes": [
            { "satellite": "NOAA 19", "aos": "2020-01-01T00:00:00Z", "los": "2020-01-01T00:10:00Z", "maxElevation": 45.0 },
            { "satellite": "NOAA 18", "aos": "2020-01-01T00:05:00Z", "los": "2020-01-01T00:15:00Z", "maxElevation": 80.5,
              "maxElevationAt": "2020-01-01T00:07:30Z" }
        ]
    }"#;

    #[test]
    fn test_from_dto_keeps_order_and_defaults_peak_to_midpoint() {
        let dto: PassCatalogDto = parse_json_str(CATALOG).unwrap();
        let catalog = PassCatalog::from_dto(dto).unwrap();

        assert_eq!(catalog.len(), 2);
        let (first_id, first) = &catalog.passes[0];
        assert_eq!(first_id.as_str(), "NOAA 19");
        assert_eq!(first.max_elevation_at.to_rfc3339(), "2020-01-01T00:05:00+00:00");

        let (second_id, second) = &catalog.passes[1];
        assert_eq!(second_id.as_str(), "NOAA 18");
        assert_eq!(second.max_elevation_deg, 80.5);
        assert_eq!(second.max_elevation_at.to_rfc3339(), "2020-01-01T00:07:30+00:00");
    }

    #[test]
    fn test_retain_satellites() {
        let dto: PassCatalogDto = parse_json_str(CATALOG).unwrap();
        let mut catalog = PassCatalog::from_dto(dto).unwrap();

        catalog.retain_satellites(|id| id.as_str() != "NOAA 19");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.passes[0].0.as_str(), "NOAA 18");
    }

    #[test]
    fn test_non_finite_elevation_is_rejected() {
        let mut dto: PassCatalogDto = parse_json_str(CATALOG).unwrap();
        dto.passes[1].max_elevation = f64::NAN;

        let err = PassCatalog::from_dto(dto).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidPass { ref name, .. } if name == "NOAA 18"));
    }
}
