//! Single-receiver pass planner.
//!
//! Given predicted satellite passes over a ground station, picks a time-disjoint subset to record
//! with one receiver. Conflicts are settled by a [`SelectionStrategy`](domain::strategy::SelectionStrategy):
//! the higher-priority pass keeps its window and the loser is trimmed to a remainder or dropped.

use std::path::Path;

use crate::api::pass_dto::PassCatalogDto;
use crate::domain::candidate::Allocation;
use crate::domain::pass_catalog::PassCatalog;
use crate::domain::plan::{PlannedJob, build_plan};
use crate::domain::planner_config::PlannerConfig;
use crate::domain::utils::id::SatelliteId;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Outcome of one planning run.
#[derive(Debug, Clone)]
pub struct PlanningOutcome {
    /// Allocations in the order the scheduler accepted them.
    pub allocations: Vec<Allocation<SatelliteId>>,
    /// The same allocations as jobs, sorted by start.
    pub jobs: Vec<PlannedJob>,
}

/// Schedules an already loaded catalog: drops disabled satellites, runs the configured strategy
/// and builds the job list.
pub fn plan_catalog(mut catalog: PassCatalog, config: &PlannerConfig) -> Result<PlanningOutcome> {
    let scheduler = config.build_scheduler()?;

    let before = catalog.len();
    catalog.retain_satellites(|satellite| config.is_enabled(satellite));
    if catalog.len() != before {
        log::info!("Skipped {} passes of disabled satellites.", before - catalog.len());
    }

    let allocations = scheduler.schedule_passes(catalog.passes)?;
    let jobs = build_plan(&allocations, &config.receiver_command);

    Ok(PlanningOutcome { allocations, jobs })
}

/// Loads the pass catalog from `catalog_path` and plans it with `config`.
pub fn plan_from_files(catalog_path: impl AsRef<Path>, config: &PlannerConfig) -> Result<PlanningOutcome> {
    let catalog_dto: PassCatalogDto = parse_json_file(catalog_path)?;
    log::info!("Pass catalog parsed successfully ({} passes).", catalog_dto.passes.len());

    let catalog = PassCatalog::from_dto(catalog_dto)?;

    plan_catalog(catalog, config)
}

/// Reads the planner configuration, falling back to the defaults when `config_path` is `None`.
pub fn load_config(config_path: Option<&Path>) -> Result<PlannerConfig> {
    match config_path {
        Some(path) => Ok(PlannerConfig::from_dto(parse_json_file(path)?)?),
        None => Ok(PlannerConfig::default()),
    }
}
