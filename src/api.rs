pub mod pass_dto;
pub mod planner_config_dto;
