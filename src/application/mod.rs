//! Application layer - Use cases and orchestration

pub mod generate_reports;
pub mod load_plan;

pub use generate_reports::GenerateReportsService;
pub use load_plan::PlanLoader;
