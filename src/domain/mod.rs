//! Domain layer - Training plan model, field validation and report rendering

pub mod document;
pub mod fields;
pub mod plan;
pub mod report;
pub mod session;
pub mod week;

pub use document::DocumentNode;
pub use fields::{EnergySystem, EnergySystems, LoadLevel, LoadTags, Token, TokenList};
pub use plan::TrainingPlan;
pub use report::{ReportKind, ReportRenderer};
pub use session::SessionRecord;
pub use week::Week;
