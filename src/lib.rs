//! trainplan - Training plan reports
//!
//! Reads an XML document describing a multi-week endurance training plan,
//! validates every session field, and renders a weekly summary, a detailed
//! text log and an HTML report.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::PlanError;
