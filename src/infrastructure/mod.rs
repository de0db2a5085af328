//! Infrastructure layer - XML input, configuration and report files

pub mod config;
pub mod report_files;
pub mod xml;

pub use config::{Config, ConfigOverrides};
pub use report_files::{RenderedReport, ReportFiles};
pub use xml::XmlElement;
