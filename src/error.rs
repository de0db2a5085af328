//! Error types for trainplan

use thiserror::Error;

/// Main error type for trainplan
#[derive(Debug, Error)]
pub enum PlanError {
    /// A required element is missing or has no text
    #[error("Structural error: {0}")]
    Structural(String),

    /// Text is present but does not have the expected shape
    #[error("Format error: {0}")]
    Format(String),

    /// A parsed value lies outside its allowed domain or set
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl PlanError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PlanError::Structural(_) => 2,
            PlanError::Format(_) => 3,
            PlanError::Validation(_) => 4,
            PlanError::Xml(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PlanError::Structural(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Every <record> needs non-empty <date> and <title> elements\n\
                    • The root needs a <name> and either <weeks> or <records>\n\
                    • Every <week> needs a <wload> and a <records> list",
                    self.with_prefix(msg, "Structural error")
                )
            }
            PlanError::Format(msg) => {
                if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MonthName-YYYY\n\
                        Example: <date>05-March-2024</date>",
                        self.with_prefix(msg, "Format error")
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Numeric fields (tired, motivation, atired, distance) must hold plain numbers",
                        self.with_prefix(msg, "Format error")
                    )
                }
            }
            PlanError::Validation(msg) => {
                if msg.contains("energy system") {
                    format!(
                        "{}\n\n\
                        Valid energy systems: Alactic, Lactic, Aerobic (combine with '/')\n\
                        Example: <esystem>Lactic/Aerobic</esystem>",
                        self.with_prefix(msg, "Validation error")
                    )
                } else if msg.contains("load") {
                    format!(
                        "{}\n\n\
                        Valid loads: Low, Medium, High (combine with '/')\n\
                        Example: <load>Low/Medium</load>",
                        self.with_prefix(msg, "Validation error")
                    )
                } else if msg.contains("distance") {
                    format!(
                        "{}\n\n\
                        Distance must be at least 0 and below 100 kilometers",
                        self.with_prefix(msg, "Validation error")
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Tiredness and motivation must be whole numbers from 0 to 10",
                        self.with_prefix(msg, "Validation error")
                    )
                }
            }
            _ => self.to_string(),
        }
    }

    fn with_prefix(&self, msg: &str, prefix: &str) -> String {
        format!("{}: {}", prefix, msg)
    }
}

/// Result type using PlanError
pub type Result<T> = std::result::Result<T, PlanError>;
