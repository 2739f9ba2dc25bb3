//! weather tool - fixed-condition weather report
//!
//! No real data source behind it; always the same template. The router
//! never extracts a location from the task text, so dispatch uses the
//! configured default location (a stated limitation, not a bug).

use crate::error::Result;

use super::{Tool, ToolOutput};

/// Location used when none is configured or passed
pub const DEFAULT_LOCATION: &str = "Yerevan";

pub struct WeatherTool {
    location: String,
}

impl WeatherTool {
    /// Weather tool reporting for the default location
    pub fn new() -> Self {
        Self::with_location(DEFAULT_LOCATION)
    }

    /// Weather tool reporting for a specific default location
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for WeatherTool {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn description(&self) -> &'static str {
        "Report the weather for the configured location"
    }

    fn invoke(&self, args: Option<&str>) -> Result<ToolOutput> {
        let location = args.unwrap_or(&self.location);
        Ok(ToolOutput::Text(format!(
            "The weather in {} is sunny and 28°C.",
            location
        )))
    }
}
