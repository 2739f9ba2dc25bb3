//! clock tool - current wall-clock time
//!
//! Formats the injected clock's time of day as zero-padded 24-hour
//! `HH:MM:SS`.

use crate::error::Result;
use crate::ports::{Clock, SystemClock};

use super::{Tool, ToolOutput};

pub struct ClockTool {
    clock: Box<dyn Clock>,
}

impl ClockTool {
    /// Clock tool reading the host system clock
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock (tests inject a fixed one)
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for ClockTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ClockTool {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn description(&self) -> &'static str {
        "Report the current time as HH:MM:SS"
    }

    fn invoke(&self, _args: Option<&str>) -> Result<ToolOutput> {
        let now = self.clock.now();
        Ok(ToolOutput::Text(format!(
            "Current time: {}",
            now.format("%H:%M:%S")
        )))
    }
}
