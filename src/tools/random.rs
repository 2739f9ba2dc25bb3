//! random tool - uniform integer draw
//!
//! Contract: a uniform draw from [1, 100] inclusive. Not reproducible; no
//! seeding is exposed. The source itself is injectable for tests.

use crate::error::Result;
use crate::ports::{RandomSource, ThreadRngSource};

use super::{Tool, ToolOutput};

/// Default lower bound of the draw
pub const DEFAULT_MIN: i64 = 1;
/// Default upper bound of the draw (inclusive)
pub const DEFAULT_MAX: i64 = 100;

pub struct RandomTool {
    source: Box<dyn RandomSource>,
    min: i64,
    max: i64,
}

impl RandomTool {
    /// Random tool drawing from [1, 100] via the thread RNG
    pub fn new() -> Self {
        Self {
            source: Box::new(ThreadRngSource),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }

    /// Replace the random source (tests inject a deterministic one)
    pub fn with_source(mut self, source: Box<dyn RandomSource>) -> Self {
        self.source = source;
        self
    }

    /// Override the draw range
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

impl Default for RandomTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RandomTool {
    fn name(&self) -> &'static str {
        "random"
    }

    fn description(&self) -> &'static str {
        "Return a random number between 1 and 100"
    }

    fn invoke(&self, _args: Option<&str>) -> Result<ToolOutput> {
        Ok(ToolOutput::Integer(self.source.roll(self.min, self.max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StaticSource;

    #[test]
    fn test_random_in_default_range() {
        let tool = RandomTool::new();
        for _ in 0..1000 {
            match tool.invoke(None).unwrap() {
                ToolOutput::Integer(n) => {
                    assert!((1..=100).contains(&n), "out of range: {}", n)
                }
                other => panic!("unexpected output: {:?}", other),
            }
        }
    }

    #[test]
    fn test_random_with_injected_source() {
        let tool = RandomTool::new().with_source(Box::new(StaticSource(37)));
        assert_eq!(tool.invoke(None).unwrap(), ToolOutput::Integer(37));
    }

    #[test]
    fn test_random_with_custom_range() {
        let tool = RandomTool::new().with_range(5, 6);
        for _ in 0..100 {
            match tool.invoke(None).unwrap() {
                ToolOutput::Integer(n) => assert!((5..=6).contains(&n)),
                other => panic!("unexpected output: {:?}", other),
            }
        }
    }

    #[test]
    fn test_random_ignores_arguments() {
        let tool = RandomTool::new().with_source(Box::new(StaticSource(1)));
        assert_eq!(tool.invoke(Some("ignored")).unwrap(), ToolOutput::Integer(1));
    }
}
