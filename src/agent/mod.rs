//! Agent - rule-driven tool dispatch
//!
//! The agent owns a tool registry and an ordered rule table, both fixed at
//! construction. `act` evaluates the rules top to bottom, invokes the first
//! matching tool, and always returns an [`Outcome`]: tool failures are
//! caught at this boundary and converted, never propagated to the caller.

mod rules;

pub use rules::{ARITHMETIC_OPERATORS, Predicate, Rule, default_rules};

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::config::AgentConfig;
use crate::error::{GoferError, Result};
use crate::tools::{CalculatorTool, ClockTool, RandomTool, ToolOutput, ToolRegistry, WeatherTool};

/// What the agent replies when no rule matches
pub const UNHANDLED_REPLY: &str = "I don't know how to do that yet.";

/// Result of dispatching one task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Textual tool result
    Text(String),
    /// Integer tool result (random)
    Integer(i64),
    /// Numeric tool result (calculator)
    Number(f64),
    /// No rule matched; a defined fallback, not an error
    Unhandled,
    /// The expression routed to the calculator could not be evaluated
    CalculationFailed { expression: String, reason: String },
    /// A tool invocation failed unexpectedly
    ToolFailed { tool: String, message: String },
}

impl Outcome {
    /// Whether this outcome is a successful tool result
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Text(_) | Outcome::Integer(_) | Outcome::Number(_))
    }
}

impl From<ToolOutput> for Outcome {
    fn from(output: ToolOutput) -> Self {
        match output {
            ToolOutput::Text(s) => Outcome::Text(s),
            ToolOutput::Integer(n) => Outcome::Integer(n),
            ToolOutput::Number(n) => Outcome::Number(n),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Text(s) => write!(f, "{}", s),
            Outcome::Integer(n) => write!(f, "{}", n),
            Outcome::Number(n) => write!(f, "{}", crate::tools::format_number(*n)),
            Outcome::Unhandled => write!(f, "{}", UNHANDLED_REPLY),
            Outcome::CalculationFailed { expression, reason } => {
                write!(f, "Error in calculation '{}': {}", expression, reason)
            }
            Outcome::ToolFailed { tool, message } => {
                write!(f, "Tool '{}' failed: {}", tool, message)
            }
        }
    }
}

/// The dispatch agent: registry plus ordered rules
pub struct Agent {
    registry: ToolRegistry,
    rules: Vec<Rule>,
}

impl Agent {
    /// Agent with the four built-in tools and the default rule table
    pub fn new() -> Result<Self> {
        Self::from_config(&AgentConfig::default())
    }

    /// Agent with the built-in tools configured from `config`.
    ///
    /// Fails with `Config` if the random range is empty; a bad range must
    /// stop startup, not panic inside a later draw.
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        if config.random_min > config.random_max {
            return Err(GoferError::Config(format!(
                "random_min {} exceeds random_max {}",
                config.random_min, config.random_max
            )));
        }

        let mut registry = ToolRegistry::new();
        registry.register(Box::new(WeatherTool::with_location(&config.weather_location)))?;
        registry.register(Box::new(CalculatorTool))?;
        registry.register(Box::new(
            RandomTool::new().with_range(config.random_min, config.random_max),
        ))?;
        registry.register(Box::new(ClockTool::new()))?;

        Self::with_parts(registry, default_rules())
    }

    /// Agent from an explicit registry and rule table.
    ///
    /// Fails with `UnknownTool` if any rule names a tool the registry does
    /// not hold; a misconfigured rule table must stop startup, not surface
    /// per call.
    pub fn with_parts(registry: ToolRegistry, rules: Vec<Rule>) -> Result<Self> {
        for rule in &rules {
            if !registry.contains(rule.tool) {
                return Err(GoferError::UnknownTool(rule.tool.to_string()));
            }
        }
        Ok(Self { registry, rules })
    }

    /// Dispatch one task: first matching rule wins, no match falls back.
    ///
    /// Never panics and never returns an error; tool failures become
    /// `CalculationFailed` or `ToolFailed` outcomes.
    pub fn act(&self, task: &str) -> Outcome {
        for rule in &self.rules {
            if !rule.predicate.matches(task) {
                continue;
            }

            debug!("task {:?} matched rule for tool '{}'", task, rule.tool);

            let tool = match self.registry.get(rule.tool) {
                Ok(tool) => tool,
                // Unreachable if construction validated the rules; stay total anyway
                Err(e) => {
                    warn!("rule names unregistered tool '{}': {}", rule.tool, e);
                    return Outcome::ToolFailed {
                        tool: rule.tool.to_string(),
                        message: e.to_string(),
                    };
                }
            };

            let args = if rule.forward_task { Some(task) } else { None };
            return match tool.invoke(args) {
                Ok(output) => Outcome::from(output),
                Err(GoferError::Calculation { expression, reason }) => {
                    warn!("calculation failed for {:?}: {}", expression, reason);
                    Outcome::CalculationFailed { expression, reason }
                }
                Err(e) => {
                    warn!("tool '{}' failed: {}", rule.tool, e);
                    Outcome::ToolFailed {
                        tool: rule.tool.to_string(),
                        message: e.to_string(),
                    }
                }
            };
        }

        debug!("no rule matched task {:?}", task);
        Outcome::Unhandled
    }

    /// The tool registry (read-only)
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// The rule table, in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> Agent {
        Agent::new().unwrap()
    }

    #[test]
    fn test_act_weather() {
        let outcome = agent().act("What's the weather in Yerevan?");
        assert_eq!(
            outcome,
            Outcome::Text("The weather in Yerevan is sunny and 28°C.".to_string())
        );
    }

    #[test]
    fn test_act_weather_case_insensitive() {
        let outcome = agent().act("WEATHER report please");
        assert!(matches!(outcome, Outcome::Text(s) if s.contains("Yerevan")));
    }

    #[test]
    fn test_act_weather_beats_calculator() {
        // Rule priority: a task matching both resolves to weather
        let outcome = agent().act("weather + 5");
        assert!(matches!(outcome, Outcome::Text(s) if s.contains("sunny")));
    }

    #[test]
    fn test_act_calculator() {
        let outcome = agent().act("2 + 2 * 3");
        assert_eq!(outcome, Outcome::Number(8.0));
        assert_eq!(outcome.to_string(), "8");
    }

    #[test]
    fn test_act_calculator_receives_full_task() {
        // The raw task is the expression; prose around operators fails cleanly
        match agent().act("What is 2+2?") {
            Outcome::CalculationFailed { expression, .. } => {
                assert_eq!(expression, "What is 2+2?");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_act_division_by_zero_is_contained() {
        match agent().act("1/0") {
            Outcome::CalculationFailed { reason, .. } => {
                assert_eq!(reason, "division by zero");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_act_random() {
        match agent().act("Give me a random number") {
            Outcome::Integer(n) => assert!((1..=100).contains(&n)),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_act_time() {
        match agent().act("What time is it?") {
            Outcome::Text(s) => assert!(s.starts_with("Current time: ")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_act_unhandled() {
        let outcome = agent().act("Tell me a joke");
        assert_eq!(outcome, Outcome::Unhandled);
        assert_eq!(outcome.to_string(), UNHANDLED_REPLY);
    }

    #[test]
    fn test_act_random_beats_time() {
        let outcome = agent().act("random time");
        assert!(matches!(outcome, Outcome::Integer(_)));
    }

    #[test]
    fn test_construction_rejects_unrouted_tool() {
        let registry = ToolRegistry::new();
        let result = Agent::with_parts(registry, default_rules());
        assert!(matches!(result, Err(GoferError::UnknownTool(_))));
    }

    #[test]
    fn test_from_config_rejects_inverted_random_range() {
        let config = AgentConfig {
            random_min: 10,
            random_max: 5,
            ..AgentConfig::default()
        };
        let result = Agent::from_config(&config);
        match result {
            Err(GoferError::Config(msg)) => {
                assert!(msg.contains("random_min 10"));
                assert!(msg.contains("random_max 5"));
            }
            _ => panic!("inverted range must fail at construction"),
        }
    }

    #[test]
    fn test_from_config_accepts_degenerate_random_range() {
        let config = AgentConfig {
            random_min: 7,
            random_max: 7,
            ..AgentConfig::default()
        };
        let agent = Agent::from_config(&config).unwrap();
        assert_eq!(agent.act("random"), Outcome::Integer(7));
    }

    #[test]
    fn test_from_config_weather_location() {
        let config = AgentConfig {
            weather_location: "Oslo".to_string(),
            ..AgentConfig::default()
        };
        let agent = Agent::from_config(&config).unwrap();
        let outcome = agent.act("weather?");
        assert!(matches!(outcome, Outcome::Text(s) if s.contains("Oslo")));
    }

    #[test]
    fn test_outcome_is_success() {
        assert!(Outcome::Text("x".to_string()).is_success());
        assert!(Outcome::Integer(1).is_success());
        assert!(Outcome::Number(1.5).is_success());
        assert!(!Outcome::Unhandled.is_success());
        assert!(
            !Outcome::ToolFailed {
                tool: "t".to_string(),
                message: "m".to_string()
            }
            .is_success()
        );
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_value(Outcome::Unhandled).unwrap();
        assert_eq!(json["kind"], "unhandled");

        let json = serde_json::to_value(Outcome::Number(8.0)).unwrap();
        assert_eq!(json["kind"], "number");
        assert_eq!(json["value"], 8.0);
    }

    #[test]
    fn test_registry_exposes_four_tools() {
        let agent = agent();
        assert_eq!(
            agent.registry().names(),
            vec!["calculator", "clock", "random", "weather"]
        );
    }
}
