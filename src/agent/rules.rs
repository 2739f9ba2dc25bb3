//! Routing rules - ordered keyword predicates
//!
//! Routing is an explicit rule table rather than a cascading conditional,
//! so priority and coverage are testable on their own. Rules are evaluated
//! top to bottom; first match wins.

/// Operator characters that route a task to the calculator
pub const ARITHMETIC_OPERATORS: &[char] = &['+', '-', '*', '/'];

/// Predicate over the raw task string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// Lowercased task contains the given substring
    ContainsIgnoreCase(&'static str),
    /// Task (original casing) contains any of the given characters
    ContainsAnyChar(&'static [char]),
}

impl Predicate {
    pub fn matches(&self, task: &str) -> bool {
        match self {
            Predicate::ContainsIgnoreCase(needle) => task.to_lowercase().contains(needle),
            Predicate::ContainsAnyChar(chars) => task.contains(*chars),
        }
    }
}

/// One routing rule: if the predicate matches, dispatch to the named tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub predicate: Predicate,
    /// Target tool; must exist in the registry (checked at construction)
    pub tool: &'static str,
    /// Whether the raw task string is forwarded as the tool's argument
    pub forward_task: bool,
}

impl Rule {
    pub const fn new(predicate: Predicate, tool: &'static str, forward_task: bool) -> Self {
        Self {
            predicate,
            tool,
            forward_task,
        }
    }
}

/// The default rule table, in priority order.
///
/// The order (weather, then arithmetic, then random, then time) is kept for
/// compatibility with the original agent. It is an arbitrary policy, not a
/// semantic necessity: "weather +5" routes to weather, not the calculator.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(Predicate::ContainsIgnoreCase("weather"), "weather", false),
        Rule::new(Predicate::ContainsAnyChar(ARITHMETIC_OPERATORS), "calculator", true),
        Rule::new(Predicate::ContainsIgnoreCase("random"), "random", false),
        Rule::new(Predicate::ContainsIgnoreCase("time"), "clock", false),
    ]
}
