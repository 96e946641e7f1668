//! Lexer state names and the explicit state stack
use crate::config::compile_time::lexical::MAX_STATE_STACK_DEPTH;
use crate::logging::codes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named lexer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateName {
    Root,
    BlockComment,
    String,
    BracketedIdentifier,
    QuotedIdentifier,
}

impl StateName {
    pub const ALL: [StateName; 5] = [
        StateName::Root,
        StateName::BlockComment,
        StateName::String,
        StateName::BracketedIdentifier,
        StateName::QuotedIdentifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateName::Root => "root",
            StateName::BlockComment => "blockComment",
            StateName::String => "string",
            StateName::BracketedIdentifier => "bracketedIdentifier",
            StateName::QuotedIdentifier => "quotedIdentifier",
        }
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateName {
    type Err = StateStackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| StateStackError::UnknownState(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateStackError {
    #[error("State stack is empty")]
    Empty,

    #[error("State stack must start with root, found '{found}'")]
    MissingRoot { found: StateName },

    #[error("Root state may only appear at the bottom of the stack (index {index})")]
    RootNotAtBottom { index: usize },

    #[error("State stack depth {depth} exceeds limit {max}")]
    TooDeep { depth: usize, max: usize },

    #[error("Unknown lexer state '{0}'")]
    UnknownState(String),
}

impl StateStackError {
    pub fn error_code(&self) -> codes::Code {
        codes::lexical::INVALID_STATE_STACK
    }
}

/// Ordered stack of active lexer states, bottom is always `root`
///
/// Serializes as a plain array of state names so an editor can store the
/// end state of each line and hand it back for the next one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<StateName>", into = "Vec<StateName>")]
pub struct StateStack {
    states: Vec<StateName>,
}

impl StateStack {
    /// The stack every document starts in
    pub fn root() -> Self {
        Self {
            states: vec![StateName::Root],
        }
    }

    /// Restore a stack from previously saved names
    pub fn from_names(names: Vec<StateName>) -> Result<Self, StateStackError> {
        let first = *names.first().ok_or(StateStackError::Empty)?;
        if first != StateName::Root {
            return Err(StateStackError::MissingRoot { found: first });
        }

        if let Some(index) = names
            .iter()
            .skip(1)
            .position(|name| *name == StateName::Root)
        {
            return Err(StateStackError::RootNotAtBottom { index: index + 1 });
        }

        if names.len() > MAX_STATE_STACK_DEPTH {
            return Err(StateStackError::TooDeep {
                depth: names.len(),
                max: MAX_STATE_STACK_DEPTH,
            });
        }

        Ok(Self { states: names })
    }

    pub fn top(&self) -> StateName {
        // The constructor guarantees a root entry
        self.states.last().copied().unwrap_or(StateName::Root)
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn names(&self) -> &[StateName] {
        &self.states
    }

    pub fn is_root(&self) -> bool {
        self.states.len() == 1
    }

    /// True while a comment, string or quoted identifier is still open
    pub fn is_unterminated(&self) -> bool {
        !self.is_root()
    }

    /// Push a state; refuses (returning false) once the depth limit is reached
    pub fn push(&mut self, state: StateName) -> bool {
        if self.states.len() >= MAX_STATE_STACK_DEPTH {
            return false;
        }
        self.states.push(state);
        true
    }

    /// Pop the top state; root is never popped
    pub fn pop(&mut self) -> Option<StateName> {
        if self.is_root() {
            None
        } else {
            self.states.pop()
        }
    }

    /// The outermost non-root state, if any
    pub fn outermost_construct(&self) -> Option<StateName> {
        self.states.get(1).copied()
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::root()
    }
}

impl TryFrom<Vec<StateName>> for StateStack {
    type Error = StateStackError;

    fn try_from(names: Vec<StateName>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<StateStack> for Vec<StateName> {
    fn from(stack: StateStack) -> Self {
        stack.states
    }
}

impl fmt::Display for StateStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.states.iter().map(StateName::as_str).collect();
        f.write_str(&names.join("/"))
    }
}

impl FromStr for StateStack {
    type Err = StateStackError;

    /// Parses the `root/string` form produced by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names = s
            .split('/')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(StateName::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_names(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_root_is_never_popped() {
        let mut stack = StateStack::root();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), StateName::Root);
    }

    #[test]
    fn test_push_and_pop() {
        let mut stack = StateStack::root();
        assert!(stack.push(StateName::String));
        assert!(stack.is_unterminated());
        assert_eq!(stack.top(), StateName::String);
        assert_eq!(stack.outermost_construct(), Some(StateName::String));

        assert_eq!(stack.pop(), Some(StateName::String));
        assert!(stack.is_root());
    }

    #[test]
    fn test_push_stops_at_depth_limit() {
        let mut stack = StateStack::root();
        for _ in 1..MAX_STATE_STACK_DEPTH {
            assert!(stack.push(StateName::BlockComment));
        }
        assert!(!stack.push(StateName::BlockComment));
        assert_eq!(stack.depth(), MAX_STATE_STACK_DEPTH);
    }

    #[test]
    fn test_restore_validation() {
        assert_matches!(StateStack::from_names(vec![]), Err(StateStackError::Empty));
        assert_matches!(
            StateStack::from_names(vec![StateName::String]),
            Err(StateStackError::MissingRoot {
                found: StateName::String
            })
        );
        assert_matches!(
            StateStack::from_names(vec![StateName::Root, StateName::Root]),
            Err(StateStackError::RootNotAtBottom { index: 1 })
        );
        assert_matches!(
            StateStack::from_names(vec![StateName::Root; 1]
                .into_iter()
                .chain(std::iter::repeat(StateName::String).take(MAX_STATE_STACK_DEPTH))
                .collect()),
            Err(StateStackError::TooDeep { .. })
        );
    }

    #[test]
    fn test_serde_round_trip_and_validation() {
        let mut stack = StateStack::root();
        stack.push(StateName::QuotedIdentifier);

        let json = serde_json::to_string(&stack).unwrap();
        assert_eq!(json, "[\"root\",\"quotedIdentifier\"]");

        let back: StateStack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stack);

        assert!(serde_json::from_str::<StateStack>("[\"string\"]").is_err());
        assert!(serde_json::from_str::<StateStack>("[\"root\",\"heredoc\"]").is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let stack: StateStack = "root/blockComment".parse().unwrap();
        assert_eq!(stack.top(), StateName::BlockComment);
        assert_eq!(stack.to_string(), "root/blockComment");

        assert_matches!(
            "root/nope".parse::<StateStack>(),
            Err(StateStackError::UnknownState(name)) if name == "nope"
        );
    }
}
