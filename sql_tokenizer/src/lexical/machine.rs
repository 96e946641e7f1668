//! Table-driven state machine
//!
//! One step evaluates the rules of the state on top of the stack, applies the
//! first match and advances by its length. When nothing matches, exactly one
//! character is consumed as `Unrecognized`, so every step makes progress and a
//! pass is linear in the input length.
use super::state::StateStack;
use crate::grammar::rules::{body_category, Action, RuleError, RuleSet};
use crate::grammar::{ClassificationTables, Vocabulary};
use crate::tokens::TokenCategory;
use std::sync::{Arc, OnceLock};

/// A quoted construct (comment, string, quoted identifier) that raw tokens
/// belong to while the stack is above `root`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Construct {
    pub id: usize,
    /// Body category of the construct's outermost state
    pub category: TokenCategory,
}

/// A rule-level token, addressed by byte range into the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub category: TokenCategory,
    pub start: usize,
    pub end: usize,
    pub construct: Option<Construct>,
    /// The matching rule asked for a push the depth limit refused
    pub push_refused: bool,
}

impl RawToken {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of running the machine over one input
#[derive(Debug, Clone)]
pub struct MachineRun {
    pub tokens: Vec<RawToken>,
    pub end_state: StateStack,
    pub max_depth: usize,
}

/// Classification tables plus compiled rules; read-only once built and
/// shared between passes
#[derive(Debug, Clone)]
pub struct StateMachine {
    tables: ClassificationTables,
    rules: RuleSet,
}

static STANDARD_MACHINE: OnceLock<Result<Arc<StateMachine>, RuleError>> = OnceLock::new();

impl StateMachine {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, RuleError> {
        Ok(Self::with_rules(vocabulary, RuleSet::tsql()?))
    }

    pub fn with_rules(vocabulary: &Vocabulary, rules: RuleSet) -> Self {
        Self {
            tables: ClassificationTables::new(vocabulary),
            rules,
        }
    }

    /// Standard T-SQL machine, built on first use
    pub fn standard() -> Result<Arc<StateMachine>, RuleError> {
        STANDARD_MACHINE
            .get_or_init(|| StateMachine::new(&Vocabulary::standard()).map(Arc::new))
            .clone()
    }

    pub fn tables(&self) -> &ClassificationTables {
        &self.tables
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run from `start_state` to the end of `input`
    pub fn run(&self, input: &str, start_state: &StateStack) -> MachineRun {
        let mut stack = start_state.clone();
        let mut tokens = Vec::new();
        let mut max_depth = stack.depth();
        let mut next_id = 0;
        let mut current = None;

        // A continuation pass starts inside the construct left open by the
        // previous input
        if let Some(state) = stack.outermost_construct() {
            current = Some(Construct {
                id: next_id,
                category: body_category(state),
            });
            next_id += 1;
        }

        let mut pos = 0;
        while pos < input.len() {
            let rest = &input[pos..];
            let depth_before = stack.depth();
            let (category, len, push_refused) = self.step(rest, &mut stack);
            let depth_after = stack.depth();

            if depth_before == 1 && depth_after > 1 {
                current = stack.outermost_construct().map(|state| Construct {
                    id: next_id,
                    category: body_category(state),
                });
                next_id += 1;
            }

            tokens.push(RawToken {
                category,
                start: pos,
                end: pos + len,
                construct: current,
                push_refused,
            });

            if depth_after == 1 {
                current = None;
            }

            max_depth = max_depth.max(depth_after);
            pos += len;
        }

        MachineRun {
            tokens,
            end_state: stack,
            max_depth,
        }
    }

    /// Apply one rule (or the fallback) to the front of `rest`; returns the
    /// emitted category, the consumed length and whether a push was refused
    fn step(&self, rest: &str, stack: &mut StateStack) -> (TokenCategory, usize, bool) {
        let state = stack.top();

        let Some((rule, len)) = self.rules.first_match(state, rest) else {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            return (TokenCategory::Unrecognized, len, false);
        };

        match rule.action {
            Action::Emit(category) => (category, len, false),
            Action::EmitAndPush(category, target) => (category, len, !stack.push(target)),
            Action::Pop => {
                let category = body_category(state);
                stack.pop();
                (category, len, false)
            }
            Action::PopAndEmit(category) => {
                stack.pop();
                (category, len, false)
            }
            Action::Classify(cascade) => {
                let category = self
                    .tables
                    .classify(&rest[..len], cascade)
                    .unwrap_or(TokenCategory::Identifier);
                (category, len, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::state::StateName;
    use crate::tokens::TokenCategory as C;

    fn machine() -> Arc<StateMachine> {
        StateMachine::standard().unwrap()
    }

    fn categories(input: &str) -> Vec<(C, &str)> {
        let run = machine().run(input, &StateStack::root());
        run.tokens
            .iter()
            .map(|t| (t.category, &input[t.start..t.end]))
            .collect()
    }

    #[test]
    fn test_raw_string_fragments() {
        assert_eq!(
            categories("'it''s'"),
            vec![
                (C::String, "'"),
                (C::String, "it"),
                (C::String, "''"),
                (C::String, "s"),
                (C::String, "'"),
            ]
        );
    }

    #[test]
    fn test_raw_bracketed_identifier() {
        assert_eq!(
            categories("[a]]b]"),
            vec![
                (C::IdentifierQuote, "["),
                (C::Identifier, "a"),
                (C::Identifier, "]]"),
                (C::Identifier, "b"),
                (C::IdentifierQuote, "]"),
            ]
        );
    }

    #[test]
    fn test_line_comment_inside_block_comment_is_body() {
        let tokens = categories("/* a -- b */ SELECT");
        assert_eq!(tokens[0], (C::CommentQuote, "/*"));
        assert_eq!(tokens[1], (C::Comment, " a -- b "));
        assert_eq!(tokens[2], (C::CommentQuote, "*/"));
        assert_eq!(tokens[4], (C::Keyword, "SELECT"));
    }

    #[test]
    fn test_construct_tags() {
        let run = machine().run("[a][b] x", &StateStack::root());
        let ids: Vec<Option<usize>> = run
            .tokens
            .iter()
            .map(|t| t.construct.map(|c| c.id))
            .collect();
        assert_eq!(
            ids,
            vec![Some(0), Some(0), Some(0), Some(1), Some(1), Some(1), None, None]
        );
        assert!(run
            .tokens
            .iter()
            .filter_map(|t| t.construct)
            .all(|c| c.category == C::Identifier));
    }

    #[test]
    fn test_unterminated_string_keeps_state() {
        let run = machine().run("'abc", &StateStack::root());
        assert_eq!(run.end_state.top(), StateName::String);
        assert_eq!(run.tokens.len(), 2);
        assert!(run.tokens.iter().all(|t| t.construct.is_some()));
    }

    #[test]
    fn test_continuation_from_open_state() {
        let start: StateStack = "root/string".parse().unwrap();
        let run = machine().run("def' + 1", &start);

        assert!(run.end_state.is_root());
        assert_eq!(run.tokens[0].construct.map(|c| c.category), Some(C::String));
        assert_eq!(run.tokens[1].category, C::String);
        assert_eq!(run.tokens[1].construct, run.tokens[0].construct);
        assert_eq!(run.tokens[2].construct, None);
    }

    #[test]
    fn test_unrecognized_consumes_one_character() {
        let input = "a`é";
        let run = machine().run(input, &StateStack::root());
        let last = run.tokens.last().unwrap();
        assert_eq!(last.category, C::Unrecognized);
        assert_eq!(&input[last.start..last.end], "é");
        assert_eq!(run.tokens[1].category, C::Unrecognized);
    }

    #[test]
    fn test_classification_cascade_defaults_to_identifier() {
        assert_eq!(
            categories("select getdate customer_id $action $5"),
            vec![
                (C::Keyword, "select"),
                (C::Whitespace, " "),
                (C::Predefined, "getdate"),
                (C::Whitespace, " "),
                (C::Identifier, "customer_id"),
                (C::Whitespace, " "),
                (C::Predefined, "$action"),
                (C::Whitespace, " "),
                (C::Number, "$5"),
            ]
        );
    }

    #[test]
    fn test_custom_vocabulary_reuses_rules() {
        let vocabulary = Vocabulary {
            keywords: vec!["MATCH".to_string()],
            ..Default::default()
        };
        let machine = StateMachine::new(&vocabulary).unwrap();
        let run = machine.run("match select", &StateStack::root());

        assert_eq!(run.tokens[0].category, C::Keyword);
        assert_eq!(run.tokens[2].category, C::Identifier);
    }

    #[test]
    fn test_empty_input() {
        let run = machine().run("", &StateStack::root());
        assert!(run.tokens.is_empty());
        assert!(run.end_state.is_root());
        assert_eq!(run.max_depth, 1);
    }
}
