//! Boolean query parser — splits free text into include / exclude / any term sets.
//!
//! Tolerant best-effort classifier, not a grammar: no parentheses, no precedence,
//! never fails. An operator applies to every following term until the next
//! operator, so `NOT a b` excludes both `a` and `b`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_uppercase().as_str() {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "NOT" => Some(Operator::Not),
            _ => None,
        }
    }
}

/// Term sets derived from a query string. Recomputed per query, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Every term must match.
    pub include: Vec<String>,
    /// No term may match.
    pub exclude: Vec<String>,
    /// At least one term must match, when non-empty.
    pub any: Vec<String>,
}

impl ParsedQuery {
    /// Case-insensitive check of `text` against all three term sets.
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        let contains = |term: &String| lower.contains(&term.to_lowercase());

        self.include.iter().all(contains)
            && (self.any.is_empty() || self.any.iter().any(contains))
            && !self.exclude.iter().any(contains)
    }
}

/// Parses `query` into include / exclude / any term sets.
pub fn parse_boolean_query(query: &str) -> ParsedQuery {
    let (_, parsed) = query.split_whitespace().fold(
        (None, ParsedQuery::default()),
        |(current, mut parsed): (Option<Operator>, ParsedQuery), token| {
            if let Some(op) = Operator::from_token(token) {
                return (Some(op), parsed);
            }
            let bucket = match current {
                Some(Operator::Not) => &mut parsed.exclude,
                Some(Operator::Or) => &mut parsed.any,
                Some(Operator::And) | None => &mut parsed.include,
            };
            bucket.push(token.to_string());
            (current, parsed)
        },
    );
    parsed
}
