//! Constraint expressions: comma-separated `<operator><version>` clauses.
//!
//! An expression like `>=1.0,<2.0` is the conjunction of its clauses. The
//! empty expression is valid and matches every version.

use std::sync::OnceLock;

use regex::Regex;

use lingo_util::errors::LingoError;

use crate::version::VersionTuple;

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

/// One `<operator><version>` comparison, e.g. `>=1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    op: Op,
    version: VersionTuple,
}

impl Clause {
    fn parse(text: &str) -> Result<Self, LingoError> {
        if !clause_pattern().is_match(text) {
            return Err(LingoError::Constraint {
                clause: text.to_string(),
            });
        }
        let (op, rest) = split_operator(text).ok_or_else(|| LingoError::Constraint {
            clause: text.to_string(),
        })?;
        let version = VersionTuple::parse(rest).ok_or_else(|| LingoError::Constraint {
            clause: text.to_string(),
        })?;
        Ok(Self { op, version })
    }

    fn satisfied_by(&self, version: &VersionTuple) -> bool {
        match self.op {
            Op::Lt => *version < self.version,
            Op::Le => *version <= self.version,
            Op::Gt => *version > self.version,
            Op::Ge => *version >= self.version,
            Op::Eq => *version == self.version,
        }
    }
}

/// A parsed constraint expression: the conjunction of zero or more clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    clauses: Vec<Clause>,
}

impl Constraint {
    /// Parse a comma-separated constraint expression.
    ///
    /// Whitespace around clauses is ignored and empty segments are dropped,
    /// so `""` and `" , "` both parse to the empty constraint. Fails on the
    /// first clause that does not fit the grammar, carrying the offending
    /// clause text.
    pub fn parse(expression: &str) -> Result<Self, LingoError> {
        let mut clauses = Vec::new();
        for segment in expression.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            clauses.push(Clause::parse(segment)?);
        }
        Ok(Self { clauses })
    }

    /// True when no clauses restrict the match.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Check a candidate version against every clause (logical AND).
    ///
    /// `None` stands for a version with no tuple form; it satisfies only
    /// the empty constraint.
    pub fn matches(&self, version: Option<&VersionTuple>) -> bool {
        if self.clauses.is_empty() {
            return true;
        }
        let Some(version) = version else {
            return false;
        };
        self.clauses.iter().all(|clause| clause.satisfied_by(version))
    }
}

/// Check a raw version string against a constraint expression.
///
/// A version with no tuple form fails every non-empty constraint, while a
/// malformed clause is an error.
pub fn version_matches(version: &str, constraint: &str) -> miette::Result<bool> {
    let constraint = Constraint::parse(constraint)?;
    Ok(constraint.matches(VersionTuple::parse(version).as_ref()))
}

fn clause_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[><=]=?\d+(\.\d+)*$").expect("valid clause pattern"))
}

fn split_operator(clause: &str) -> Option<(Op, &str)> {
    let prefixes = [
        (">=", Op::Ge),
        ("<=", Op::Le),
        ("==", Op::Eq),
        (">", Op::Gt),
        ("<", Op::Lt),
        ("=", Op::Eq),
    ];
    for (prefix, op) in prefixes {
        if let Some(rest) = clause.strip_prefix(prefix) {
            return Some((op, rest));
        }
    }
    None
}
