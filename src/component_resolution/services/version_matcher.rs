//! Semantic version range matching.
//!
//! Ranges use the constraint grammar common to vulnerability feeds:
//!
//! - comparisons: `=`, `!=`, `>`, `<`, `>=`, `<=` (also written `=>` / `=<`)
//! - tilde (`~1.2.3`, `~>1.2`) and caret (`^1.2.3`)
//! - wildcards and partial versions: `1.2.x`, `1.*`, `*`, `1.2`
//! - AND: comparators separated by commas or whitespace (`>=1.0, <2.0`, `>= 1.0 < 2.0`)
//! - hyphen ranges: `1.2 - 1.4.5` means `>=1.2, <=1.4.5`
//! - OR: `||` between alternatives
//!
//! A bare version without an operator means exact equality, unlike Cargo
//! where it means caret. A caret only pins the major number, so `^0.2.3`
//! admits `0.9.0`. Comparison is delegated to the `semver` crate, except
//! for bounds that name a prerelease: those compare by precedence and admit
//! prereleases of any `major.minor.patch`.

use crate::shared::error::ProviderError;
use semver::{Version, VersionReq};
use std::cmp::Ordering;

/// Operator spellings, longest first, mapped to the `semver` crate's syntax
const OPERATORS: [(&str, &str); 12] = [
    ("!=", "!="),
    (">=", ">="),
    ("=>", ">="),
    ("<=", "<="),
    ("=<", "<="),
    ("~>", "~"),
    ("==", "="),
    (">", ">"),
    ("<", "<"),
    ("=", "="),
    ("~", "~"),
    ("^", "^"),
];

/// Stateless matcher deciding whether a version falls inside a range.
pub struct VersionMatcher;

impl VersionMatcher {
    /// Returns true if `version` satisfies `range`.
    ///
    /// The range is parsed before the version, so a record with a broken
    /// range is reported as such whatever the query was.
    ///
    /// # Errors
    /// Returns `ProviderError::InvalidVersionRange` if the range cannot be
    /// parsed, and `ProviderError::InvalidVersion` if the version cannot.
    pub fn matches(version: &str, range: &str) -> Result<bool, ProviderError> {
        let constraint = VersionConstraint::parse(range)?;
        let version = parse_version(version)?;
        Ok(constraint.matches(&version))
    }
}

/// A parsed range: a disjunction of conjunctions of clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionConstraint {
    alternatives: Vec<Vec<Clause>>,
}

#[derive(Debug, Clone, PartialEq)]
enum Clause {
    Satisfies(VersionReq),
    Excludes(VersionReq),
    Precise {
        comparison: Comparison,
        bound: Version,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    SameMinor,
    SameMajor,
}

impl Clause {
    fn matches(&self, version: &Version) -> bool {
        match self {
            Clause::Satisfies(req) => req.matches(version),
            Clause::Excludes(req) => !req.matches(version),
            Clause::Precise { comparison, bound } => {
                let ordering = precedence(version, bound);
                match comparison {
                    Comparison::Equal => ordering == Ordering::Equal,
                    Comparison::NotEqual => ordering != Ordering::Equal,
                    Comparison::Greater => ordering == Ordering::Greater,
                    Comparison::GreaterOrEqual => ordering != Ordering::Less,
                    Comparison::Less => ordering == Ordering::Less,
                    Comparison::LessOrEqual => ordering != Ordering::Greater,
                    Comparison::SameMinor => {
                        ordering != Ordering::Less
                            && version.major == bound.major
                            && version.minor == bound.minor
                    }
                    Comparison::SameMajor => {
                        ordering != Ordering::Less && version.major == bound.major
                    }
                }
            }
        }
    }
}

/// Orders two versions ignoring build metadata.
fn precedence(version: &Version, bound: &Version) -> Ordering {
    (version.major, version.minor, version.patch)
        .cmp(&(bound.major, bound.minor, bound.patch))
        .then_with(|| version.pre.cmp(&bound.pre))
}

impl VersionConstraint {
    pub fn parse(range: &str) -> Result<Self, ProviderError> {
        if range.trim().is_empty() {
            return Err(invalid_range(range, "range is empty"));
        }

        let alternatives = range
            .split("||")
            .map(|alternative| parse_conjunction(alternative, range))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { alternatives })
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .any(|clauses| clauses.iter().all(|clause| clause.matches(version)))
    }
}

/// Parses a component version, accepting a `v` prefix and missing
/// minor/patch numbers (`v1.2` is read as `1.2.0`).
pub fn parse_version(input: &str) -> Result<Version, ProviderError> {
    parse_lenient(input).map_err(|e| ProviderError::InvalidVersion {
        version: input.to_string(),
        details: e.to_string(),
    })
}

fn parse_lenient(input: &str) -> Result<Version, semver::Error> {
    let trimmed = input.trim();
    let unprefixed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
    let suffix_start = unprefixed.find(['-', '+']).unwrap_or(unprefixed.len());
    let (core, suffix) = unprefixed.split_at(suffix_start);

    let padded = match core.split('.').count() {
        1 => format!("{}.0.0", core),
        2 => format!("{}.0", core),
        _ => core.to_string(),
    };

    Version::parse(&format!("{}{}", padded, suffix))
}

fn parse_conjunction(alternative: &str, range: &str) -> Result<Vec<Clause>, ProviderError> {
    let tokens = tokenize(alternative, range)?;
    let mut clauses = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index].as_str();
        if token == "-" {
            return Err(invalid_range(range, "hyphen range is missing a lower bound"));
        }

        if tokens.get(index + 1).map(String::as_str) == Some("-") {
            let upper = tokens
                .get(index + 2)
                .ok_or_else(|| invalid_range(range, "hyphen range is missing an upper bound"))?;
            if starts_with_operator(token) || starts_with_operator(upper) {
                return Err(invalid_range(range, "hyphen range bounds cannot carry operators"));
            }
            clauses.push(parse_comparator(&format!(">={}", token), range)?);
            clauses.push(parse_comparator(&format!("<={}", upper), range)?);
            index += 3;
        } else {
            clauses.push(parse_comparator(token, range)?);
            index += 1;
        }
    }

    if clauses.is_empty() {
        return Err(invalid_range(range, "empty alternative"));
    }
    Ok(clauses)
}

/// Splits an alternative on commas and whitespace, gluing a detached
/// operator (`>= 1.0`) to the version that follows it.
fn tokenize(alternative: &str, range: &str) -> Result<Vec<String>, ProviderError> {
    let mut tokens = Vec::new();
    let mut pending_operator: Option<&str> = None;

    for raw in alternative
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if raw != "-" && raw.chars().all(is_operator_char) {
            if pending_operator.is_some() {
                return Err(invalid_range(range, "operator is not followed by a version"));
            }
            pending_operator = Some(raw);
            continue;
        }

        match pending_operator.take() {
            Some(operator) => tokens.push(format!("{}{}", operator, raw)),
            None => tokens.push(raw.to_string()),
        }
    }

    if pending_operator.is_some() {
        return Err(invalid_range(range, "operator is not followed by a version"));
    }
    Ok(tokens)
}

fn parse_comparator(token: &str, range: &str) -> Result<Clause, ProviderError> {
    let (operator, rest) = OPERATORS
        .iter()
        .find_map(|(symbol, canonical)| token.strip_prefix(symbol).map(|rest| (*canonical, rest)))
        .unwrap_or(("", token));

    let bound = normalize_bound(rest);
    if bound.is_empty() {
        return Err(invalid_range(range, format!("\"{}\" has no version", token)));
    }

    if bound.split('.').all(|part| part == "*") {
        return Ok(match operator {
            "!=" => Clause::Excludes(VersionReq::STAR),
            _ => Clause::Satisfies(VersionReq::STAR),
        });
    }

    if bound.contains('-') && !bound.contains('*') {
        return precise_clause(operator, &bound, token, range);
    }

    let requirement = match operator {
        "" | "!=" => format!("={}", bound),
        "^" if bound.split('.').next() == Some("0") => {
            let lower = bound
                .split('.')
                .take_while(|part| *part != "*")
                .collect::<Vec<_>>()
                .join(".");
            format!(">={}, <1.0.0", lower)
        }
        _ => format!("{}{}", operator, bound),
    };

    let req = VersionReq::parse(&requirement)
        .map_err(|e| invalid_range(range, format!("\"{}\": {}", token, e)))?;

    Ok(if operator == "!=" {
        Clause::Excludes(req)
    } else {
        Clause::Satisfies(req)
    })
}

/// Builds a clause for a bound carrying a prerelease tag.
fn precise_clause(
    operator: &str,
    bound: &str,
    token: &str,
    range: &str,
) -> Result<Clause, ProviderError> {
    let comparison = match operator {
        "" | "=" => Comparison::Equal,
        "!=" => Comparison::NotEqual,
        ">" => Comparison::Greater,
        ">=" => Comparison::GreaterOrEqual,
        "<" => Comparison::Less,
        "<=" => Comparison::LessOrEqual,
        "~" => Comparison::SameMinor,
        _ => Comparison::SameMajor,
    };
    let bound = parse_lenient(bound)
        .map_err(|e| invalid_range(range, format!("\"{}\": {}", token, e)))?;

    Ok(Clause::Precise { comparison, bound })
}

/// Strips a `v` prefix and build metadata, and spells wildcards as `*`.
fn normalize_bound(text: &str) -> String {
    let text = text.trim();
    let text = text.strip_prefix(['v', 'V']).unwrap_or(text);
    let text = text.split('+').next().unwrap_or(text);
    let (core, pre) = match text.find('-') {
        Some(index) => text.split_at(index),
        None => (text, ""),
    };

    let core = core
        .split('.')
        .map(|part| if part == "x" || part == "X" { "*" } else { part })
        .collect::<Vec<_>>()
        .join(".");

    format!("{}{}", core, pre)
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '<' | '>' | '!' | '~' | '^')
}

fn starts_with_operator(token: &str) -> bool {
    token.starts_with(is_operator_char)
}

fn invalid_range(range: &str, details: impl Into<String>) -> ProviderError {
    ProviderError::InvalidVersionRange {
        range: range.to_string(),
        details: details.into(),
    }
}
