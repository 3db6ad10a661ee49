//! Branch-token counting over sanitized source
//!
//! Approximates cyclomatic complexity by counting constructs that open a new
//! control-flow path. The count is a deliberately rough signal: `?` stands in
//! for the ternary operator and will over-count languages that use it for
//! optional types, and keyword matching is lowercase-only. Callers treat the
//! result as an approximate metric, so those quirks are kept as-is rather
//! than refined.

use regex::Regex;

/// Keywords that open a branch, matched on word boundaries so identifiers
/// like `iffy` or `catchall` don't count.
const BRANCH_KEYWORDS: &str = r"\b(if|for|while|case|catch)\b";

/// Count branch tokens in `sanitized` and fold them into a score.
///
/// Starts at 1 for the single straight-line path and adds 1 per branch
/// keyword, `&&`, `||`, and `?`. Total over any input and always >= 1. The
/// input is expected to have been through [`crate::sanitizer::sanitize`]
/// first; scoring raw text would pick up tokens inside comments and strings.
pub fn score(sanitized: &str) -> u32 {
  let branch_keywords = Regex::new(BRANCH_KEYWORDS).unwrap();

  let keywords = branch_keywords.find_iter(sanitized).count();
  let ands = sanitized.matches("&&").count();
  let ors = sanitized.matches("||").count();
  let ternaries = sanitized.matches('?').count();

  1 + (keywords + ands + ors + ternaries) as u32
}
