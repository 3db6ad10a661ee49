//! Composed complexity estimation and the file-level surface
//!
//! `estimate_complexity` is the one operation the submission workflow
//! consumes: sanitize, then score. The file helpers below exist for the CLI
//! and mirror the caller's contract, including the submission size cap.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::sanitizer::sanitize;
use crate::scoring::score;

/// The submission workflow rejects code above this size; the file surface
/// applies the same cap so CLI results match what the workflow would accept.
pub const MAX_SUBMISSION_CHARS: usize = 10_000;

#[derive(Error, Debug)]
pub enum HazelError {
  #[error("failed to read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{path} is {chars} characters, over the {limit}-character submission cap")]
  TooLarge { path: PathBuf, chars: usize, limit: usize },
}

/// Estimate the cyclomatic complexity of raw source text.
///
/// Pure and total: any string in, an integer >= 1 out. Comment and literal
/// content never contributes to the score.
pub fn estimate_complexity(code: &str) -> u32 {
  score(&sanitize(code))
}

/// Complexity estimate for a single file
#[derive(Debug, Clone, Serialize)]
pub struct FileEstimate {
  pub file_path: PathBuf,
  pub complexity: u32,
}

/// Estimate complexity for source text read from `path`.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<FileEstimate, HazelError> {
  let path = path.as_ref();
  let content = fs::read_to_string(path).map_err(|source| HazelError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  let chars = content.chars().count();
  if chars > MAX_SUBMISSION_CHARS {
    return Err(HazelError::TooLarge {
      path: path.to_path_buf(),
      chars,
      limit: MAX_SUBMISSION_CHARS,
    });
  }

  Ok(FileEstimate {
    file_path: path.to_path_buf(),
    complexity: estimate_complexity(&content),
  })
}
