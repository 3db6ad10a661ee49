use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::*;
use hazel::{analyze_file, estimate_complexity, FileEstimate, HazelError};
use hazel::estimator::MAX_SUBMISSION_CHARS;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use walkdir::WalkDir;

const TOTAL_WIDTH: usize = 80;
const PADDING: usize = 2;

/// Hazel - Heuristic Cyclomatic Complexity Estimation
#[derive(Parser)]
#[command(name = "hazel")]
#[command(about = "Estimate cyclomatic complexity of source files without parsing them")]
#[command(version)]
struct Cli {
  /// Files or directories to analyze; reads stdin when omitted
  #[arg(value_name = "PATH")]
  paths: Vec<PathBuf>,

  /// Fail (exit 1) if any file scores above this complexity
  #[arg(short, long)]
  threshold: Option<u32>,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
  format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
  Pretty,
  Json,
  Compact,
}

fn main() {
  let cli = Cli::parse();

  match run(&cli) {
    Ok(exit_code) => process::exit(exit_code),
    Err(e) => {
      eprintln!("Error: {e}");
      process::exit(1);
    }
  }
}

fn run(cli: &Cli) -> Result<i32> {
  let estimates = if cli.paths.is_empty() {
    vec![estimate_stdin()?]
  } else {
    let mut estimates = Vec::new();
    for path in collect_files(&cli.paths) {
      match analyze_file(&path) {
        Ok(estimate) => estimates.push(estimate),
        Err(e) => eprintln!("{}: {e}", "warning".yellow()),
      }
    }
    estimates
  };

  match cli.format {
    OutputFormat::Pretty => print_pretty(&estimates, cli.threshold),
    OutputFormat::Json => println!("{}", format_json(&estimates)?),
    OutputFormat::Compact => {
      for estimate in &estimates {
        println!("{} {}", estimate.file_path.display(), estimate.complexity);
      }
    }
  }

  let violations = match cli.threshold {
    Some(threshold) => estimates.iter().filter(|e| e.complexity > threshold).count(),
    None => 0,
  };

  Ok(if violations > 0 { 1 } else { 0 })
}

/// Estimate whatever arrives on stdin, under the same cap the submission
/// workflow applies to files.
fn estimate_stdin() -> Result<FileEstimate> {
  let mut code = String::new();
  std::io::stdin().read_to_string(&mut code).map_err(|source| HazelError::Io {
    path: PathBuf::from("<stdin>"),
    source,
  })?;

  let chars = code.chars().count();
  if chars > MAX_SUBMISSION_CHARS {
    return Err(
      HazelError::TooLarge {
        path: PathBuf::from("<stdin>"),
        chars,
        limit: MAX_SUBMISSION_CHARS,
      }
      .into(),
    );
  }

  Ok(FileEstimate { file_path: PathBuf::from("<stdin>"), complexity: estimate_complexity(&code) })
}

/// Expand directory arguments into their contained files. The estimator is
/// language-agnostic, so no extension filtering happens here; unreadable
/// files surface as warnings during analysis instead.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
  let mut files = Vec::new();

  for path in paths {
    if path.is_file() {
      files.push(path.clone());
    } else if path.is_dir() {
      for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        if entry.path().is_file() {
          files.push(entry.path().to_path_buf());
        }
      }
    } else {
      eprintln!("{}: {} is not a file or directory", "warning".yellow(), path.display());
    }
  }

  files
}

fn print_pretty(estimates: &[FileEstimate], threshold: Option<u32>) {
  println!("{}", "Hazel - Heuristic Cyclomatic Complexity".purple().bold());
  println!("{}", "Branch-token counting over sanitized source".italic());
  println!();

  let score_width = "SCORE".len();
  let file_width = TOTAL_WIDTH - score_width - PADDING;

  println!("{:<width$} {}", "FILE", "SCORE", width = file_width);
  println!("{}", "=".repeat(TOTAL_WIDTH));

  for estimate in estimates {
    let exceeds = threshold.is_some_and(|t| estimate.complexity > t);
    print_aligned_row(&estimate.file_path.display().to_string(), estimate.complexity, exceeds);
  }
}

fn print_aligned_row(file: &str, complexity: u32, exceeds: bool) {
  let score_text = complexity.to_string();
  let file_column_width = TOTAL_WIDTH - score_text.len() - PADDING;
  let formatted_file = format_file_path(file, file_column_width);

  let colored_score =
    if exceeds { score_text.red().to_string() } else { score_text.green().to_string() };

  let dashes = "-".repeat(file_column_width.saturating_sub(formatted_file.chars().count()));
  println!("{}{} {}", formatted_file, dashes, colored_score);
}

/// Fit a path into `max_width` columns, keeping the tail. Measured and cut
/// in characters, not bytes, so multibyte path names can't split mid-char.
fn format_file_path(path: &str, max_width: usize) -> String {
  let chars: Vec<char> = path.chars().collect();
  if chars.len() <= max_width {
    path.to_string()
  } else {
    let truncated_len = max_width - 3; // Reserve 3 chars for "..."
    let tail: String = chars[chars.len() - truncated_len..].iter().collect();
    format!("...{tail}")
  }
}

fn format_json(estimates: &[FileEstimate]) -> Result<String> {
  let output = serde_json::json!({
    "files": estimates,
    "summary": {
      "total": estimates.len(),
      "max_complexity": estimates.iter().map(|e| e.complexity).max().unwrap_or(0),
    }
  });

  Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod cli_tests {
  use super::*;

  #[test]
  fn test_cli_parsing() {
    let cli = Cli::try_parse_from(["hazel", "--threshold", "8", "src/"]).unwrap();
    assert_eq!(cli.paths, vec![PathBuf::from("src/")]);
    assert_eq!(cli.threshold, Some(8));
    assert_eq!(cli.format, OutputFormat::Pretty);

    let cli = Cli::try_parse_from(["hazel", "--format", "json"]).unwrap();
    assert!(cli.paths.is_empty());
    assert_eq!(cli.format, OutputFormat::Json);
  }

  #[test]
  fn test_format_file_path_short_passes_through() {
    assert_eq!(format_file_path("src/main.rs", 40), "src/main.rs");
  }

  #[test]
  fn test_format_file_path_truncates_to_width() {
    let long = "a/".repeat(60);
    let formatted = format_file_path(&long, 40);
    assert!(formatted.starts_with("..."));
    assert_eq!(formatted.chars().count(), 40);
    assert!(long.ends_with(&formatted[3..]));
  }

  #[test]
  fn test_format_file_path_wide_chars_within_width() {
    // 31 characters but 92 bytes; fits the column and must pass through.
    let path = format!("{}é{}", "日".repeat(10), "日".repeat(20));
    assert_eq!(format_file_path(&path, 75), path);
  }

  #[test]
  fn test_format_file_path_truncates_mixed_width_chars() {
    let path = format!("{}é{}", "日".repeat(30), "日".repeat(30));
    let formatted = format_file_path(&path, 20);
    assert!(formatted.starts_with("..."));
    assert_eq!(formatted.chars().count(), 20);
  }

  #[test]
  fn test_format_json_shape() {
    let estimates = vec![
      FileEstimate { file_path: PathBuf::from("a.js"), complexity: 2 },
      FileEstimate { file_path: PathBuf::from("b.js"), complexity: 5 },
    ];

    let output = format_json(&estimates).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let files = parsed["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["file_path"], "a.js");
    assert_eq!(files[0]["complexity"], 2);
    assert_eq!(parsed["summary"]["total"], 2);
    assert_eq!(parsed["summary"]["max_complexity"], 5);
  }

  #[test]
  fn test_format_json_empty() {
    let output = format_json(&[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["files"].as_array().unwrap().len(), 0);
    assert_eq!(parsed["summary"]["total"], 0);
    assert_eq!(parsed["summary"]["max_complexity"], 0);
  }
}
