//! Comment and literal stripping prior to complexity scoring
//!
//! A single forward pass over the raw source text that blanks out everything
//! inside comments and string/character literals, so a branch keyword that
//! only appears in prose can never reach the scorer. Content is replaced
//! with spaces rather than deleted, which keeps line and column structure
//! intact for any caller that wants line-accurate reporting later.
//!
//! The scanner assumes C-family conventions: `//` and `/* */` comments,
//! double-quoted strings and single-quoted chars with backslash escapes.
//! Triple-quoted strings, raw-string prefixes, regex literals, and nested
//! block comments are not special-cased and may be mis-scanned. That is an
//! accepted heuristic boundary, not something to patch with language
//! detection.

/// Scanner state. Exactly one state is active at any position; literals and
/// comments do not nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  Default,
  LineComment,
  BlockComment,
  StringLiteral,
  CharLiteral,
}

impl ScanState {
  /// Closing delimiter for the literal states.
  fn delimiter(self) -> Option<char> {
    match self {
      ScanState::StringLiteral => Some('"'),
      ScanState::CharLiteral => Some('\''),
      _ => None,
    }
  }
}

/// Blank out comment and literal content in `code`.
///
/// Total over any input: empty strings, binary garbage, and unterminated
/// comments or literals all scan cleanly (an unterminated construct simply
/// swallows the rest of the input). Only characters seen in the default
/// state are copied through unchanged; the one exception is the newline that
/// ends a line comment, which is kept so multi-line structure survives.
pub fn sanitize(code: &str) -> String {
  let chars: Vec<char> = code.chars().collect();
  let mut output = String::with_capacity(code.len());
  let mut state = ScanState::Default;
  let mut i = 0;

  while i < chars.len() {
    let current = chars[i];
    let next = chars.get(i + 1).copied();

    match state {
      ScanState::Default => {
        if current == '/' && next == Some('/') {
          state = ScanState::LineComment;
          i += 2;
          continue;
        }
        if current == '/' && next == Some('*') {
          state = ScanState::BlockComment;
          i += 2;
          continue;
        }
        if current == '"' {
          state = ScanState::StringLiteral;
          output.push(' ');
        } else if current == '\'' {
          state = ScanState::CharLiteral;
          output.push(' ');
        } else {
          output.push(current);
        }
      }
      ScanState::LineComment => {
        if current == '\n' {
          output.push('\n');
          state = ScanState::Default;
        }
      }
      ScanState::BlockComment => {
        if current == '*' && next == Some('/') {
          state = ScanState::Default;
          i += 2;
          continue;
        }
      }
      ScanState::StringLiteral | ScanState::CharLiteral => {
        // Escape pairs are consumed atomically so an escaped quote can
        // never terminate the literal early.
        if current == '\\' && next.is_some() {
          output.push_str("  ");
          i += 2;
          continue;
        }
        output.push(' ');
        if Some(current) == state.delimiter() {
          state = ScanState::Default;
        }
      }
    }

    i += 1;
  }

  output
}
