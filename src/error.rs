use crate::env::Location;
use std::error::Error;
use std::fmt;

/// Errors raised while *building* a grammar
///
/// These are programmer errors detected at construction time. Ordinary parse
/// failures are never reported this way, they are [`crate::ParseResult`]s.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("forward reference `{name}` is already defined")]
    AlreadyDefined { name: String },
}

#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Byte offset in `code` where parsing stopped
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    /// Location of the point where `rest` starts inside `code`
    ///
    /// `rest` must be a suffix of `code`, which holds for every `rest` a
    /// parser returns.
    pub fn at_rest(code: &'code str, rest: &str) -> Self {
        Self::new(code, code.len().saturating_sub(rest.len()))
    }

    /// Byte offset of a line/column pair inside `code`, clamped to its end
    pub fn at_location(code: &'code str, location: Location) -> Self {
        let mut current = Location::default();
        for (offset, ch) in code.char_indices() {
            if current >= location {
                return Self::new(code, offset);
            }
            current = if ch == '\n' {
                Location::new(current.line + 1, 1)
            } else {
                Location::new(current.line, current.col + 1)
            };
        }
        Self::new(code, code.len())
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line and column of the error, computed from the source itself
    pub fn location(&self) -> Location {
        let consumed = self.code.get(..self.loc).unwrap_or(self.code);
        Location::default().after(consumed)
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.location();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, line_content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, line_content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.col - 1;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Why a top-level parse did not produce a value
#[derive(Debug, Clone)]
pub enum ParseError<'code> {
    /// A parser wrapped in `expect` failed and left a diagnostic
    Expected { message: String, loc: CodeLoc<'code> },
    /// The grammar did not match and no diagnostic was recorded
    NoMatch(CodeLoc<'code>),
    /// The grammar matched a prefix of the input only
    TrailingInput(CodeLoc<'code>),
}

impl<'code> ParseError<'code> {
    pub fn loc(&self) -> CodeLoc<'code> {
        match self {
            ParseError::Expected { loc, .. } => *loc,
            ParseError::NoMatch(loc) => *loc,
            ParseError::TrailingInput(loc) => *loc,
        }
    }

    pub fn location(&self) -> Location {
        self.loc().location()
    }
}

impl<'code> fmt::Display for ParseError<'code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.loc();
        let pos = loc.location();
        match self {
            ParseError::Expected { message, .. } => writeln!(f, "{}", message)?,
            ParseError::NoMatch(_) => writeln!(
                f,
                "No match at line {}, column {} (absolute position: {})",
                pos.line, pos.col, loc.loc
            )?,
            ParseError::TrailingInput(_) => writeln!(
                f,
                "Unexpected trailing input at line {}, column {} (absolute position: {})",
                pos.line, pos.col, loc.loc
            )?,
        }
        writeln!(f)?;
        for line in loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<'code> Error for ParseError<'code> {}
