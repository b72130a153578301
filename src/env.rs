use crate::terminals::TerminalWrapper;
use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Human readable position in the source, both counters start at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Location { line, col }
    }

    /// Location reached after consuming `text` from here
    pub fn after(self, text: &str) -> Self {
        match text.rfind('\n') {
            Some(last_newline) => Location {
                line: self.line + text.matches('\n').count(),
                col: text[last_newline + 1..].chars().count() + 1,
            },
            None => Location {
                line: self.line,
                col: self.col + text.chars().count(),
            },
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new(1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Context threaded through every parser invocation of one parse run
///
/// Cloning an `Env` (or deriving a child with [`Env::with_terminals`] /
/// [`Env::without_terminals`]) shares the position counters, so every parser
/// of a run observes the same location. Only the terminals wrapper is
/// overridden per child.
///
/// Every successful primitive match calls [`Env::advance`] once with the
/// matched text. Nothing rewinds the location when a combinator backtracks,
/// so text re-read by a later alternative is counted again.
#[derive(Clone, Default)]
pub struct Env {
    location: Rc<Cell<Location>>,
    terminals: Option<Rc<dyn TerminalWrapper>>,
}

impl Env {
    pub fn new() -> Self {
        Env::default()
    }

    /// Environment starting at an arbitrary position, e.g. when parsing a
    /// fragment cut out of a larger document
    pub fn at(line: usize, col: usize) -> Self {
        Env {
            location: Rc::new(Cell::new(Location::new(line, col))),
            terminals: None,
        }
    }

    pub fn line(&self) -> usize {
        self.location().line
    }

    pub fn col(&self) -> usize {
        self.location().col
    }

    pub fn location(&self) -> Location {
        self.location.get()
    }

    /// Move the shared position past `consumed`
    pub fn advance(&self, consumed: &str) {
        self.location.set(self.location.get().after(consumed));
    }

    pub fn terminals(&self) -> Option<&Rc<dyn TerminalWrapper>> {
        self.terminals.as_ref()
    }

    /// Child environment that wraps every primitive with `wrapper`
    pub fn with_terminals(&self, wrapper: Rc<dyn TerminalWrapper>) -> Self {
        Env {
            location: Rc::clone(&self.location),
            terminals: Some(wrapper),
        }
    }

    /// Child environment in which primitives match bare
    pub fn without_terminals(&self) -> Self {
        Env {
            location: Rc::clone(&self.location),
            terminals: None,
        }
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("location", &self.location())
            .field("terminals", &self.terminals.is_some())
            .finish()
    }
}
