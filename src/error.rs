//! Startup errors
//!
//! Only host-surface problems can fail; the simulation itself cannot.

use std::fmt;

/// Fatal initialization failure. The loop must not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    NoWindow,
    NoDocument,
    /// No element with this id
    CanvasMissing(String),
    /// Element exists but is not a `<canvas>`
    NotACanvas(String),
    /// `getContext("2d")` failed or returned null
    NoContext2d,
    /// Event listener / timer / frame callback registration failed
    Wiring(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoWindow => write!(f, "no window object"),
            InitError::NoDocument => write!(f, "no document object"),
            InitError::CanvasMissing(id) => write!(f, "canvas element #{id} not found"),
            InitError::NotACanvas(id) => write!(f, "element #{id} is not a canvas"),
            InitError::NoContext2d => write!(f, "could not get 2D context"),
            InitError::Wiring(what) => write!(f, "failed to wire {what}"),
        }
    }
}

impl std::error::Error for InitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            InitError::CanvasMissing("gameCanvas".into()).to_string(),
            "canvas element #gameCanvas not found"
        );
        assert_eq!(InitError::NoContext2d.to_string(), "could not get 2D context");
        assert_eq!(
            InitError::Wiring("keydown listener".into()).to_string(),
            "failed to wire keydown listener"
        );
    }
}
