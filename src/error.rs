//! Engine errors.
//!
//! Three categories, all non-fatal and always surfaced to the caller:
//! phase violations, calls made after the game ended, and domain-rule
//! violations carrying a human-readable reason. Malformed action tokens
//! are a fourth, distinct class so callers can tell a typo from an
//! illegal play.
//!
//! Loss conditions detected inside an otherwise successful Draw or
//! Infect resolution are NOT errors: those transforms succeed and set
//! `status = Lost` on the returned snapshot.

use thiserror::Error;

use crate::state::Phase;

/// Errors returned by the engine's public operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A state-mutating call arrived after the game was won or lost.
    #[error("the game is over")]
    GameOver,

    /// An operation was invoked outside its required phase.
    #[error("not allowed during the {actual} phase (requires {expected})")]
    PhaseViolation {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the game is actually in.
        actual: Phase,
    },

    /// An action token could not be parsed.
    #[error("malformed action token `{token}`: {reason}")]
    MalformedToken {
        /// The offending token, verbatim.
        token: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An action-specific precondition failed.
    #[error("{0}")]
    Rule(String),
}

impl EngineError {
    /// Build a domain-rule violation.
    pub fn rule(reason: impl Into<String>) -> Self {
        EngineError::Rule(reason.into())
    }

    /// Build a malformed-token error.
    pub fn malformed(token: &str, reason: impl Into<String>) -> Self {
        EngineError::MalformedToken {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::PhaseViolation {
            expected: Phase::Actions,
            actual: Phase::Draw,
        };
        assert_eq!(
            err.to_string(),
            "not allowed during the draw phase (requires actions)"
        );

        let err = EngineError::rule("no cubes to treat");
        assert_eq!(err.to_string(), "no cubes to treat");

        let err = EngineError::malformed("fly:Oz", "unknown action `fly`");
        assert_eq!(
            err.to_string(),
            "malformed action token `fly:Oz`: unknown action `fly`"
        );
    }
}
