//! Error types for the engine's caller-facing contract violations.
//!
//! Every variant is a condition the orchestration layer is expected to report
//! to the user rather than recover from silently. Internal invariants (a rule
//! set's own board layout, ring bookkeeping) assert instead.

use super::player::PlayerNumber;

/// Errors surfaced by the board, the rule engine, the AI and the game
/// orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum MancalaError {
    /// Board initialisation parameters are out of bounds.
    #[error("invalid board configuration: {0}")]
    InvalidConfiguration(String),

    /// The requested move is not legal for the current board.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// An operation that needs a rule set was called before one was attached.
    #[error("no rule set attached to the game")]
    NoRuleSet,

    /// The AI was asked to play but none of its pits hold marbles.
    #[error("no legal move available for player {player}")]
    NoLegalMove {
        /// The player the AI was playing for.
        player: PlayerNumber,
    },

    /// A serialized game state could not be parsed; the game is unchanged.
    #[error("invalid game state string: {0}")]
    InvalidStateString(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        let err = MancalaError::IllegalMove("source pit holds no marbles".to_string());
        assert_eq!(err.to_string(), "illegal move: source pit holds no marbles");
    }

    #[test]
    fn test_no_legal_move_display() {
        let err = MancalaError::NoLegalMove {
            player: PlayerNumber::Two,
        };
        assert_eq!(err.to_string(), "no legal move available for player Two");
    }

    #[test]
    fn test_no_rule_set_display() {
        assert_eq!(
            MancalaError::NoRuleSet.to_string(),
            "no rule set attached to the game"
        );
    }
}
