//! Rubric variant selection.

use crate::error::FantasyError;
use std::fmt;
use std::str::FromStr;

/// Which win-bonus rubric scores a match.
///
/// - **EarlyWinOnly**: winners only earn a bonus when the match ends early.
///   This is the rubric of record.
/// - **WinPlusEarlyWin**: every win earns the win bonus, and early wins earn
///   the early-win bonus on top of it. The early-win bonus keeps the same
///   duration cutoff as in **EarlyWinOnly**; only the flat win bonus ignores
///   duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RubricVariant {
    #[default]
    EarlyWinOnly,
    WinPlusEarlyWin,
}

impl fmt::Display for RubricVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RubricVariant::EarlyWinOnly => "early-win",
            RubricVariant::WinPlusEarlyWin => "win-plus-early-win",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RubricVariant {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early-win" | "early" => Ok(RubricVariant::EarlyWinOnly),
            "win-plus-early-win" | "win-plus" | "both" => Ok(RubricVariant::WinPlusEarlyWin),
            _ => Err(FantasyError::InvalidVariant {
                variant: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_round_trips_through_display() {
        for v in [RubricVariant::EarlyWinOnly, RubricVariant::WinPlusEarlyWin] {
            assert_eq!(v.to_string().parse::<RubricVariant>().unwrap(), v);
        }
    }

    #[test]
    fn test_variant_aliases_case_insensitive() {
        assert_eq!(
            "BOTH".parse::<RubricVariant>().unwrap(),
            RubricVariant::WinPlusEarlyWin
        );
        assert_eq!(
            "Early".parse::<RubricVariant>().unwrap(),
            RubricVariant::EarlyWinOnly
        );
    }

    #[test]
    fn test_variant_unknown() {
        assert!(matches!(
            "sometimes".parse::<RubricVariant>(),
            Err(FantasyError::InvalidVariant { .. })
        ));
    }

    #[test]
    fn test_variant_default() {
        assert_eq!(RubricVariant::default(), RubricVariant::EarlyWinOnly);
    }
}
