//! 对局结果

use serde::{Deserialize, Serialize};

use crate::piece::Side;

/// 棋局状态判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 对局进行中
    InProgress,
    /// 和棋（双方都无子可动）
    Draw,
    /// 白方胜
    WhiteWins,
    /// 黑方胜
    BlackWins,
}

impl Outcome {
    /// 指定阵营获胜
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::White => Outcome::WhiteWins,
            Side::Black => Outcome::BlackWins,
        }
    }

    /// 胜方（和棋或未结束时为 None）
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::WhiteWins => Some(Side::White),
            Outcome::BlackWins => Some(Side::Black),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("in progress"),
            Outcome::Draw => f.write_str("draw"),
            Outcome::WhiteWins => f.write_str("White wins"),
            Outcome::BlackWins => f.write_str("Black wins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::win_for(Side::White), Outcome::WhiteWins);
        assert_eq!(Outcome::BlackWins.winner(), Some(Side::Black));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_over());
        assert!(!Outcome::InProgress.is_over());
    }

    #[test]
    fn test_outcome_serde() {
        let json = serde_json::to_string(&Outcome::WhiteWins).unwrap();
        assert_eq!(json, "\"WhiteWins\"");
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::WhiteWins);
    }
}
