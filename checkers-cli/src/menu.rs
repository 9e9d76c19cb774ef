//! 开局菜单：为每一方选择玩家类型

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use checkers_ai::{AiConfig, Difficulty, Player, RandomBot, SearchAlgorithm, SearchBot};
use checkers_core::Side;

use crate::human::{HumanPlayer, SharedInput};
use crate::settings::Settings;

/// 玩家类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
    MinMax,
    AlphaBeta,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::Human,
        PlayerKind::Random,
        PlayerKind::MinMax,
        PlayerKind::AlphaBeta,
    ];

    /// 是否为搜索型电脑玩家（需要难度）
    pub fn is_search_bot(&self) -> bool {
        matches!(self, PlayerKind::MinMax | PlayerKind::AlphaBeta)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Random => "Random bot",
            PlayerKind::MinMax => "MinMax bot",
            PlayerKind::AlphaBeta => "AlphaBeta bot",
        }
    }
}

/// 询问 side 由哪种玩家操作，输入有误时重新询问
pub fn choose_player_kind<R: BufRead, W: Write>(
    input: &SharedInput<R>,
    output: &mut W,
    side: Side,
) -> Result<PlayerKind> {
    loop {
        writeln!(output, "Choose player for {}:", side)?;
        for (i, kind) in PlayerKind::ALL.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, kind.display_name())?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.borrow_mut().read_line(&mut line)? == 0 {
            bail!("input closed while choosing a player");
        }

        let choice = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| PlayerKind::ALL.get(i).copied());
        match choice {
            Some(kind) => return Ok(kind),
            None => writeln!(output, "Please enter a number from 1 to {}", PlayerKind::ALL.len())?,
        }
    }
}

/// 询问电脑玩家难度，直接回车保留 current
pub fn choose_difficulty<R: BufRead, W: Write>(
    input: &SharedInput<R>,
    output: &mut W,
    current: Difficulty,
) -> Result<Difficulty> {
    loop {
        writeln!(output, "Choose bot difficulty (Enter keeps {}):", current.name())?;
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let depth = AiConfig::from_difficulty(*difficulty).max_depth;
            writeln!(output, "  {}) {} (depth {})", i + 1, difficulty.name(), depth)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.borrow_mut().read_line(&mut line)? == 0 {
            bail!("input closed while choosing a difficulty");
        }

        let line = line.trim();
        if line.is_empty() {
            return Ok(current);
        }

        let choice = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Difficulty::ALL.get(i).copied());
        match choice {
            Some(difficulty) => return Ok(difficulty),
            None => writeln!(output, "Please enter a number from 1 to {}", Difficulty::ALL.len())?,
        }
    }
}

/// 按类型创建玩家
pub fn build_player<R, W>(
    kind: PlayerKind,
    side: Side,
    settings: &Settings,
    input: &SharedInput<R>,
    output: W,
) -> Box<dyn Player>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let depth = AiConfig::from_difficulty(settings.default_difficulty).max_depth;
    let name = format!("{} {}", side, kind.display_name());

    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(side.to_string(), input.clone(), output)),
        PlayerKind::Random => {
            // 双方使用不同的随机序列
            let seed = match side {
                Side::White => settings.random_seed,
                Side::Black => settings.random_seed.wrapping_add(1),
            };
            Box::new(RandomBot::new(name, seed))
        }
        PlayerKind::MinMax => Box::new(SearchBot::new(
            name,
            AiConfig::new(SearchAlgorithm::MinMax, depth),
        )),
        PlayerKind::AlphaBeta => Box::new(SearchBot::new(
            name,
            AiConfig::new(SearchAlgorithm::AlphaBeta, depth),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    fn shared(script: &str) -> SharedInput<Cursor<Vec<u8>>> {
        Rc::new(RefCell::new(Cursor::new(script.as_bytes().to_vec())))
    }

    #[test]
    fn test_choose_player_kind() {
        let input = shared("0\nfoo\n3\n");
        let mut output = Vec::new();

        let kind = choose_player_kind(&input, &mut output, Side::White).unwrap();
        assert_eq!(kind, PlayerKind::MinMax);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Choose player for White:"));
        assert!(text.contains("4) AlphaBeta bot"));
        assert_eq!(text.matches("Please enter a number").count(), 2);
    }

    #[test]
    fn test_choose_player_kind_input_closed() {
        let input = shared("");
        assert!(choose_player_kind(&input, &mut Vec::new(), Side::Black).is_err());
    }

    #[test]
    fn test_choose_difficulty() {
        let input = shared("9\n3\n\n");
        let mut output = Vec::new();

        let chosen = choose_difficulty(&input, &mut output, Difficulty::Easy).unwrap();
        assert_eq!(chosen, Difficulty::Hard);
        let kept = choose_difficulty(&input, &mut output, Difficulty::Easy).unwrap();
        assert_eq!(kept, Difficulty::Easy);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("2) Medium (depth 4)"));
        assert_eq!(text.matches("Please enter a number").count(), 1);
    }

    #[test]
    fn test_search_bot_kinds() {
        assert!(PlayerKind::MinMax.is_search_bot());
        assert!(PlayerKind::AlphaBeta.is_search_bot());
        assert!(!PlayerKind::Human.is_search_bot());
        assert!(!PlayerKind::Random.is_search_bot());
    }

    #[test]
    fn test_build_player_names() {
        let input = shared("");
        let settings = Settings::default();

        let bot = build_player(PlayerKind::AlphaBeta, Side::Black, &settings, &input, Vec::new());
        assert_eq!(bot.name(), "Black AlphaBeta bot");

        let human = build_player(PlayerKind::Human, Side::White, &settings, &input, Vec::new());
        assert_eq!(human.name(), "White");
    }
}
