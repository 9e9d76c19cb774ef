//! 命令行人类玩家

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use checkers_ai::{Player, PlayerError, PlayerResult};
use checkers_core::{Board, Move, Notation, Position, Side};

/// 多个人类玩家共用的输入流
pub type SharedInput<R> = Rc<RefCell<R>>;

/// 从输入流读取 `row,col` 坐标的人类玩家
///
/// 输入有误时提示并重新询问，不会返回非法走法。
pub struct HumanPlayer<R: BufRead, W: Write> {
    name: String,
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// 输出提示并读取一行，输入结束时返回 InputClosed
    fn prompt(&mut self, message: &str) -> PlayerResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// 读取一个坐标，解析失败时重新询问
    fn read_position(&mut self, message: &str) -> PlayerResult<Position> {
        loop {
            let line = self.prompt(message)?;
            match Notation::parse_position(&line) {
                Ok(pos) => return Ok(pos),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &mut Board, side: Side) -> PlayerResult<Move> {
        if !board.has_moves(side) {
            return Err(PlayerError::NoLegalMove(side));
        }

        loop {
            let line = self.prompt(&format!("{} ({}) from: ", self.name, side))?;

            // 也可以一次输入完整走法，例如 `5,0 4,1`
            if let Ok(mv) = Notation::parse_move(&line) {
                if board.cell(mv.from).is(side) && board.is_legal(mv.from, mv.to) {
                    return Ok(mv);
                }
                writeln!(self.output, "Illegal move: {}", mv)?;
                continue;
            }

            let from = match Notation::parse_position(&line) {
                Ok(pos) => pos,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            let Some(destinations) = board.legal_moves(side).get(&from) else {
                writeln!(self.output, "No legal move from {}", from)?;
                continue;
            };

            let options: Vec<String> = destinations.iter().map(|to| to.to_string()).collect();
            writeln!(self.output, "Destinations: {}", options.join("  "))?;

            let to = self.read_position(&format!("{} ({}) to: ", self.name, side))?;
            if board.is_legal(from, to) {
                return Ok(Move::new(from, to));
            }
            writeln!(self.output, "Illegal move: {} -> {}", from, to)?;
        }
    }
}
