//! 对局流程
//!
//! 白方先走，双方轮流调用各自的 [`Player`]，直到分出结果。

use std::io::Write;

use anyhow::{bail, Context, Result};
use checkers_ai::Player;
use checkers_core::{Board, Move, Outcome, Side};
use tracing::info;

use crate::render::render;

/// 对局引擎
pub struct GameEngine<W: Write> {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    output: W,
    history: Vec<(Side, Move)>,
}

impl<W: Write> GameEngine<W> {
    pub fn new(board: Board, white: Box<dyn Player>, black: Box<dyn Player>, output: W) -> Self {
        Self {
            board,
            white,
            black,
            output,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 已走的步数记录
    pub fn history(&self) -> &[(Side, Move)] {
        &self.history
    }

    fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::White => self.white.as_mut(),
            Side::Black => self.black.as_mut(),
        }
    }

    /// 进行对局直到结束，返回结果
    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            "game start: {} (White) vs {} (Black), {}x{}",
            self.white.name(),
            self.black.name(),
            self.board.size(),
            self.board.size()
        );

        let mut side = Side::White;
        loop {
            write!(self.output, "\n{}", render(&self.board))?;

            let outcome = self.board.outcome();
            if outcome.is_over() {
                writeln!(self.output, "Game over: {}", outcome)?;
                info!("game over after {} moves: {}", self.history.len(), outcome);
                return Ok(outcome);
            }

            self.play_turn(side)?;
            side = side.opponent();
        }
    }

    /// 让 side 走一步
    fn play_turn(&mut self, side: Side) -> Result<()> {
        // 玩家可以在棋盘上试走，所以借出的是副本
        let mut scratch = self.board.clone();
        let player = self.player_mut(side);
        let name = player.name().to_string();

        let mv = player
            .choose_move(&mut scratch, side)
            .with_context(|| format!("{} ({}) failed to choose a move", name, side))?;

        if !self.board.cell(mv.from).is(side) || !self.board.is_legal(mv.from, mv.to) {
            bail!("{} ({}) returned an illegal move: {}", name, side, mv);
        }
        self.board.apply(mv)?;

        let marker = if mv.is_capture() { " (capture)" } else { "" };
        writeln!(self.output, "{} ({}) plays {}{}", name, side, mv, marker)?;
        self.history.push((side, mv));
        Ok(())
    }
}
