//! 棋盘状态
//!
//! 棋盘持有格子内容以及两项派生数据：双方的合法走法表和棋子数。
//! 派生数据在每次修改后同步更新，外部只能读取。

use tracing::debug;

use crate::constants::{is_valid_board_size, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{CheckersError, Result};
use crate::moves::{LegalMoves, Move, MoveGenerator};
use crate::outcome::Outcome;
use crate::piece::{Cell, Position, Side};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 边长
    size: usize,
    /// size x size 个格子，索引为 row * size + col
    cells: Vec<Cell>,
    /// 双方合法走法表，按 Side::index 索引
    legal_moves: [LegalMoves; 2],
    /// 双方棋子数，按 Side::index 索引
    piece_counts: [usize; 2],
}

impl Board {
    /// 创建开局棋盘：双方各占 size/2 - 1 行深色格，黑方在上，白方在下
    pub fn new(size: usize) -> Result<Self> {
        let mut board = Self::empty(size)?;
        let rows_per_side = size / 2 - 1;

        for index in 0..size * size {
            let Some(pos) = Position::from_index(index, size) else {
                continue;
            };
            if !pos.is_dark() {
                continue;
            }
            let row = pos.row as usize;
            if row < rows_per_side {
                board.cells[index] = Cell::Black;
            } else if row >= size - rows_per_side {
                board.cells[index] = Cell::White;
            }
        }

        board.recount_pieces();
        board.refresh_moves();
        Ok(board)
    }

    /// 创建空棋盘
    pub fn empty(size: usize) -> Result<Self> {
        if !is_valid_board_size(size) {
            return Err(CheckersError::InvalidConfiguration {
                reason: format!(
                    "board size must be even and between {} and {}, got {}",
                    MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
                ),
            });
        }

        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            legal_moves: [LegalMoves::new(), LegalMoves::new()],
            piece_counts: [0, 0],
        })
    }

    /// 从完整的格子列表重建棋盘（行优先），格子数必须是合法边长的平方
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self> {
        let len = cells.len();
        let size = (MIN_BOARD_SIZE..=MAX_BOARD_SIZE)
            .step_by(2)
            .find(|size| size * size == len)
            .ok_or_else(|| CheckersError::InvalidConfiguration {
                reason: format!("{} cells do not form a supported square board", len),
            })?;

        let mut board = Self::empty(size)?;
        board.cells = cells;
        board.recount_pieces();
        board.refresh_moves();
        Ok(board)
    }

    /// 边长
    pub fn size(&self) -> usize {
        self.size
    }

    /// 全部格子（行优先）
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// 检查位置是否在棋盘内
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// 获取格子内容，越界返回错误
    pub fn get(&self, pos: Position) -> Result<Cell> {
        self.check_position(pos)?;
        Ok(self.cells[pos.to_index(self.size)])
    }

    /// 获取格子内容，越界视为空格
    pub fn cell(&self, pos: Position) -> Cell {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            Cell::Empty
        }
    }

    /// 摆放或移除一个棋子（用于摆局），派生数据随之更新
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<()> {
        self.check_position(pos)?;
        self.put(pos, cell);
        self.refresh_moves();
        Ok(())
    }

    /// 指定阵营所有棋子的位置（行优先）
    pub fn positions_of(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.is(side))
            .filter_map(move |(index, _)| Position::from_index(index, size))
    }

    /// 指定阵营的合法走法表
    pub fn legal_moves(&self, side: Side) -> &LegalMoves {
        &self.legal_moves[side.index()]
    }

    /// 指定阵营的全部合法走法（枚举顺序固定）
    pub fn moves(&self, side: Side) -> Vec<Move> {
        MoveGenerator::flatten(self.legal_moves(side))
    }

    /// 指定阵营是否还有合法走法
    pub fn has_moves(&self, side: Side) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// 指定阵营剩余棋子数
    pub fn piece_count(&self, side: Side) -> usize {
        self.piece_counts[side.index()]
    }

    /// 检查走法是否合法
    pub fn is_legal(&self, from: Position, to: Position) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        let Some(side) = self.cell(from).side() else {
            return false;
        };
        self.legal_moves(side)
            .get(&from)
            .is_some_and(|destinations| destinations.contains(&to))
    }

    /// 执行走法
    ///
    /// 不合法时返回 [`CheckersError::InvalidMove`]，棋盘保持不变。
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        if !self.is_legal(mv.from, mv.to) {
            debug!("rejected illegal move {}", mv);
            return Err(CheckersError::InvalidMove {
                from: mv.from,
                to: mv.to,
            });
        }

        let piece = self.cell(mv.from);
        self.put(mv.from, Cell::Empty);
        self.put(mv.to, piece);
        if let Some(captured) = mv.midpoint() {
            self.put(captured, Cell::Empty);
        }

        self.refresh_moves();
        Ok(())
    }

    /// 撤销一个刚执行过的走法（参数与 [`Board::apply`] 相同）
    ///
    /// 只检查坐标是否在棋盘内，不查合法走法表。吃子走法会在中间格
    /// 还原一枚走子方对手的棋子。
    pub fn undo(&mut self, mv: Move) -> Result<()> {
        self.check_position(mv.from)?;
        self.check_position(mv.to)?;

        // 目标格必须有走子方的棋子，否则这一步不可能被执行过
        let Some(mover) = self.cell(mv.to).side() else {
            return Err(CheckersError::InvalidMove {
                from: mv.from,
                to: mv.to,
            });
        };

        self.put(mv.to, Cell::Empty);
        self.put(mv.from, Cell::from(mover));
        if let Some(captured) = mv.midpoint() {
            self.put(captured, Cell::from(mover.opponent()));
        }

        self.refresh_moves();
        Ok(())
    }

    /// 判定棋局状态
    ///
    /// 依次检查：一方棋子被吃光、双方都无子可动（和棋）、一方无子可动。
    pub fn outcome(&self) -> Outcome {
        let white_pieces = self.piece_count(Side::White);
        let black_pieces = self.piece_count(Side::Black);

        match (white_pieces, black_pieces) {
            (0, 0) => return Outcome::Draw,
            (0, _) => return Outcome::BlackWins,
            (_, 0) => return Outcome::WhiteWins,
            _ => {}
        }

        match (self.has_moves(Side::White), self.has_moves(Side::Black)) {
            (false, false) => Outcome::Draw,
            (true, false) => Outcome::WhiteWins,
            (false, true) => Outcome::BlackWins,
            (true, true) => Outcome::InProgress,
        }
    }

    /// 全量重新统计棋子数
    pub fn recount_pieces(&mut self) {
        self.piece_counts = [0, 0];
        for cell in &self.cells {
            if let Some(side) = cell.side() {
                self.piece_counts[side.index()] += 1;
            }
        }
    }

    /// 写入单个格子并增量维护棋子数
    fn put(&mut self, pos: Position, cell: Cell) {
        let index = pos.to_index(self.size);
        if let Some(old) = self.cells[index].side() {
            self.piece_counts[old.index()] -= 1;
        }
        if let Some(new) = cell.side() {
            self.piece_counts[new.index()] += 1;
        }
        self.cells[index] = cell;
    }

    /// 重新生成双方走法表（一方的走子可能改变另一方的吃子机会）
    fn refresh_moves(&mut self) {
        let white = MoveGenerator::generate(self, Side::White);
        let black = MoveGenerator::generate(self, Side::Black);
        self.legal_moves = [white, black];
    }

    fn check_position(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(CheckersError::InvalidCoordinate {
                row: pos.row as usize,
                col: pos.col as usize,
            })
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_BOARD_SIZE)
            .unwrap_or_else(|_| unreachable!("default board size is valid"))
    }
}
