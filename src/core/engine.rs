use std::fmt::Display;

use crate::core::definitions::{Cell, RulesError};
use crate::core::utils::ray;

/** Coordinate pair with both axes already validated to [0, 8).
 * Rank 0 is Black's back rank, rank 7 White's. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    pub fn new(rank: u8, file: u8) -> Result<Square, RulesError> {
        if rank < 8 && file < 8 {
            Ok(Square { rank, file })
        } else {
            Err(RulesError::OutOfBounds { rank, file })
        }
    }

    /** Internal constructor for values known to be on the board. */
    pub(crate) fn at(rank: u8, file: u8) -> Square {
        debug_assert!(rank < 8 && file < 8, "bad internal square ({rank}, {file})");
        Square { rank, file }
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file(self) -> u8 {
        self.file
    }

    /** Step by a signed delta; `None` when the result leaves the board. */
    pub fn offset(self, ranks: i8, files: i8) -> Option<Square> {
        let rank = self.rank as i8 + ranks;
        let file = self.file as i8 + files;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }

    fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, 8 - self.rank)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /** Pawn advance direction along ranks. White climbs toward rank 0. */
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_home_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /** Rank where the side's king and rooks begin. */
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White { "White" } else { "Black" })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    /** File the king lands on after the castle. */
    pub fn king_target_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    /** File the wing's rook starts on. */
    pub fn rook_home_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /** File the rook lands on after the castle. */
    pub fn rook_target_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    /** Files strictly between king and rook; all must be empty. */
    pub fn transit_files(self) -> &'static [u8] {
        match self {
            CastlingSide::KingSide => &[5, 6],
            CastlingSide::QueenSide => &[1, 2, 3],
        }
    }
}

/** Four independent flags, monotonically cleared. Only a king move
 * clears them, both wings at once; rook moves and captures never do. */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }
}

impl CastlingRights {
    pub fn allows(&self, color: Color, wing: CastlingSide) -> bool {
        match (color, wing) {
            (Color::White, CastlingSide::KingSide) => self.white_kingside,
            (Color::White, CastlingSide::QueenSide) => self.white_queenside,
            (Color::Black, CastlingSide::KingSide) => self.black_kingside,
            (Color::Black, CastlingSide::QueenSide) => self.black_queenside,
        }
    }

    pub fn revoke(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }
}

/** 8x8 grid of cells. Placement only; every derived field (turn,
 * rights, en passant, history) lives on `Game`. */
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    pub fn new() -> Board {
        Board {
            cells: [Cell::Empty; 64],
        }
    }

    /** Build a position from eight letter rows, rank 0 first — the same
     * notation the `Display` dump produces. */
    pub fn from_rows(rows: [&str; 8]) -> Result<Board, RulesError> {
        let mut board = Board::new();
        for (rank, row) in rows.iter().enumerate() {
            for (file, letter) in row.chars().enumerate() {
                let square = Square::new(rank as u8, file as u8)?;
                board.set(square, Cell::from_letter(letter)?);
            }
        }
        Ok(board)
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    /** Pseudo-legal destinations for the piece at `origin`; empty when
     * the square is. Nothing here asks whether the mover's king ends up
     * attacked — callers get pattern legality only. */
    pub fn possible_moves(
        &self,
        origin: Square,
        rights: CastlingRights,
        en_passant: Option<Square>,
    ) -> Vec<Square> {
        let figure = match self.get(origin) {
            Cell::Figure(figure) => figure,
            Cell::Empty => return Vec::new(),
        };
        let color = figure.color;
        let mut moves = Vec::with_capacity(27);
        match figure.kind {
            PieceType::Pawn => {
                let forward = color.forward();
                // push
                if let Some(front) = origin.offset(forward, 0) {
                    if self.get(front).is_empty() {
                        moves.push(front);
                        // double push
                        if origin.rank == color.pawn_home_rank() {
                            if let Some(jump) = front.offset(forward, 0) {
                                if self.get(jump).is_empty() {
                                    moves.push(jump);
                                }
                            }
                        }
                    }
                }
                // captures, the en-passant square counting as one
                for files in [-1, 1] {
                    if let Some(target) = origin.offset(forward, files) {
                        if self.get(target).is_enemy_of(color) || en_passant == Some(target) {
                            moves.push(target);
                        }
                    }
                }
            }
            PieceType::Knight => {
                for (ranks, files) in KNIGHT_MOVES {
                    if let Some(target) = origin.offset(*ranks, *files) {
                        let cell = self.get(target);
                        if cell.is_empty() || cell.is_enemy_of(color) {
                            moves.push(target);
                        }
                    }
                }
            }
            PieceType::King => {
                for (ranks, files) in KING_MOVES {
                    if let Some(target) = origin.offset(*ranks, *files) {
                        let cell = self.get(target);
                        if cell.is_empty() || cell.is_enemy_of(color) {
                            moves.push(target);
                        }
                    }
                }
                // castling: king still on its original square, the
                // wing's flag intact, path squares empty
                if origin.rank == color.back_rank() && origin.file == 4 {
                    for wing in [CastlingSide::KingSide, CastlingSide::QueenSide] {
                        if rights.allows(color, wing)
                            && wing
                                .transit_files()
                                .iter()
                                .all(|&file| self.get(Square::at(origin.rank, file)).is_empty())
                        {
                            moves.push(Square::at(origin.rank, wing.king_target_file()));
                        }
                    }
                }
            }
            // Sliding pieces
            sliding_type => {
                let possible_directions = match sliding_type {
                    PieceType::Bishop => BISHOP_DIR,
                    PieceType::Rook => ROOK_DIR,
                    PieceType::Queen => QUEEN_DIR,
                    _ => unreachable!("pawn, knight and king handled above"),
                };
                for step in possible_directions {
                    for target in ray(origin, *step) {
                        match self.get(target) {
                            Cell::Empty => moves.push(target),
                            Cell::Figure(other) => {
                                if other.color != color {
                                    moves.push(target);
                                }
                                break;
                            }
                        }
                    }
                }
            }
        }
        moves
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::from_rows([
            "rnbqkbnr",
            "pppppppp",
            "........",
            "........",
            "........",
            "........",
            "PPPPPPPP",
            "RNBQKBNR",
        ])
        .expect("starting rows are well formed")
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in 0..8u8 {
            for file in 0..8u8 {
                write!(f, "{}", self.get(Square::at(rank, file)).letter())?;
            }
            if rank < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/** Direction tables for sliding pieces. */
const BISHOP_DIR: &[(i8, i8)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIR: &[(i8, i8)] = &[(-1, 0), (1, 0), (0, -1), (0, 1)];
const QUEEN_DIR: &[(i8, i8)] = &[
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/** Fixed offsets for the leapers. */
const KING_MOVES: &[(i8, i8)] = QUEEN_DIR;
const KNIGHT_MOVES: &[(i8, i8)] = &[
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];
