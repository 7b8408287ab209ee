use std::fmt::Display;

use thiserror::Error;

use crate::core::engine::{Color, PieceType, Square};

/** Piece occupying a square. Plain value, no identity across moves. */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Figure {
    pub kind: PieceType,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

impl Figure {
    pub fn new(kind: PieceType, color: Color) -> Figure {
        Figure { kind, color }
    }

    /** FEN-style letter, uppercase for White. */
    pub fn letter(&self) -> char {
        let letter = match self.kind {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    /** Unicode figurine for display layers. */
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }

    pub fn from_letter(letter: char) -> Result<Figure, RulesError> {
        let kind = match letter.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return Err(RulesError::UnknownSymbol(letter)),
        };
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Figure { kind, color })
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn figure(&self) -> Option<Figure> {
        match self {
            Cell::Empty => None,
            Cell::Figure(figure) => Some(*figure),
        }
    }

    pub fn is_enemy_of(&self, color: Color) -> bool {
        matches!(self, Cell::Figure(figure) if figure.color != color)
    }

    pub fn letter(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Figure(figure) => figure.letter(),
        }
    }

    pub fn from_letter(letter: char) -> Result<Cell, RulesError> {
        if letter == '.' {
            Ok(Cell::Empty)
        } else {
            Figure::from_letter(letter).map(Cell::Figure)
        }
    }
}

/** Log entry for one applied move. Display-only, never read back. */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub figure: Figure,
    pub from: Square,
    pub to: Square,
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}->{}", self.figure.letter(), self.from, self.to)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("square ({rank}, {file}) is outside the board")]
    OutOfBounds { rank: u8, file: u8 },
    #[error("move {from}->{to} is not available")]
    IllegalMove { from: Square, to: Square },
    #[error("unknown piece symbol {0:?} in board layout")]
    UnknownSymbol(char),
}

/** Call surface consumed by the presentation layer. The engine never
 * calls back into it; a UI redraws itself from these reads after each
 * `execute_move`. */
pub trait MatchInterface {
    fn cell(&self, square: Square) -> Cell;
    fn possible_moves(&self, origin: Square) -> Vec<Square>;
    fn set_promotion(&mut self, kind: Option<PieceType>);
    fn execute_move(&mut self, from: Square, to: Square) -> Result<(), RulesError>;
    // info
    fn current_player(&self) -> Color;
    fn move_history(&self) -> &[MoveRecord];
}
