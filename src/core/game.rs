use log::{debug, trace};

use crate::core::definitions::{Cell, Figure, MatchInterface, MoveRecord, RulesError};
use crate::core::engine::{Board, CastlingRights, CastlingSide, Color, PieceType, Square};

/** Authoritative match state: placement plus every derived field the
 * rules maintain. Mutated only through `execute_move`. */
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
    promotion: Option<PieceType>,
    selection: Option<Square>,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game::with_player(board, Color::White)
    }

    pub fn with_player(board: Board, player: Color) -> Game {
        Game {
            board,
            current_player: player,
            rights: CastlingRights::default(),
            en_passant: None,
            promotion: None,
            selection: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rights(&self) -> CastlingRights {
        self.rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /** True when the square holds a figure of the side to move — the
     * guard a UI applies to the first click of an interaction round. */
    pub fn may_select(&self, square: Square) -> bool {
        self.board
            .get(square)
            .figure()
            .map(|figure| figure.color == self.current_player)
            .unwrap_or(false)
    }

    pub fn select(&mut self, square: Square) {
        self.selection = Some(square);
    }

    pub fn selected(&self) -> Option<Square> {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::default())
    }
}

impl MatchInterface for Game {
    fn cell(&self, square: Square) -> Cell {
        self.board.get(square)
    }

    fn possible_moves(&self, origin: Square) -> Vec<Square> {
        self.board.possible_moves(origin, self.rights, self.en_passant)
    }

    fn set_promotion(&mut self, kind: Option<PieceType>) {
        self.promotion = kind;
    }

    fn execute_move(&mut self, from: Square, to: Square) -> Result<(), RulesError> {
        // A failed attempt still ends the interaction round.
        self.selection = None;
        if !self.possible_moves(from).contains(&to) {
            return Err(RulesError::IllegalMove { from, to });
        }
        let figure = self
            .board
            .get(from)
            .figure()
            .expect("validated origin holds a figure");

        // en passant: the victim sits one rank behind the target square
        if figure.kind == PieceType::Pawn && Some(to) == self.en_passant {
            let victim = to
                .offset(-figure.color.forward(), 0)
                .expect("en-passant victim is on the board");
            trace!("en passant: removing pawn at {victim}");
            self.board.set(victim, Cell::Empty);
        }

        // Any king move burns both wings; landing on a castle square
        // also slides that wing's rook, wherever the king came from.
        if figure.kind == PieceType::King {
            self.rights.revoke(figure.color);
            debug!("castling rights revoked for {}", figure.color);
            let back = figure.color.back_rank();
            for wing in [CastlingSide::KingSide, CastlingSide::QueenSide] {
                if to.rank() == back && to.file() == wing.king_target_file() {
                    let rook_home = Square::at(back, wing.rook_home_file());
                    let rook_target = Square::at(back, wing.rook_target_file());
                    trace!("castle: sliding rook {rook_home} -> {rook_target}");
                    let rook = self.board.get(rook_home);
                    self.board.set(rook_target, rook);
                    self.board.set(rook_home, Cell::Empty);
                }
            }
        }

        // relocate the mover
        self.board.set(to, Cell::Figure(figure));
        self.board.set(from, Cell::Empty);

        // promotion
        if figure.kind == PieceType::Pawn && to.rank() == figure.color.promotion_rank() {
            let kind = self.promotion.unwrap_or(PieceType::Queen);
            self.board.set(to, Cell::Figure(Figure::new(kind, figure.color)));
        }

        // The skipped square is capturable for exactly one reply.
        self.en_passant = None;
        if figure.kind == PieceType::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.en_passant = Some(Square::at((from.rank() + to.rank()) / 2, from.file()));
        }

        self.current_player = self.current_player.opposite();
        self.history.push(MoveRecord { figure, from, to });
        Ok(())
    }

    fn current_player(&self) -> Color {
        self.current_player
    }

    fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }
}
