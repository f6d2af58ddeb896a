//! Move generation.
//!
//! Pseudo-legal moves are produced per piece type, then each one is played on
//! a throwaway copy of the board and kept only if the mover's king is not
//! left attacked. Castling additionally requires the square the king passes
//! over to be safe.

mod pawns;
mod pieces;

use super::attack_tables::{
    bishop_attacks, queen_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::{Bitboard, Board, Color, Move, MoveList, PieceKind, Square};

impl Board {
    /// Squares a move of the side to move may land on: anything not
    /// occupied by its own pieces or by the enemy king.
    fn target_mask(&self) -> Bitboard {
        let color = self.side_to_move;
        !(self.occupied_by(color) | self.pieces(color.opponent(), PieceKind::King))
    }

    pub(crate) fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(&mut moves);
        self.generate_knight_moves(&mut moves);
        self.generate_slider_moves(&mut moves);
        self.generate_king_moves(&mut moves);
        moves
    }

    /// All legal moves for the side to move.
    ///
    /// Purely a rules question: the list is not emptied by draw conditions
    /// such as the fifty-move rule.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let mut legal = MoveList::new();
        for mv in self.pseudo_legal_moves() {
            if self.is_castling(mv) && !self.castling_transit_is_safe(mv) {
                continue;
            }
            let mut scratch = self.clone();
            scratch.play_unchecked(mv);
            if !scratch.king_attacked(color) {
                legal.push(mv);
            }
        }
        legal
    }

    fn castling_transit_is_safe(&self, mv: Move) -> bool {
        let step = if mv.to().file() > mv.from().file() { 1 } else { -1 };
        mv.from()
            .offset(0, step)
            .is_some_and(|transit| !self.is_square_attacked(transit, self.side_to_move.opponent()))
    }

    /// True if `mv` is in [`Board::legal_moves`].
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// True if any piece of `by` attacks `sq` in the current placement.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let idx = sq.index();
        let occ = self.all_occupied.0;

        // A pawn of `by` attacks sq exactly when a pawn of the other colour
        // on sq would attack it back.
        if self.pieces(by, PieceKind::Pawn).0 & PAWN_ATTACKS[by.opponent().index()][idx] != 0 {
            return true;
        }
        if self.pieces(by, PieceKind::Knight).0 & KNIGHT_ATTACKS[idx] != 0 {
            return true;
        }
        if self.pieces(by, PieceKind::King).0 & KING_ATTACKS[idx] != 0 {
            return true;
        }

        let queens = self.pieces(by, PieceKind::Queen).0;
        let rook_like = self.pieces(by, PieceKind::Rook).0 | queens;
        if rook_attacks(idx, occ) & rook_like != 0 {
            return true;
        }
        let bishop_like = self.pieces(by, PieceKind::Bishop).0 | queens;
        bishop_attacks(idx, occ) & bishop_like != 0
    }

    pub(crate) fn king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// True if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.king_attacked(self.side_to_move)
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.legal_moves().is_empty()
    }

    /// True if the side to move can legally capture en passant right now.
    ///
    /// A target square on its own does not make a position different; this
    /// is what decides whether it counts.
    #[must_use]
    pub fn has_legal_en_passant(&self) -> bool {
        let Some(target) = self.en_passant_target else {
            return false;
        };
        let color = self.side_to_move;
        let attackers = Bitboard(PAWN_ATTACKS[color.opponent().index()][target.index()])
            & self.pieces(color, PieceKind::Pawn);
        attackers.into_iter().any(|from| {
            let mv = Move::new(from, target);
            self.is_en_passant(mv) && {
                let mut scratch = self.clone();
                scratch.play_unchecked(mv);
                !scratch.king_attacked(color)
            }
        })
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| self.after(mv).perft(depth - 1))
            .sum()
    }

    /// Perft split by root move, sorted by coordinate text.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        let mut split: Vec<(Move, u64)> = self
            .legal_moves()
            .into_iter()
            .map(|mv| (mv, self.after(mv).perft(depth.saturating_sub(1))))
            .collect();
        split.sort_by_key(|(mv, _)| mv.to_string());
        split
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        assert_eq!(Board::new().legal_moves().len(), 20);
    }

    #[test]
    fn test_castling_through_attacked_square_is_illegal() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1").unwrap();
        let moves = board.legal_moves();
        assert!(!moves.contains(mv("e1g1")));
        assert!(moves.contains(mv("e1c1")));
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").unwrap();
        assert!(board.is_in_check());
        let moves = board.legal_moves();
        assert!(!moves.contains(mv("e1g1")));
        assert!(!moves.contains(mv("e1c1")));
    }

    #[test]
    fn test_queenside_castle_allowed_with_b1_attacked() {
        // b1 is crossed by the rook only
        let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        assert!(board.legal_moves().contains(mv("e1c1")));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let board = Board::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(board
            .legal_moves()
            .iter()
            .all(|m| m.from() != "e2".parse().unwrap()));
    }

    #[test]
    fn test_enemy_king_is_never_a_target() {
        // The rook sees the black king down the open b-file
        let board = Board::from_fen("1k6/8/8/8/8/8/8/KR6 w - - 0 1").unwrap();
        let b8: Square = "b8".parse().unwrap();
        assert!(board.is_square_attacked(b8, Color::White));
        assert!(!board.legal_moves().is_empty());
        assert!(board.pseudo_legal_moves().iter().all(|m| m.to() != b8));
    }

    #[test]
    fn test_en_passant_availability() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
                .unwrap();
        assert!(board.has_legal_en_passant());
        assert!(board.legal_moves().contains(mv("e5f6")));

        let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
        assert!(!board.has_legal_en_passant());
    }

    #[test]
    fn test_en_passant_exposing_king_is_illegal() {
        let board = Board::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1").unwrap();
        assert!(!board.legal_moves().contains(mv("b5c6")));
        assert!(!board.has_legal_en_passant());
    }

    #[test]
    fn test_checkmate_and_stalemate() {
        let mate = Board::from_fen("R6k/6pp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(mate.is_checkmate());
        assert!(!mate.is_stalemate());

        let stale = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stale.is_stalemate());
        assert!(!stale.is_checkmate());
    }

    #[test]
    fn test_perft_divide_sums_to_perft() {
        let board = Board::new();
        let split = board.perft_divide(2);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), board.perft(2));
    }
}
