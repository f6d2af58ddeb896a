use super::{
    bishop_attacks, queen_attacks, rook_attacks, Bitboard, Board, Move, MoveList, PieceKind,
    Square, KING_ATTACKS, KNIGHT_ATTACKS,
};
use crate::board::Piece;

impl Board {
    pub(super) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let targets = self.target_mask();
        for from in self.pieces(self.side_to_move, PieceKind::Knight) {
            for to in Bitboard(KNIGHT_ATTACKS[from.index()]) & targets {
                moves.push(Move::new(from, to));
            }
        }
    }

    pub(super) fn generate_slider_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let targets = self.target_mask();
        let occ = self.all_occupied.0;

        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            for from in self.pieces(color, kind) {
                let idx = from.index();
                let attacks = match kind {
                    PieceKind::Bishop => bishop_attacks(idx, occ),
                    PieceKind::Rook => rook_attacks(idx, occ),
                    _ => queen_attacks(idx, occ),
                };
                for to in Bitboard(attacks) & targets {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    pub(super) fn generate_king_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let Some(from) = self.king_square(color) else {
            return;
        };
        for to in Bitboard(KING_ATTACKS[from.index()]) & self.target_mask() {
            moves.push(Move::new(from, to));
        }
        self.generate_castling_moves(from, moves);
    }

    /// Castling needs the right, king and rook on their home squares, an
    /// empty path between them and a king not currently in check. The
    /// transit square is checked by the legality filter.
    fn generate_castling_moves(&self, king: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let back = color.back_rank();
        if king.rank() != back || king.file() != 4 {
            return;
        }
        if self.castling_rights.is_empty() || self.king_attacked(color) {
            return;
        }

        let rook = Piece::new(color, PieceKind::Rook);
        for (kingside, rook_file, between, king_to) in [
            (true, 7, &[5usize, 6][..], 6),
            (false, 0, &[1usize, 2, 3][..], 2),
        ] {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let rook_home = Square::new(back, rook_file);
            if rook_home.and_then(|sq| self.piece_at(sq)) != Some(rook) {
                continue;
            }
            let path_clear = between
                .iter()
                .filter_map(|&file| Square::new(back, file))
                .all(|sq| self.is_empty(sq));
            if let (true, Some(to)) = (path_clear, Square::new(back, king_to)) {
                moves.push(Move::new(king, to));
            }
        }
    }
}
