use crate::board::types::PROMOTION_KINDS;
use super::{Bitboard, Board, Move, MoveList, PieceKind, Square, PAWN_ATTACKS};

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, promotion_rank: usize) {
    if to.rank() == promotion_rank {
        for kind in PROMOTION_KINDS {
            moves.push(Move::with_promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

impl Board {
    pub(super) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();
        let enemies = self.occupied_by(color.opponent()) & self.target_mask();

        for from in self.pieces(color, PieceKind::Pawn) {
            if let Some(one) = from.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
                push_pawn_move(moves, from, one, promotion_rank);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
                        moves.push(Move::new(from, two));
                    }
                }
            }

            let attacks = Bitboard(PAWN_ATTACKS[color.index()][from.index()]);
            for to in attacks & enemies {
                push_pawn_move(moves, from, to, promotion_rank);
            }

            if let Some(target) = self.en_passant_target {
                if attacks.contains(target) && self.en_passant_victim_present(target) {
                    moves.push(Move::new(from, target));
                }
            }
        }
    }
}
