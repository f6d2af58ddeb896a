//! Property-based tests using proptest.

use crate::board::{Board, Color, Square};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the start, stopping early if
/// the side to move has none.
fn random_walk(seed: u64, plies: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = vec![Board::new()];
    for _ in 0..plies {
        let Some(board) = boards.last() else { break };
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let next = board.after(mv);
        boards.push(next);
    }
    boards
}

proptest! {
    /// Property: FEN round-trip reproduces the same board and move set
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_walk(seed, num_moves) {
            let restored = Board::from_fen(&board.to_fen()).unwrap();
            prop_assert_eq!(&restored, &board);
            let restored_moves = restored.legal_moves();
            let original_moves = board.legal_moves();
            prop_assert_eq!(restored_moves.as_slice(), original_moves.as_slice());
            prop_assert_eq!(restored.is_checkmate(), board.is_checkmate());
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_walk(seed, num_moves) {
            let mover = board.side_to_move();
            for mv in board.legal_moves() {
                let after = board.after(mv);
                let king = after.king_square(mover).unwrap();
                prop_assert!(
                    !after.is_square_attacked(king, mover.opponent()),
                    "{} leaves the king en prise in {}", mv, board.to_fen()
                );
            }
        }
    }

    /// Property: material balance agrees with a square-by-square count
    #[test]
    fn prop_material_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_walk(seed, num_moves) {
            let counted: i32 = (0..64)
                .filter_map(Square::from_index)
                .filter_map(|sq| board.piece_at(sq))
                .map(|piece| match piece.color {
                    Color::White => piece.kind.value(),
                    Color::Black => -piece.kind.value(),
                })
                .sum();
            prop_assert_eq!(board.material_balance(), counted);
            prop_assert_eq!(board.occupied().popcount(), (0..64)
                .filter_map(Square::from_index)
                .filter(|&sq| !board.is_empty(sq))
                .count() as u32);
        }
    }

    /// Property: castling rights are never regained
    #[test]
    fn prop_castling_rights_only_shrink(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let boards = random_walk(seed, num_moves);
        for pair in boards.windows(2) {
            let before = pair[0].castling_rights().as_u8();
            let after = pair[1].castling_rights().as_u8();
            prop_assert_eq!(after & !before, 0);
        }
    }
}
