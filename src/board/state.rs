use std::fmt;

use super::{Bitboard, CastlingRights, Color, Piece, PieceKind, Square};

/// A chess position: piece placement, side to move, castling rights,
/// en passant target and the two move counters.
///
/// Placement is kept as one bitboard per (color, kind) plus occupancy
/// unions; [`Board::piece_at`] gives the square-to-piece view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(back_sq), Some(pawn_sq)) =
                    (Square::new(back, file), Square::new(pawns, file))
                {
                    board.set_piece(back_sq, Piece::new(color, kind));
                    board.set_piece(pawn_sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        let c_idx = piece.color.index();
        self.pieces[c_idx][piece.kind.index()] |= bit;
        self.occupied[c_idx] |= bit;
        self.all_occupied |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, piece: Piece) {
        let bit = !Bitboard::from_square(sq);
        let c_idx = piece.color.index();
        self.pieces[c_idx][piece.kind.index()] &= bit;
        self.occupied[c_idx] &= bit;
        self.all_occupied &= bit;
    }

    /// The piece standing on `sq`, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()].contains(sq))
            .map(|kind| Piece::new(color, kind))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Squares holding pieces of the given color and kind.
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Squares holding pieces of the given color.
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    /// The king square of `color`. Always present for boards built through
    /// this crate; `None` only for internal scratch boards.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, PieceKind::King).first()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn skipped on the previous double push, if that was the
    /// last move. Set whether or not a capture is possible.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Material of White minus material of Black, with P=1, N=3, B=3, R=5, Q=9.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        Color::BOTH
            .iter()
            .flat_map(|&color| {
                PieceKind::ALL.iter().map(move |&kind| {
                    color.sign() * kind.value() * self.pieces(color, kind).popcount() as i32
                })
            })
            .sum()
    }

    /// True when neither side can possibly mate: king versus king, a single
    /// minor piece against a bare king, or only bishops left and all of them
    /// on squares of one colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let heavy_or_pawn = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen];
        if Color::BOTH
            .iter()
            .any(|&c| heavy_or_pawn.iter().any(|&k| !self.pieces(c, k).is_empty()))
        {
            return false;
        }

        let knights = self.pieces(Color::White, PieceKind::Knight)
            | self.pieces(Color::Black, PieceKind::Knight);
        let bishops = self.pieces(Color::White, PieceKind::Bishop)
            | self.pieces(Color::Black, PieceKind::Bishop);

        if knights.popcount() + bishops.popcount() <= 1 {
            return true;
        }

        knights.is_empty()
            && ((bishops & Bitboard::LIGHT_SQUARES).is_empty()
                || (bishops & Bitboard::DARK_SQUARES).is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// ASCII diagram, rank 8 first, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .filter_map(|file| Square::new(rank, file))
                .map(|sq| {
                    self.piece_at(sq)
                        .map_or_else(|| ".".to_string(), |p| p.to_fen_char().to_string())
                })
                .collect();
            write!(f, "{}", row.join(" "))?;
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
