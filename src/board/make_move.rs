use super::{Board, Color, Move, Piece, PieceKind, Square};

impl Board {
    /// Play `mv` without checking legality.
    ///
    /// Castling, en passant, double pushes and promotions are recognised from
    /// the position itself. A pawn reaching the last rank without a
    /// promotion kind becomes a queen. Callers are expected to pass moves
    /// from [`Board::legal_moves`] or the pseudo-legal generator.
    pub(crate) fn play_unchecked(&mut self, mv: Move) {
        let color = self.side_to_move;
        let (from, to) = (mv.from(), mv.to());

        // Nothing of the side to move on the origin: leave the board as is
        let Some(moving) = self.piece_at(from).filter(|piece| piece.color == color) else {
            return;
        };

        let en_passant = self.is_en_passant(mv);
        let castling = self.is_castling(mv);
        let mut captured = false;

        if en_passant {
            if let Some(victim_sq) = to.offset(-color.pawn_direction(), 0) {
                self.remove_piece(victim_sq, Piece::new(color.opponent(), PieceKind::Pawn));
                captured = true;
            }
        } else if let Some(victim) = self.piece_at(to) {
            self.remove_piece(to, victim);
            captured = true;
        }

        self.remove_piece(from, moving);
        let placed = if moving.kind == PieceKind::Pawn && to.rank() == color.pawn_promotion_rank()
        {
            let kind = mv
                .promotion()
                .filter(|kind| kind.is_promotable())
                .unwrap_or(PieceKind::Queen);
            Piece::new(color, kind)
        } else {
            moving
        };
        self.set_piece(to, placed);

        if castling {
            let kingside = to.file() > from.file();
            let (rook_from, rook_to) = if kingside { (7, 5) } else { (0, 3) };
            if let (Some(rook_from), Some(rook_to)) = (
                Square::new(from.rank(), rook_from),
                Square::new(from.rank(), rook_to),
            ) {
                let rook = Piece::new(color, PieceKind::Rook);
                self.remove_piece(rook_from, rook);
                self.set_piece(rook_to, rook);
            }
        }

        self.en_passant_target = if moving.kind == PieceKind::Pawn
            && from.rank().abs_diff(to.rank()) == 2
        {
            from.offset(color.pawn_direction(), 0)
        } else {
            None
        };

        if moving.kind == PieceKind::King {
            self.castling_rights.remove_color(color);
        }
        self.revoke_corner_right(from);
        self.revoke_corner_right(to);

        if moving.kind == PieceKind::Pawn || captured {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();
    }

    /// Anything leaving or arriving on a rook's home corner ends the
    /// matching castling right.
    fn revoke_corner_right(&mut self, sq: Square) {
        let color = match sq.rank() {
            0 => Color::White,
            7 => Color::Black,
            _ => return,
        };
        match sq.file() {
            0 => self.castling_rights.remove(color, false),
            7 => self.castling_rights.remove(color, true),
            _ => {}
        }
    }

    /// Result of playing `mv` on a copy of this board.
    ///
    /// Legality is not checked. A move whose origin holds no piece of the
    /// side to move yields an unchanged copy.
    #[must_use]
    pub fn after(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.play_unchecked(mv);
        next
    }

    /// True if `mv` removes an enemy piece, en passant included.
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        let enemy = self.side_to_move.opponent();
        self.occupied_by(enemy).contains(mv.to()) || self.is_en_passant(mv)
    }

    /// True if `mv` is a diagonal pawn step onto the en passant target with
    /// an enemy pawn behind it.
    #[must_use]
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.en_passant_target == Some(mv.to())
            && mv.from().file() != mv.to().file()
            && self
                .pieces(self.side_to_move, PieceKind::Pawn)
                .contains(mv.from())
            && self.en_passant_victim_present(mv.to())
    }

    /// The target only counts when it is empty and an enemy pawn stands
    /// behind it.
    pub(crate) fn en_passant_victim_present(&self, target: Square) -> bool {
        let color = self.side_to_move;
        self.is_empty(target)
            && target
                .offset(-color.pawn_direction(), 0)
                .is_some_and(|sq| self.pieces(color.opponent(), PieceKind::Pawn).contains(sq))
    }

    /// True if `mv` is a king moving two files.
    #[must_use]
    pub fn is_castling(&self, mv: Move) -> bool {
        self.pieces(self.side_to_move, PieceKind::King)
            .contains(mv.from())
            && mv.from().file().abs_diff(mv.to().file()) == 2
    }

    #[must_use]
    pub fn is_double_pawn_push(&self, mv: Move) -> bool {
        self.pieces(self.side_to_move, PieceKind::Pawn)
            .contains(mv.from())
            && mv.from().rank().abs_diff(mv.to().rank()) == 2
    }

    /// True if `mv` resets the half-move clock (pawn move or capture).
    #[must_use]
    pub fn is_zeroing(&self, mv: Move) -> bool {
        self.pieces(self.side_to_move, PieceKind::Pawn)
            .contains(mv.from())
            || self.is_capture(mv)
    }

    /// True if the opponent is in check after `mv`.
    #[must_use]
    pub fn gives_check(&self, mv: Move) -> bool {
        self.after(mv).is_in_check()
    }
}
