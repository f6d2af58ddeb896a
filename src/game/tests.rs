//! Session-level tests: transitions, draws and atomic rejection.

use super::*;
use crate::board::Move;

fn play(session: &mut Session, moves: &[&str]) -> Status {
    let mut status = session.status();
    for text in moves {
        status = session
            .apply_uci(text)
            .unwrap_or_else(|err| panic!("{text} rejected: {err}"));
    }
    status
}

#[test]
fn test_new_session() {
    let session = Session::new();
    assert_eq!(session.status(), Status::Active);
    assert_eq!(session.legal_moves().len(), 20);
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.material_balance(), 0);
    assert_eq!(session.repetition_count(), 1);
    assert_eq!(session.result(), GameResult::Ongoing);
}

#[test]
fn test_scholars_mate() {
    let mut session = Session::new();
    let status = play(
        &mut session,
        &["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"],
    );
    assert_eq!(status, Status::Checkmate);
    assert!(session.is_game_over());
    assert!(session.legal_moves().is_empty());
    assert_eq!(session.result(), GameResult::WhiteWins);
    assert_eq!(session.move_count(), 7);
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut session = Session::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(session.status(), Status::Stalemate);
    let before = session.position_string();
    assert!(matches!(
        session.apply_uci("h8g8"),
        Err(GameError::GameOver {
            status: Status::Stalemate
        })
    ));
    assert!(matches!(
        session.apply_san("Kg8"),
        Err(GameError::GameOver { .. })
    ));
    assert_eq!(session.position_string(), before);
}

#[test]
fn test_illegal_moves_leave_session_untouched() {
    let mut session = Session::new();
    play(&mut session, &["e2e4", "e7e5", "g1f3"]);
    let fen = session.position_string();
    let count = session.move_count();

    for text in ["d8d2", "g8e4", "e8e6", "a7a5a"] {
        assert!(session.apply_uci(text).is_err(), "{text} should be rejected");
        assert_eq!(session.position_string(), fen);
        assert_eq!(session.move_count(), count);
    }
    match session.apply_uci("d8d2") {
        Err(GameError::IllegalMove { notation }) => assert_eq!(notation, "d8d2"),
        other => panic!("expected IllegalMove, got {other:?}"),
    }
    assert!(matches!(
        session.apply_uci("z9z9"),
        Err(GameError::InvalidMoveText(_))
    ));
}

#[test]
fn test_material_after_capture() {
    let mut session = Session::new();
    play(&mut session, &["e2e4", "d7d5", "e4d5"]);
    assert_eq!(session.material_balance(), 1);
}

#[test]
fn test_promotion_policy() {
    let fen = "8/P7/8/8/8/8/8/K1k5 w - - 0 1";

    let mut session = Session::from_fen(fen).unwrap();
    session.apply_uci("a7a8").unwrap();
    assert_eq!(
        session.record().moves().last().and_then(|mv| mv.promotion()),
        Some(crate::board::PieceKind::Queen)
    );

    let strict = RulesConfig::new().with_promotion_policy(PromotionPolicy::Reject);
    let mut session = Session::from_fen_with_config(fen, strict).unwrap();
    assert!(matches!(
        session.apply_uci("a7a8"),
        Err(GameError::IllegalMove { .. })
    ));
    assert!(session.apply_uci("a7a8r").is_ok());
}

#[test]
fn test_repetition_counts_start_position() {
    let mut session = Session::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let cycle = ["a1a2", "e8d8", "a2a1", "d8e8"];
    assert_eq!(play(&mut session, &cycle), Status::Active);
    assert_eq!(session.repetition_count(), 2);
    assert_eq!(play(&mut session, &cycle), Status::DrawRepetition);
    assert_eq!(session.move_count(), 8);
    assert_eq!(session.result(), GameResult::Draw);
}

#[test]
fn test_castling_rights_distinguish_positions() {
    let mut session = Session::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    let cycle = ["a1a2", "e8d8", "a2a1", "d8e8"];
    // The first rook move drops the right, so the start never recurs and
    // the first position to be seen three times is the one after a1a2.
    assert_eq!(play(&mut session, &cycle), Status::Active);
    assert_eq!(play(&mut session, &cycle), Status::Active);
    assert_eq!(session.repetition_count(), 2);
    assert_eq!(play(&mut session, &["a1a2"]), Status::DrawRepetition);
    assert_eq!(session.move_count(), 9);
}

#[test]
fn test_insufficient_material_after_capture() {
    let mut session = Session::from_fen("k7/8/8/8/8/8/1r6/K7 w - - 0 1").unwrap();
    assert_eq!(session.status(), Status::Active);
    assert_eq!(play(&mut session, &["a1b2"]), Status::DrawInsufficientMaterial);
}

#[test]
fn test_checkmate_beats_fifty_move_rule() {
    let mut session = Session::from_fen("7k/8/6K1/8/8/8/8/R7 w - - 99 1").unwrap();
    assert_eq!(play(&mut session, &["a1a8"]), Status::Checkmate);
}

#[test]
fn test_fifty_move_rule_at_hundredth_half_move() {
    // The blocked pawns keep material on the board while the kings walk.
    // One king tours its own half while the other steps back and forth, so
    // no position comes up a third time.
    let mut session = Session::from_fen("k7/8/8/p7/P6K/8/8/8 w - - 0 1").unwrap();
    let white_tour = [
        "h4", "h3", "g3", "f3", "e3", "d3", "c3", "b3", "a3", "a2", "b2", "c2", "d2", "e2", "f2",
        "g2", "h2", "h1", "g1", "f1", "e1", "d1", "c1", "b1", "a1",
    ];
    let black_tour = [
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", "h7", "g7", "f7", "e7", "d7", "c7", "b7",
        "a7", "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", "h5", "g5", "f5",
    ];

    let mut script = Vec::new();
    for (i, step) in white_tour.windows(2).enumerate() {
        script.push(format!("{}{}", step[0], step[1]));
        script.push(if i % 2 == 0 { "a8b8" } else { "b8a8" }.to_string());
    }
    for (i, step) in black_tour.windows(2).enumerate() {
        script.push(if i % 2 == 0 { "a1b1" } else { "b1a1" }.to_string());
        script.push(format!("{}{}", step[0], step[1]));
    }
    assert_eq!(script.len(), 100);

    for (ply, text) in (1..).zip(&script) {
        let status = session
            .apply_uci(text)
            .unwrap_or_else(|err| panic!("{text} rejected at ply {ply}: {err}"));
        assert!(session.repetition_count() < 3);
        if ply < 100 {
            assert_eq!(status, Status::Active, "ply {ply}");
        } else {
            assert_eq!(status, Status::DrawFiftyMove);
        }
    }
    assert_eq!(session.board().halfmove_clock(), 100);
}

#[test]
fn test_listed_moves_are_accepted() {
    let session = Session::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    for text in session.legal_move_texts() {
        let mut copy = session.clone();
        assert!(copy.apply_uci(&text).is_ok(), "{text} listed but rejected");
    }

    let drawn = Session::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
    assert_eq!(drawn.status(), Status::DrawFiftyMove);
    assert!(drawn.legal_moves().is_empty());
    assert!(drawn.legal_move_texts().is_empty());
    assert!(!drawn.board().legal_moves().is_empty());
    assert_eq!(drawn.summary().legal_move_count, 0);
}

#[test]
fn test_session_from_built_board() {
    use crate::board::{BoardBuilder, Color, Piece, PieceKind};

    let board = BoardBuilder::new()
        .piece("e1".parse().unwrap(), Piece::new(Color::White, PieceKind::King))
        .piece("h1".parse().unwrap(), Piece::new(Color::White, PieceKind::Rook))
        .piece("e8".parse().unwrap(), Piece::new(Color::Black, PieceKind::King))
        .castle_kingside(Color::White)
        .build()
        .unwrap();
    let mut session = Session::from_board(board, RulesConfig::default());
    assert_eq!(session.apply_san("O-O").unwrap(), Status::Active);
    assert_eq!(session.position_string(), "4k3/8/8/8/8/8/8/5RK1 b - - 1 1");
}

#[test]
fn test_legal_move_texts_sorted() {
    let session = Session::new();
    let texts = session.legal_move_texts();
    assert_eq!(texts.len(), 20);
    assert_eq!(texts.iter().next().map(String::as_str), Some("a2a3"));
    assert!(texts.contains("g1f3"));
}

#[test]
fn test_apply_move_value() {
    let mut session = Session::new();
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(session.apply_move(mv).unwrap(), Status::Active);
    assert_eq!(session.record().moves(), &[mv]);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_summary() {
    let mut session = Session::new();
    play(&mut session, &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);
    let summary = session.summary();
    assert_eq!(summary.status, Status::Checkmate);
    assert_eq!(summary.move_count, 5);
    assert_eq!(summary.legal_move_count, 0);
    assert!(summary.in_check);
    assert_eq!(summary.side_to_move, crate::board::Color::Black);
    assert!(summary.to_string().contains("Checkmate"));
}

#[test]
fn test_sessions_can_move_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();

    let handles: Vec<_> = ["e2e4", "d2d4", "g1f3"]
        .into_iter()
        .map(|first| {
            std::thread::spawn(move || {
                let mut session = Session::new();
                session.apply_uci(first).unwrap();
                session.position_string()
            })
        })
        .collect();
    let positions: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(positions.len(), 3);
    assert_ne!(positions[0], positions[1]);
}
