use abbot::board::cozy::Position;
use abbot::search::eval::{evaluate, evaluate_positional, EvalMode};

#[test]
fn knight_center_better_than_rim() {
    // White: Kh1, Nd4 vs Na1; Black: Ka8.
    let center = Position::from_fen("k7/8/8/8/3N4/8/8/7K w - - 0 1").unwrap();
    let rim = Position::from_fen("k7/8/8/8/8/8/8/N6K w - - 0 1").unwrap();
    let c = evaluate_positional(&center);
    let r = evaluate_positional(&rim);
    assert!(c > r, "center eval {c} should be greater than rim {r}");
    // Material alone cannot tell them apart.
    assert_eq!(evaluate(&center), evaluate(&rim));
}

#[test]
fn pawn_advanced_better_than_back() {
    let advanced = Position::from_fen("k7/8/8/8/4P3/8/8/7K w - - 0 1").unwrap();
    let back = Position::from_fen("k7/8/8/8/8/8/4P3/7K w - - 0 1").unwrap();
    let a = evaluate_positional(&advanced);
    let b = evaluate_positional(&back);
    assert_eq!(a - b, 20 - (-20));
}

#[test]
fn black_pieces_read_mirrored_tables() {
    // The same structure with colours swapped and ranks flipped scores as the negation.
    let white = Position::from_fen("4k3/8/8/8/3N4/8/4P3/4K3 w - - 0 1").unwrap();
    let black = Position::from_fen("4k3/4p3/8/3n4/8/8/8/4K3 b - - 0 1").unwrap();
    assert_eq!(evaluate_positional(&white), -evaluate_positional(&black));
    assert_eq!(evaluate(&white), -evaluate(&black));
}

#[test]
fn scores_stay_inside_the_bound() {
    // Six white queens against a bare king.
    let pos = Position::from_fen("4k3/8/8/8/8/8/QQQ5/QQQ1K3 w - - 0 1").unwrap();
    for mode in [EvalMode::Material, EvalMode::Positional] {
        let v = mode.evaluate(&pos);
        assert!(v > 0 && v < mode.bound(), "{mode:?}: {v} vs bound {}", mode.bound());
    }
    assert_eq!(evaluate(&pos), 54);
}
