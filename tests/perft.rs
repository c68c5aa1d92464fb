use abbot::board::cozy::Position;
use abbot::board::perft;

#[test]
fn perft_startpos_small_depths() {
    let mut b = Position::startpos();
    assert_eq!(perft(&mut b, 1), 20);
    assert_eq!(perft(&mut b, 2), 400);
    assert_eq!(perft(&mut b, 3), 8902);
    assert_eq!(b.ply(), 0);
}

#[test]
fn perft_kiwipete() {
    let mut b = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    let fen = b.fen();
    assert_eq!(perft(&mut b, 1), 48);
    assert_eq!(perft(&mut b, 2), 2039);
    assert_eq!(b.fen(), fen);
}
