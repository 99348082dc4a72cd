use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_marks() {
    assert_eq!(Player::One.mark(), Mark::X);
    assert_eq!(Player::Two.mark(), Mark::O);
    assert_eq!(Player::One.number(), 1);
    assert_eq!(Player::Two.number(), 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.to_index(3), 5);
    assert_eq!(pos.to_index(8), 10);

    let back = Pos::from_index(10, 8);
    assert_eq!(back, pos);
}

#[test]
fn test_pos_within() {
    assert!(Pos::new(0, 0).is_within(3));
    assert!(Pos::new(2, 2).is_within(3));
    assert!(!Pos::new(3, 0).is_within(3));
    assert!(!Pos::new(0, 3).is_within(3));
    assert!(Pos::new(7, 7).is_within(8));
}

#[test]
fn test_size_bounds() {
    assert!(!is_valid_size(2));
    assert!(is_valid_size(MIN_SIZE));
    assert!(is_valid_size(MAX_SIZE));
    assert!(!is_valid_size(9));
}

#[test]
fn test_new_board_is_empty() {
    for size in MIN_SIZE..=MAX_SIZE {
        let board = Board::new(size);
        assert_eq!(board.size(), size);
        assert_eq!(board.mark_count(), 0);
        assert_eq!(board.iter().count(), size * size);
        assert!(board.iter().all(|(_, m)| m == Mark::Empty));
    }
}

#[test]
fn test_place_and_count() {
    let mut board = Board::new(3);
    board.place(Pos::new(1, 1), Mark::X);
    assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
    assert!(!board.is_empty(Pos::new(1, 1)));
    assert!(board.is_empty(Pos::new(0, 0)));
    assert_eq!(board.mark_count(), 1);
}

#[test]
fn test_off_board_access() {
    let mut board = Board::new(3);
    board.place(Pos::new(5, 5), Mark::O);
    assert_eq!(board.mark_count(), 0);
    assert_eq!(board.get(Pos::new(5, 5)), Mark::Empty);
    assert!(!board.is_empty(Pos::new(5, 5)));
}

#[test]
fn test_full_board() {
    let mut board = Board::new(4);
    for idx in 0..16 {
        board.place(Pos::from_index(idx, 4), Mark::O);
    }
    assert_eq!(board.mark_count(), 16);
    assert!((0..16).all(|idx| !board.is_empty(Pos::from_index(idx, 4))));
}
