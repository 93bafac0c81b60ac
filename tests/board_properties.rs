//! Property tests for board invariants.

use nqueens_state::board::attacking_pairs;
use nqueens_state::random::create_rng;
use nqueens_state::{Board, BoardError, Direction, PlacementError};
use proptest::prelude::*;

/// A size in `1..=12` with a valid placement for it.
fn placement() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..=12).prop_flat_map(|n| (Just(n), prop::collection::vec(0..n, n)))
}

/// Two valid placements of the same size.
fn placement_pair() -> impl Strategy<Value = (usize, Vec<usize>, Vec<usize>)> {
    (1usize..=12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(0..n, n),
            prop::collection::vec(0..n, n),
        )
    })
}

proptest! {
    #[test]
    fn random_boards_are_valid(size in 1usize..=16, seed in any::<u64>()) {
        let board = Board::random(size, &mut create_rng(seed)).unwrap();
        prop_assert_eq!(board.rows().len(), size);
        prop_assert!(board.rows().iter().all(|&r| r < size));
        prop_assert_eq!(board.max_value(), size * (size - 1) / 2);
        prop_assert!(board.value() <= board.max_value());
    }

    #[test]
    fn cached_value_matches_heuristic((size, rows) in placement()) {
        let board = Board::from_placement(size, rows.clone()).unwrap();
        prop_assert_eq!(board.value(), board.max_value() - attacking_pairs(&rows));
    }

    #[test]
    fn out_of_range_row_is_rejected((size, mut rows) in placement(), col in any::<prop::sample::Index>()) {
        let col = col.index(size);
        rows[col] = size;
        let err = Board::from_placement(size, rows).unwrap_err();
        let is_row_error = matches!(
            err,
            BoardError::InvalidPlacement(PlacementError::RowOutOfRange { .. })
        );
        prop_assert!(is_row_error);
    }

    #[test]
    fn wrong_length_is_rejected((size, mut rows) in placement()) {
        rows.push(0);
        let err = Board::from_placement(size, rows).unwrap_err();
        let is_length_error = matches!(
            err,
            BoardError::InvalidPlacement(PlacementError::WrongLength { .. })
        );
        prop_assert!(is_length_error);
    }

    #[test]
    fn move_then_reverse_is_identity((size, rows) in placement()) {
        let board = Board::from_placement(size, rows).unwrap();
        for col in 0..size {
            for dir in board.legal_moves(col).unwrap().iter() {
                let back = board
                    .apply_move(col, dir)
                    .unwrap()
                    .apply_move(col, dir.reversed())
                    .unwrap();
                prop_assert_eq!(&back, &board);
                prop_assert_eq!(back.value(), board.value());
            }
            let moves = board.legal_moves(col).unwrap();
            if moves.contains(Direction::Up) && moves.contains(Direction::Down) {
                let back = board.move_up(col).unwrap().move_down(col).unwrap();
                prop_assert_eq!(&back, &board);
            }
        }
    }

    #[test]
    fn illegal_moves_are_boundary_violations((size, rows) in placement()) {
        let board = Board::from_placement(size, rows).unwrap();
        for col in 0..size {
            let moves = board.legal_moves(col).unwrap();
            for dir in [Direction::Up, Direction::Down] {
                let result = board.apply_move(col, dir);
                if moves.contains(dir) {
                    prop_assert!(result.is_ok());
                } else {
                    let is_boundary = matches!(result, Err(BoardError::BoundaryViolation { .. }));
                    prop_assert!(is_boundary);
                }
            }
        }
    }

    #[test]
    fn neighborhood_size_and_shape((size, rows) in placement()) {
        let board = Board::from_placement(size, rows).unwrap();
        let expected: usize = (0..size).map(|c| board.legal_moves(c).unwrap().len()).sum();
        let neighbors = board.all_neighbors();
        prop_assert_eq!(neighbors.len(), expected);
        for n in &neighbors {
            let changed: Vec<usize> = (0..size)
                .filter(|&c| n.rows()[c] != board.rows()[c])
                .collect();
            prop_assert_eq!(changed.len(), 1);
            let c = changed[0];
            prop_assert_eq!(n.rows()[c].abs_diff(board.rows()[c]), 1);
        }
    }

    #[test]
    fn crossover_at_splits_columns((size, a, b) in placement_pair(), point in any::<prop::sample::Index>()) {
        let left = Board::from_placement(size, a.clone()).unwrap();
        let right = Board::from_placement(size, b.clone()).unwrap();
        let p = point.index(size + 1);
        let (c1, c2) = left.crossover_at(&right, p).unwrap();
        if p == 0 || p == size {
            prop_assert_eq!(&c1, &left);
            prop_assert_eq!(&c2, &right);
        } else {
            prop_assert_eq!(&c1.rows()[..p], &a[..p]);
            prop_assert_eq!(&c1.rows()[p..], &b[p..]);
            prop_assert_eq!(&c2.rows()[..p], &b[..p]);
            prop_assert_eq!(&c2.rows()[p..], &a[p..]);
        }
        prop_assert_eq!(c1.value(), c1.max_value() - attacking_pairs(c1.rows()));
        prop_assert_eq!(c2.value(), c2.max_value() - attacking_pairs(c2.rows()));
    }
}

#[test]
fn single_queen_board() {
    let board = Board::from_placement(1, vec![0]).unwrap();
    assert_eq!(board.max_value(), 0);
    assert_eq!(board.value(), 0);
    assert!(board.legal_moves(0).unwrap().is_empty());
    assert!(board.all_neighbors().is_empty());
}

#[test]
fn known_solutions() {
    let four = Board::from_placement(4, vec![1, 3, 0, 2]).unwrap();
    assert_eq!(four.value(), four.max_value());

    let eight = Board::from_placement(8, vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
    assert_eq!(eight.value(), 28);
    assert_eq!(eight.max_value(), 28);
}

#[test]
fn hill_climb_on_neighborhood_never_worsens() {
    // Steepest ascent over all_neighbors, as a consumer would write it.
    let mut rng = create_rng(42);
    let mut current = Board::random(8, &mut rng).unwrap();
    loop {
        let best = current
            .all_neighbors()
            .into_iter()
            .max_by_key(|n| n.value())
            .unwrap();
        if best.value() <= current.value() {
            break;
        }
        assert!(best.value() > current.value());
        current = best;
    }
    assert!(current.value() <= current.max_value());
}
