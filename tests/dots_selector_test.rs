//! Tests for the computer's move policy over randomized boards.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use strictly_boxes::{Coord, Grid, MoveSelector, boxes_closed_by, exposure, simulate_reply};

/// Draws a random share of the edges, leaving at least one undrawn.
fn random_board(rng: &mut StdRng, rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    let mut edges: Vec<Coord> = grid.edges().collect();
    edges.shuffle(rng);
    let keep = rng.gen_range(0..edges.len());
    for &edge in &edges[..keep] {
        grid.mark_drawn(edge).unwrap();
    }
    grid
}

#[test]
fn test_capture_always_taken_first() {
    let mut rng = StdRng::seed_from_u64(2024);
    for round in 0..300 {
        let mut grid = random_board(&mut rng, 6, 6);
        let first_capture = grid
            .undrawn_edges()
            .find(|&e| boxes_closed_by(&grid, e).unwrap() > 0);

        let mut selector = MoveSelector::seeded(round);
        let choice = selector.choose_move(&mut grid).unwrap();
        assert!(grid.shadow_is_clear());

        if let Some(expected) = first_capture {
            assert_eq!(choice, Some(expected), "round {round}");
        }
    }
}

#[test]
fn test_choice_follows_exposure_tiers() {
    let mut rng = StdRng::seed_from_u64(77);
    for round in 0..300 {
        let mut grid = random_board(&mut rng, 6, 8);
        let undrawn: Vec<Coord> = grid.undrawn_edges().collect();
        if undrawn
            .iter()
            .any(|&e| boxes_closed_by(&grid, e).unwrap() > 0)
        {
            continue;
        }

        let least = undrawn
            .iter()
            .map(|&e| exposure(&grid, e).unwrap())
            .min()
            .unwrap();
        let pool: Vec<Coord> = undrawn
            .iter()
            .copied()
            .filter(|&e| exposure(&grid, e).unwrap() == least)
            .collect();

        let mut selector = MoveSelector::seeded(round);
        let choice = selector.choose_move(&mut grid).unwrap().unwrap();
        assert!(pool.contains(&choice), "round {round}: {choice} not least exposed");

        if least >= 2 {
            let gifts: Vec<usize> = pool
                .iter()
                .map(|&e| simulate_reply(&mut grid, e).unwrap())
                .collect();
            let fewest = *gifts.iter().min().unwrap();
            let expected = pool[gifts.iter().position(|&g| g == fewest).unwrap()];
            assert_eq!(choice, expected, "round {round}");
        }
        assert!(grid.shadow_is_clear());
    }
}

#[test]
fn test_last_edge_completing_box_is_chosen() {
    let mut grid = Grid::new(4, 4).unwrap();
    let last = Coord::new(3, 4);
    let others: Vec<Coord> = grid.edges().filter(|&e| e != last).collect();
    for edge in others {
        grid.mark_drawn(edge).unwrap();
    }
    let mut selector = MoveSelector::seeded(0);
    assert_eq!(selector.choose_move(&mut grid).unwrap(), Some(last));
}

#[test]
fn test_never_picks_exposed_edge_while_safe_one_exists() {
    // Two boxes on the left column have two sides each; the right column
    // is untouched.
    let mut grid = Grid::new(4, 4).unwrap();
    for edge in [(0, 1), (1, 0), (3, 0), (4, 1)] {
        grid.mark_drawn(edge.into()).unwrap();
    }
    let safe: Vec<Coord> = grid
        .undrawn_edges()
        .filter(|&e| exposure(&grid, e).unwrap() == 0)
        .collect();
    assert!(!safe.is_empty());

    let mut selector = MoveSelector::with_rng(StdRng::seed_from_u64(5));
    for _ in 0..500 {
        let edge = selector.choose_move(&mut grid).unwrap().unwrap();
        assert!(safe.contains(&edge), "picked {edge}");
    }
}

#[test]
fn test_filled_board_has_no_move() {
    let mut grid = Grid::new(2, 4).unwrap();
    let edges: Vec<Coord> = grid.edges().collect();
    for edge in edges {
        grid.mark_drawn(edge).unwrap();
    }
    assert_eq!(MoveSelector::seeded(9).choose_move(&mut grid).unwrap(), None);
}
