//! Connected groups, liberties and capture of surrounded groups.

use std::collections::HashSet;

use crate::board::Board;
use crate::types::{Cell, Color};

/// Stones 4-connected to `(x, y)` sharing its color. Empty when the cell is empty.
pub fn find_group(board: &Board, x: usize, y: usize) -> Vec<(usize, usize)> {
    let Some(color) = board.color_at(x, y) else {
        return Vec::new();
    };

    let mut group = Vec::new();
    let mut visited = HashSet::from([(x, y)]);
    let mut stack = vec![(x, y)];

    while let Some((cx, cy)) = stack.pop() {
        group.push((cx, cy));

        for (nx, ny) in board.neighbors_of(cx, cy) {
            if board.color_at(nx, ny) == Some(color) && visited.insert((nx, ny)) {
                stack.push((nx, ny));
            }
        }
    }

    group
}

/// Distinct empty cells adjacent to any stone of `group`.
pub fn liberties(board: &Board, group: &[(usize, usize)]) -> HashSet<(usize, usize)> {
    group
        .iter()
        .flat_map(move |&(x, y)| board.neighbors_of(x, y))
        .filter(|&(nx, ny)| !board.is_occupied(nx, ny))
        .collect()
}

/// Removes every opposing group adjacent to `(x, y)` left without liberties.
/// Returns the number of stones removed, to be credited to `moving`.
///
/// Only groups touching the new stone are inspected; no other group can have
/// lost a liberty. The mover's own group is not evaluated.
pub fn capture_adjacent_groups(board: &mut Board, x: usize, y: usize, moving: Color) -> usize {
    let opponent = moving.opponent();
    let mut removed = 0;

    let neighbors: Vec<_> = board.neighbors_of(x, y).collect();
    for (nx, ny) in neighbors {
        // A group reached through an earlier neighbour is already gone.
        if board.color_at(nx, ny) != Some(opponent) {
            continue;
        }

        let group = find_group(board, nx, ny);
        if !liberties(board, &group).is_empty() {
            continue;
        }

        for &(gx, gy) in &group {
            board.set(gx, gy, Cell::Empty);
        }
        log::debug!(
            "{moving:?} captured {} stone(s) at ({nx}, {ny})",
            group.len()
        );
        removed += group.len();
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, Color)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(x, y, color) in stones {
            board.set(x, y, color.into());
        }
        board
    }

    #[test]
    fn group_follows_orthogonal_links_only() {
        let board = board_with(
            5,
            &[
                (1, 1, Color::Black),
                (2, 1, Color::Black),
                (2, 2, Color::Black),
                (3, 3, Color::Black), // diagonal to (2, 2)
                (1, 2, Color::White),
            ],
        );

        let mut group = find_group(&board, 1, 1);
        group.sort();

        assert_eq!(group, vec![(1, 1), (2, 1), (2, 2)]);
        assert_eq!(find_group(&board, 3, 3), vec![(3, 3)]);
        assert!(find_group(&board, 0, 0).is_empty());
    }

    #[test]
    fn liberties_are_counted_once() {
        // (0, 1) touches both (0, 0) and (1, 1).
        let board = board_with(
            3,
            &[(0, 0, Color::Black), (1, 0, Color::Black), (1, 1, Color::Black)],
        );
        let group = find_group(&board, 0, 0);
        let libs = liberties(&board, &group);

        assert_eq!(group.len(), 3);
        assert_eq!(libs, HashSet::from([(0, 1), (2, 0), (2, 1), (1, 2)]));
    }

    #[test]
    fn corner_stone_is_captured() {
        let mut board = board_with(
            19,
            &[(0, 0, Color::Black), (0, 1, Color::White), (1, 0, Color::White)],
        );

        let removed = capture_adjacent_groups(&mut board, 1, 0, Color::White);

        assert_eq!(removed, 1);
        assert_eq!(board.get(0, 0), Cell::Empty);
        assert_eq!(board.count(), (0, 2));
    }

    #[test]
    fn group_with_liberty_survives() {
        let mut board = board_with(
            9,
            &[(4, 4, Color::Black), (3, 4, Color::White), (5, 4, Color::White), (4, 3, Color::White)],
        );
        let before = board.clone();

        let removed = capture_adjacent_groups(&mut board, 4, 3, Color::White);

        assert_eq!(removed, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn whole_chain_is_removed() {
        // Black chain along the top edge, white plays the last liberty at (2, 0).
        let mut board = board_with(
            9,
            &[
                (0, 0, Color::Black),
                (1, 0, Color::Black),
                (0, 1, Color::White),
                (1, 1, Color::White),
                (2, 0, Color::White),
            ],
        );

        let removed = capture_adjacent_groups(&mut board, 2, 0, Color::White);

        assert_eq!(removed, 2);
        assert!(!board.is_occupied(0, 0));
        assert!(!board.is_occupied(1, 0));
    }

    #[test]
    fn separate_groups_are_captured_in_one_move() {
        // White at (1, 0) takes the last liberty of black (0, 0) and black (2, 0).
        let mut board = board_with(
            9,
            &[
                (0, 0, Color::Black),
                (2, 0, Color::Black),
                (0, 1, Color::White),
                (2, 1, Color::White),
                (3, 0, Color::White),
                (1, 0, Color::White),
            ],
        );

        let removed = capture_adjacent_groups(&mut board, 1, 0, Color::White);

        assert_eq!(removed, 2);
        assert_eq!(board.count(), (0, 4));
    }

    #[test]
    fn group_touched_twice_is_counted_once() {
        // Black group wraps around the white stone at (1, 1): (1, 0) and (0, 1)
        // are joined through (0, 0), so both neighbours reach the same group.
        let mut board = board_with(
            3,
            &[
                (0, 0, Color::Black),
                (1, 0, Color::Black),
                (0, 1, Color::Black),
                (2, 0, Color::White),
                (0, 2, Color::White),
                (1, 1, Color::White),
            ],
        );

        let removed = capture_adjacent_groups(&mut board, 1, 1, Color::White);

        assert_eq!(removed, 3);
        assert_eq!(board.count(), (0, 3));
    }

    #[test]
    fn own_group_without_liberties_is_left_in_place() {
        // Black fills the eye at (0, 0) surrounded by white with liberties.
        let mut board = board_with(
            9,
            &[(1, 0, Color::White), (0, 1, Color::White), (0, 0, Color::Black)],
        );

        let removed = capture_adjacent_groups(&mut board, 0, 0, Color::Black);

        assert_eq!(removed, 0);
        assert_eq!(board.color_at(0, 0), Some(Color::Black));
        assert!(liberties(&board, &find_group(&board, 0, 0)).is_empty());
    }
}
