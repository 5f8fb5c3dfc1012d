use std::time::{Duration, Instant};

use log::info;
use rayon::prelude::*;

use crate::board::Board;

/// Counts the positions reachable from `board` in exactly `depth` plies,
/// playing every move through `Player::make_move`. The root moves are
/// split across the rayon thread pool.
pub fn count_positions(board: &Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    player
        .legal_moves()
        .par_iter()
        .map(|chess_move| {
            let transition = player.make_move(chess_move);
            if transition.status().is_done() {
                count_sequentially(transition.to_board(), depth - 1)
            } else {
                0
            }
        })
        .sum()
}

fn count_sequentially(board: &Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    let mut count = 0;
    for chess_move in player.legal_moves() {
        let transition = player.make_move(chess_move);
        if transition.status().is_done() {
            count += count_sequentially(transition.to_board(), depth - 1);
        }
    }
    count
}

/// Counts positions for every depth up to `depth` and reports the rate.
pub fn run_count_positions(board: &Board, depth: u8) {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let starting_time = Instant::now();
        let count = count_positions(board, depth);
        let duration = starting_time.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();
        info!("depth {} counted in {:?}", depth, duration);

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}

/// A well-known test position exercising castles, en passant and pins.
pub fn kiwipete() -> Board {
    crate::chess_position! {
        r...k..r
        p.ppqpb.
        bn..pnp.
        ...PN...
        .p..P...
        ..N..Q.p
        PPPBBPPP
        R...K..R
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_the_position_itself() {
        assert_eq!(1, count_positions(&Board::starting_position(), 0));
    }

    #[test]
    fn test_starting_position() {
        let board = Board::starting_position();
        assert_eq!(20, count_positions(&board, 1));
        assert_eq!(400, count_positions(&board, 2));
        assert_eq!(8902, count_positions(&board, 3));
    }

    #[test]
    fn test_kiwipete() {
        let board = kiwipete();
        assert_eq!(48, count_positions(&board, 1));
        assert_eq!(2039, count_positions(&board, 2));
    }

    #[test]
    fn test_parallel_and_sequential_counts_agree() {
        let board = kiwipete();
        assert_eq!(count_sequentially(&board, 2), count_positions(&board, 2));
    }
}
