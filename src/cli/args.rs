//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::count_positions::CountPositionsArgs;

#[derive(StructOpt)]
#[structopt(
    name = "classic_chess",
    about = "A chess rules engine: legal moves, check, castling and en passant ♛"
)]
pub enum ClassicChess {
    #[structopt(
        name = "count-positions",
        about = "Count the number of reachable positions for each depth up to `--depth` (default: 4), and report the time it took to do so. Counts from the starting position unless `--kiwipete` is given."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for ClassicChess {
    fn execute(self) {
        match self {
            Self::CountPositions(cmd) => cmd.execute(),
        }
    }
}
