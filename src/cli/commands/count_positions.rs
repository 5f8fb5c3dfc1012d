//! Count positions command - count reachable positions up to a given depth.

use classic_chess::board::Board;
use classic_chess::position_counter::{kiwipete, run_count_positions};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    /// Start from the Kiwipete test position instead of the opening.
    #[structopt(short, long)]
    pub kiwipete: bool,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = if self.kiwipete {
            kiwipete()
        } else {
            Board::starting_position()
        };
        println!("{}", board);
        run_count_positions(&board, self.depth);
    }
}
