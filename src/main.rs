use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::ClassicChess;

fn main() {
    env_logger::init();
    ClassicChess::from_args().execute();
}
