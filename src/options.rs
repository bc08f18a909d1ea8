use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "A tool to pack tetromino pieces into the smallest square board")]
pub struct Options {
    /// The path to the piece file to pack.
    pub path: PathBuf,

    /// The maximum number of board sizes to try before giving up. The first
    /// attempt uses the smallest board whose area can hold every piece;
    /// each following attempt grows the board by one.
    #[structopt(long, default_value = "3")]
    pub max_attempts: u32,
}
