mod input;
mod options;
mod render;

use std::{process, time::Instant};

use structopt::StructOpt;
use tetros::Packer;

use crate::options::Options;

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    let timer = Instant::now();

    let shapes = input::read_piece_file(&options.path)?;

    let packer = Packer::new().max_attempts(options.max_attempts);
    let packing = packer.pack(&shapes)?;

    print!("{}", render::render(packing.grid()));
    println!(
        "Program took {:.2} seconds to finish",
        timer.elapsed().as_secs_f64()
    );

    Ok(())
}
