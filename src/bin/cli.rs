// src/bin/cli.rs
use dorkgen::{cli, log::LogTarget};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dorkgen::log::init(LogTarget::Stderr);
    cli::run(std::env::args().skip(1))
}
