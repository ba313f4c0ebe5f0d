// src/bin/cli.rs
use color_eyre::eyre::eyre;
use rozklad_scrape::cli::{self, Action};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))? {
        Action::Help => {
            eprint!("{}", cli::HELP);
            Ok(())
        }
        Action::Run(params) => cli::run(params).map_err(|e| eyre!("{e}")),
    }
}
