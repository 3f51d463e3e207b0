// src/bin/cli.rs
use dcs_minors::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cli::run()?;
    Ok(())
}
