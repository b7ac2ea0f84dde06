use changelog_bump::{Args, Config, Outcome, orchestrator};
use clap::Parser;
use color_eyre::eyre::Result;
use log::*;
use std::process::ExitCode;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("changelog_bump")
        .build();

    // CI logs collect stdout, so diagnostics go there too
    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    let result =
        Config::try_from(&args).and_then(|config| orchestrator::run(&config));

    match result {
        Ok(Outcome::Previewed { content, .. }) => {
            print!("{content}");
            Ok(ExitCode::SUCCESS)
        }
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!("Error: {err}");
            if err.is_configuration() {
                info!("run with --help to see the accepted inputs");
            }
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
