//! cuejump binary entry point

mod commands;

use clap::{CommandFactory, Parser};

use cuejump::cli::{Cli, Commands, ConfigAction};

fn main() {
    cuejump::logging::init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::View {
            transcript,
            video,
            start_column,
            text_column,
            player,
        } => commands::view::handle_view(transcript, video, start_column, text_column, player),

        Commands::Check {
            transcript,
            strict,
            verbose,
            start_column,
            text_column,
        } => commands::check::handle_check(transcript, strict, verbose, start_column, text_column),

        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate { yes } => commands::config::handle_migrate(yes),
        },

        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
