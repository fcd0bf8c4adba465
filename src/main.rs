use clap::Parser;
use iiotstack::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Export {
            ref input,
            ref output_dir,
            ref name,
            force,
        } => iiotstack::cli::commands::export::execute(
            input,
            output_dir.as_deref(),
            name.as_deref(),
            force,
        ),
        Commands::Import {
            ref file,
            ref output,
            pretty,
            force,
        } => iiotstack::cli::commands::import_cmd::execute(file, output.as_deref(), pretty, force),
        Commands::Inspect { ref file } => iiotstack::cli::commands::inspect::execute(file),
        Commands::Validate { ref input } => iiotstack::cli::commands::validate::execute(input),
        Commands::Completions { shell } => iiotstack::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        iiotstack::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays clean for JSON output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("iiotstack=debug")
    } else {
        EnvFilter::try_from_env("IIOTSTACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
