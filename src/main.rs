use boundlint::cli::{CheckArgs, Cli, Command};
use boundlint::{cmd_check, cmd_init};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "boundlint=debug"
    } else {
        "boundlint=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match cli.command {
        Some(Command::Check(args)) => cmd_check(args),
        Some(Command::Init(args)) => cmd_init(args),
        None => {
            // No subcommand: check the given path with defaults
            let args = CheckArgs {
                path: cli.path,
                ..Default::default()
            };
            cmd_check(args)
        }
    };

    std::process::exit(exit_code);
}
