use clap::Parser;
use session_scaffold::cli::session::IssueInput;
use session_scaffold::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // stdout is reserved for slugs and parsed fields.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "session_scaffold=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config_path();

    match cli.command {
        Some(Commands::Session {
            body,
            title,
            number,
            dry_run,
        }) => {
            let issue = IssueInput {
                body,
                title,
                number,
            };
            let outcome =
                session_scaffold::cli::session::run(&config_path, &cli.root, &issue, dry_run)?;
            println!("{}", outcome.slug);
        }
        Some(Commands::Parse { body }) => {
            session_scaffold::cli::parse::run(&body)?;
        }
        Some(Commands::Slug { presenter, title }) => {
            session_scaffold::cli::slug::run(&presenter, &title);
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
