use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod init;

#[derive(Parser)]
#[command(
    name = "ccds",
    version,
    about = "Cookiecutter-style data science project scaffolder"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Creates a basic data science project skeleton
    Init {
        /// Author name
        #[arg(long)]
        author: Option<String>,
        /// Project license (MIT, BSD-3-Clause, None)
        #[arg(long)]
        license: Option<String>,
        /// Which programming language to use
        #[arg(long)]
        language: Option<String>,
        /// Ignore existing files and directories
        #[arg(long, short = 'f')]
        force: bool,
        /// Error if any user input is required
        #[arg(long, short = 'n')]
        non_interactive: bool,
    },
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    init_tracing();

    match cli.command {
        Some(Commands::Init {
            author,
            license,
            language,
            force,
            non_interactive,
        }) => init::run(
            ccds::InitOptions {
                author,
                license,
                language,
                force,
            },
            non_interactive,
        ),
        None => {
            eprintln!("Usage: ccds <command> [args]");
            eprintln!("Run `ccds --help` for details.");
            std::process::exit(1);
        }
    }
}

/// Log to stderr so prompts on stdout stay clean. `CCDS_LOG` overrides the
/// default filter.
fn init_tracing() {
    let filter = EnvFilter::new(std::env::var("CCDS_LOG").unwrap_or_else(|_| "ccds=info".into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn print_about() {
    println!(
        "ccds: Data Science Project Scaffolder\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ source:     {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}
