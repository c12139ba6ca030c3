use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quizalarm", version, about = "Alarm clock that quizzes you awake")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a GitHub username
    Signin(commands::signin::SigninArgs),
    /// List quiz topics
    Topics {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Daily alarms
    Alarm {
        #[command(subcommand)]
        action: commands::alarm::AlarmAction,
    },
    /// Count down, then take a quiz
    Countdown(commands::countdown::CountdownArgs),
    /// Take a quiz now
    Quiz(commands::quiz::QuizArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("QUIZALARM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Signin(args) => commands::signin::run(args),
        Commands::Topics { json } => commands::topics::run(json),
        Commands::Alarm { action } => commands::alarm::run(action),
        Commands::Countdown(args) => commands::countdown::run(args),
        Commands::Quiz(args) => commands::quiz::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell, Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
