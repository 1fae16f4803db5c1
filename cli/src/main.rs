mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "boxscore")]
#[command(
    about = "Match history, MVP and player statistics from box-score logs",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Box-score log to read
    #[arg(short, long, global = true, env = "BOXSCORE_INPUT", default_value = "game_data.txt")]
    input: PathBuf,

    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the home team's match history for a year
    History(HistoryArgs),

    /// Best combined score of the match played on a date
    Mvp(MvpArgs),

    /// Average points per game for a player
    Average(PlayerArgs),

    /// Home score of the widest win in a month
    #[command(name = "best-win")]
    BestWin(MonthArgs),

    /// Month with the best home win rate
    #[command(name = "best-month")]
    BestMonth,

    /// Write a season report for a home-team player
    Report(ReportArgs),

    /// Run every query against the input, the way the original walkthrough did
    Demo(DemoArgs),
}

#[derive(Args)]
struct HistoryArgs {
    year: i32,
    /// Output file
    #[arg(default_value = "history.txt")]
    out: PathBuf,
}

#[derive(Args)]
struct MvpArgs {
    year: i32,
    month: i32,
    day: i32,
}

#[derive(Args)]
struct PlayerArgs {
    player: String,
}

#[derive(Args)]
struct MonthArgs {
    year: i32,
    month: i32,
}

#[derive(Args)]
struct ReportArgs {
    player: String,
    /// Output file
    #[arg(default_value = "report.txt")]
    out: PathBuf,
}

#[derive(Args)]
struct DemoArgs {
    /// Directory for the generated files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn init_tracing(cli: &Cli) {
    let default_filter = if cli.verbose {
        "boxscore_stats=debug,boxscore=debug"
    } else if cli.quiet {
        "boxscore_stats=warn,boxscore=warn"
    } else {
        "boxscore_stats=info,boxscore=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    tracing::debug!("Reading {}", cli.input.display());

    let input = cli.input.as_path();
    let ok = match &cli.command {
        Commands::History(args) => commands::history(input, args.year, &args.out, cli.json)?,
        Commands::Mvp(args) => commands::mvp(input, args.year, args.month, args.day, cli.json)?,
        Commands::Average(args) => commands::average(input, &args.player, cli.json)?,
        Commands::BestWin(args) => commands::best_win(input, args.year, args.month, cli.json)?,
        Commands::BestMonth => commands::best_month(input, cli.json)?,
        Commands::Report(args) => commands::report(input, &args.player, &args.out, cli.json)?,
        Commands::Demo(args) => {
            commands::demo(input, &args.out_dir)?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
