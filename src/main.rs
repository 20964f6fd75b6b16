use buildcheck::store::AssessmentStore;
use clap::{Parser, Subcommand};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rapid visual seismic screening: score, track, and export building assessments",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the durable assessment snapshot.
    #[arg(global = true, short, long, default_value = "buildcheck.json")]
    store: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new assessment and select it
    New(cmd::new::NewArgs),
    /// Update fields of an assessment
    Set(cmd::set::SetArgs),
    /// Compute the screening score for an assessment
    Score(cmd::score::ScoreArgs),
    /// List all assessments
    List,
    /// Print the plain-text summary of one assessment
    Show(cmd::show::ShowArgs),
    /// Change which assessment is current
    Select(cmd::select::SelectArgs),
    /// Delete an assessment
    Remove(cmd::remove::RemoveArgs),
    /// Export every assessment to an xlsx workbook
    Export(cmd::export::ExportArgs),
    /// Render a single-record PDF report
    Report(cmd::report::ReportArgs),
    /// Print the building-type catalogue
    Types,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut store = AssessmentStore::open(&cli.store);

    let outcome = match cli.command {
        Commands::New(args) => cmd::new::run(args, &mut store),
        Commands::Set(args) => cmd::set::run(args, &mut store),
        Commands::Score(args) => cmd::score::run(args, &mut store),
        Commands::List => cmd::list::run(&store),
        Commands::Show(args) => cmd::show::run(args, &store),
        Commands::Select(args) => cmd::select::run(args, &mut store),
        Commands::Remove(args) => cmd::remove::run(args, &mut store),
        Commands::Export(args) => cmd::export::run(args, &store),
        Commands::Report(args) => cmd::report::run(args, &store),
        Commands::Types => {
            reports::print_building_types();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
