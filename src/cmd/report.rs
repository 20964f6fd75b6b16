use super::resolve_record;
use buildcheck::error::BcResult;
use buildcheck::export::report::render_report_to_file;
use buildcheck::store::AssessmentStore;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Record to report on (defaults to the current selection)
    #[arg(long)]
    pub id: Option<String>,

    /// Directory to write the report into
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

pub fn run(args: ReportArgs, store: &AssessmentStore) -> BcResult<()> {
    let record = resolve_record(store, &args.id)?;
    let path = render_report_to_file(record, &args.out)?;
    println!("Report written to {}", path.display());
    Ok(())
}
