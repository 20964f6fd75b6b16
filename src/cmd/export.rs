use buildcheck::error::BcResult;
use buildcheck::export::workbook::export_workbook_to_file;
use buildcheck::store::AssessmentStore;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Directory to write the workbook into
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

pub fn run(args: ExportArgs, store: &AssessmentStore) -> BcResult<()> {
    let path = export_workbook_to_file(store.records(), &args.out)?;
    println!("Exported {} assessments to {}", store.records().len(), path.display());
    Ok(())
}
