use super::resolve_record;
use buildcheck::error::BcResult;
use buildcheck::export::summary_text;
use buildcheck::store::AssessmentStore;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Record to show (defaults to the current selection)
    #[arg(long)]
    pub id: Option<String>,
}

pub fn run(args: ShowArgs, store: &AssessmentStore) -> BcResult<()> {
    let record = resolve_record(store, &args.id)?;
    println!("{}", summary_text(record));
    Ok(())
}
