use buildcheck::error::BcResult;
use buildcheck::store::AssessmentStore;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Id of the assessment to delete
    pub id: String,
}

pub fn run(args: RemoveArgs, store: &mut AssessmentStore) -> BcResult<()> {
    store.remove(&args.id)?;
    println!("Removed assessment {}", args.id);
    if let Some(current) = store.current_id() {
        println!("Current assessment is now {current}");
    }
    Ok(())
}
