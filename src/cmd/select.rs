use buildcheck::error::BcResult;
use buildcheck::store::AssessmentStore;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// Id of the assessment to make current
    pub id: Option<String>,

    /// Clear the current selection instead
    #[arg(long, conflicts_with = "id")]
    pub clear: bool,
}

pub fn run(args: SelectArgs, store: &mut AssessmentStore) -> BcResult<()> {
    if args.clear {
        store.select_current(None)?;
        println!("Selection cleared.");
    } else if let Some(id) = &args.id {
        store.select_current(Some(id))?;
        println!("Selected assessment {id}");
    } else {
        return Err(buildcheck::BuildcheckError::Validation(
            "pass an assessment id, or --clear".to_string(),
        ));
    }
    Ok(())
}
