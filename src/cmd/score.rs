use super::resolve_record;
use crate::reports;
use buildcheck::error::{BcResult, BuildcheckError};
use buildcheck::scorer::{score_input, SoilClass, SoilHeightBucket};
use buildcheck::store::{AssessmentStore, RecordPatch};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Record to score (defaults to the current selection)
    #[arg(long)]
    pub id: Option<String>,

    /// Write the result back and mark the assessment completed
    #[arg(long, default_value_t = false)]
    pub accept: bool,
}

pub fn run(args: ScoreArgs, store: &mut AssessmentStore) -> BcResult<()> {
    let record = resolve_record(store, &args.id)?;
    let id = record.id.clone();

    // Required-field check belongs to this surface, not the engine: the
    // engine's contract assumes a fully populated input.
    if record.input.soil_class == SoilClass::Unknown {
        return Err(BuildcheckError::Validation(
            "no soil class selected".to_string(),
        ));
    }
    if record.input.soil_class == SoilClass::E
        && record.input.soil_height == SoilHeightBucket::NotApplicable
    {
        return Err(BuildcheckError::Validation(
            "soil class E requires --stories low|high".to_string(),
        ));
    }

    let result = score_input(&record.input)?;
    reports::print_score_breakdown(record, &result);

    if args.accept {
        store.update(
            &id,
            RecordPatch {
                result: Some(result),
                completed: Some(true),
                ..RecordPatch::default()
            },
        )?;
        println!("Result accepted; assessment {id} marked completed.");
    } else {
        println!("Dry run; pass --accept to save the result.");
    }
    Ok(())
}
