use crate::reports;
use buildcheck::error::BcResult;
use buildcheck::store::AssessmentStore;

pub fn run(store: &AssessmentStore) -> BcResult<()> {
    if store.is_empty() {
        println!("No assessments yet. Create one with `buildcheck new`.");
        return Ok(());
    }
    reports::print_assessment_table(store.records(), store.current_id());
    Ok(())
}
