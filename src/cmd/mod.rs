pub mod export;
pub mod list;
pub mod new;
pub mod remove;
pub mod report;
pub mod score;
pub mod select;
pub mod set;
pub mod show;

use buildcheck::error::{BcResult, BuildcheckError};
use buildcheck::store::{AssessmentRecord, AssessmentStore};

/// Resolve the record a subcommand operates on: an explicit `--id`, else the
/// current selection.
pub(crate) fn resolve_record<'a>(
    store: &'a AssessmentStore,
    id: &Option<String>,
) -> BcResult<&'a AssessmentRecord> {
    match id {
        Some(id) => store
            .get(id)
            .ok_or_else(|| BuildcheckError::RecordNotFound(id.clone())),
        None => store.get_current().ok_or_else(|| {
            BuildcheckError::Validation(
                "no assessment selected (create one with `new` or pass --id)".to_string(),
            )
        }),
    }
}
