use super::resolve_record;
use buildcheck::error::{BcResult, BuildcheckError};
use buildcheck::scorer::{ConstructionEra, SoilClass, SoilHeightBucket};
use buildcheck::store::{AssessmentStore, RecordPatch};
use buildcheck::table::ScoringTable;
use clap::Args;
use std::str::FromStr;

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Record to edit (defaults to the current selection)
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub screener: Option<String>,

    /// Building-type code (see `buildcheck types`)
    #[arg(long = "building-type")]
    pub building_type: Option<String>,

    #[arg(long)]
    pub severe_vertical: Option<bool>,
    #[arg(long)]
    pub moderate_vertical: Option<bool>,
    #[arg(long)]
    pub plan_irregularity: Option<bool>,

    /// Construction era: precode, transition, postbenchmark, or unknown
    #[arg(long)]
    pub era: Option<String>,

    /// Soil class A-F (assume D when there is no basis for classification)
    #[arg(long)]
    pub soil: Option<String>,

    /// Story bucket for soil class E: low (1-3 stories) or high (>3)
    #[arg(long)]
    pub stories: Option<String>,
}

pub fn run(args: SetArgs, store: &mut AssessmentStore) -> BcResult<()> {
    let record = resolve_record(store, &args.id)?;
    let id = record.id.clone();

    // The store's merge is shallow, so rebuild the nested structs in full.
    let mut info = record.building_info.clone();
    let mut input = record.input;

    if let Some(name) = args.name {
        info.building_name = name;
    }
    if let Some(address) = args.address {
        info.address = address;
    }
    if let Some(screener) = args.screener {
        info.screener_name = screener;
    }

    if let Some(code) = &args.building_type {
        let (building_type, _) = ScoringTable::lookup(code)?;
        input.building_type = Some(building_type);
    }
    if let Some(flag) = args.severe_vertical {
        input.irregularities.severe_vertical = flag;
    }
    if let Some(flag) = args.moderate_vertical {
        input.irregularities.moderate_vertical = flag;
    }
    if let Some(flag) = args.plan_irregularity {
        input.irregularities.plan_irregularity = flag;
    }
    if let Some(era) = &args.era {
        input.construction_era = ConstructionEra::from_str(era)
            .map_err(|_| BuildcheckError::Validation(format!("unknown era '{era}'")))?;
    }
    if let Some(soil) = &args.soil {
        input.soil_class = SoilClass::from_str(soil)
            .map_err(|_| BuildcheckError::Validation(format!("unknown soil class '{soil}'")))?;
    }
    if let Some(stories) = &args.stories {
        input.soil_height = SoilHeightBucket::from_str(stories)
            .map_err(|_| BuildcheckError::Validation(format!("unknown story bucket '{stories}'")))?;
    }

    store.update(
        &id,
        RecordPatch {
            building_info: Some(info),
            input: Some(input),
            ..RecordPatch::default()
        },
    )?;

    println!("Updated assessment {id}");
    Ok(())
}
