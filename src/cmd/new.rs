use buildcheck::error::BcResult;
use buildcheck::store::{AssessmentStore, BuildingInfo, RecordPatch};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Building name
    #[arg(long)]
    pub name: Option<String>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,

    /// Screener name
    #[arg(long)]
    pub screener: Option<String>,
}

pub fn run(args: NewArgs, store: &mut AssessmentStore) -> BcResult<()> {
    let id = store.create();

    if args.name.is_some() || args.address.is_some() || args.screener.is_some() {
        let info = BuildingInfo {
            building_name: args.name.unwrap_or_default(),
            address: args.address.unwrap_or_default(),
            screener_name: args.screener.unwrap_or_default(),
            ..BuildingInfo::default()
        };
        store.update(
            &id,
            RecordPatch {
                building_info: Some(info),
                ..RecordPatch::default()
            },
        )?;
    }

    println!("Created assessment {id}");
    Ok(())
}
