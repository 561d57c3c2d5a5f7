use clap::Args;
use condo_inspect::catalog::CatalogRegistry;
use condo_inspect::checklist::{AnswerKind, ChecklistScope, NewChecklist, NewQuestion};
use condo_inspect::error::AppError;
use condo_inspect::inspection::{
    AddDetail, CreateInspection, DetailItemRef, InspectionTarget, PendingPolicy,
};
use condo_inspect::inventory::{NewItem, NewZone, UnitKey};
use serde_json::json;

use crate::infra::build_services;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Classify pending work by severity rank instead of the clear-state name
    #[arg(long)]
    pub(crate) rank_policy: bool,
}

fn demo_error(err: impl std::error::Error + Send + Sync + 'static) -> AppError {
    AppError::Io(std::io::Error::other(err))
}

/// Walk one unit and one zone through an inspection and print the
/// resulting pending report.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let policy = if args.rank_policy {
        PendingPolicy::BySeverityRank
    } else {
        PendingPolicy::default()
    };
    let services = build_services(policy);

    let unit = services
        .inventory
        .create_unit(UnitKey {
            tower: "A".to_string(),
            floor: 5,
            number: "501".to_string(),
        })
        .map_err(demo_error)?;
    let kitchen = services
        .inventory
        .add_unit_item(
            unit.id,
            NewItem {
                name: "Kitchen".to_string(),
                ..NewItem::default()
            },
        )
        .map_err(demo_error)?;

    let zone = services
        .inventory
        .create_zone(NewZone {
            name: "BBQ Terrace".to_string(),
            location: Some("Floor 15".to_string()),
            kind: Some("Recreation".to_string()),
        })
        .map_err(demo_error)?;
    let grill = services
        .inventory
        .add_zone_item(
            zone.id,
            NewItem {
                name: "Grill".to_string(),
                ..NewItem::default()
            },
        )
        .map_err(demo_error)?;

    let unit_checklist = services
        .checklists
        .create_checklist(NewChecklist {
            name: "Move-out walkthrough".to_string(),
            version: "1.0".to_string(),
            scope: ChecklistScope::Unit,
        })
        .map_err(demo_error)?;
    services
        .checklists
        .add_question(
            unit_checklist.id,
            NewQuestion {
                text: "Sink free of leaks?".to_string(),
                answer_kind: AnswerKind::YesNo,
                options: None,
            },
        )
        .map_err(demo_error)?;
    let zone_checklist = services
        .checklists
        .create_checklist(NewChecklist {
            name: "Common area rounds".to_string(),
            version: "1.0".to_string(),
            scope: ChecklistScope::Zone,
        })
        .map_err(demo_error)?;

    let states = services.catalog.condition_states().map_err(demo_error)?;
    let good = states[0].id;
    let needs_maintenance = states[1].id;

    let unit_visit = services
        .inspections
        .create_inspection(CreateInspection {
            inspector: "R. Vargas".to_string(),
            checklist_id: unit_checklist.id,
            target: InspectionTarget::Unit(unit.id),
            at: None,
        })
        .map_err(demo_error)?;
    services
        .inspections
        .add_detail(
            unit_visit.id,
            AddDetail {
                item: DetailItemRef::UnitItem(kitchen.id),
                condition_id: needs_maintenance,
                note: Some("Leaking faucet".to_string()),
                payload: Some(json!({ "answer": "no" })),
            },
        )
        .map_err(demo_error)?;

    let zone_visit = services
        .inspections
        .create_inspection(CreateInspection {
            inspector: "R. Vargas".to_string(),
            checklist_id: zone_checklist.id,
            target: InspectionTarget::Zone(zone.id),
            at: None,
        })
        .map_err(demo_error)?;
    services
        .inspections
        .add_detail(
            zone_visit.id,
            AddDetail {
                item: DetailItemRef::ZoneItem(grill.id),
                condition_id: good,
                note: None,
                payload: None,
            },
        )
        .map_err(demo_error)?;

    let report = services.report.list_pending().map_err(demo_error)?;
    println!(
        "Recorded inspection {} (unit {}) and inspection {} (zone {})",
        unit_visit.id, unit.id, zone_visit.id, zone.id
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&report).map_err(demo_error)?
    );
    Ok(())
}
