use super::common::*;
use crate::catalog::{Category, CategoryId, ConditionState, InMemoryCatalog};
use crate::checklist::ChecklistScope;
use crate::inspection::domain::{AddDetail, CreateInspection, DetailItemRef, InspectionTarget};
use crate::inspection::report::PendingPolicy;

fn create_inspection_on(
    harness: &Harness,
    target: InspectionTarget,
    scope: ChecklistScope,
) -> crate::inspection::Inspection {
    let checklist = harness.checklist(scope);
    harness
        .engine()
        .create_inspection(CreateInspection {
            inspector: "R. Vargas".to_string(),
            checklist_id: checklist.id,
            target,
            at: None,
        })
        .expect("inspection created")
}

#[test]
fn reports_unit_detail_pending_remediation() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (unit, item) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let inspection =
        create_inspection_on(&harness, InspectionTarget::Unit(unit.id), ChecklistScope::Unit);
    engine
        .add_detail(
            inspection.id,
            AddDetail {
                item: DetailItemRef::UnitItem(item.id),
                condition_id: NEEDS_MAINTENANCE,
                note: Some("Leaking faucet".to_string()),
                payload: None,
            },
        )
        .expect("detail recorded");

    let report = harness
        .aggregator(PendingPolicy::default())
        .list_pending()
        .expect("report built");

    assert_eq!(report.total, 1);
    assert!(report.orphaned.is_empty());
    let entry = &report.entries[0];
    assert_eq!(entry.owner, InspectionTarget::Unit(unit.id));
    assert_eq!(entry.item, DetailItemRef::UnitItem(item.id));
    assert_eq!(entry.item_name, "Kitchen");
    assert_eq!(entry.inspection_id, inspection.id);
    assert_eq!(entry.condition_id, NEEDS_MAINTENANCE);
    assert_eq!(entry.note.as_deref(), Some("Leaking faucet"));
}

#[test]
fn clear_state_details_never_appear() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (unit, item) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let inspection =
        create_inspection_on(&harness, InspectionTarget::Unit(unit.id), ChecklistScope::Unit);
    for condition in [GOOD, NEEDS_MAINTENANCE, NON_OPERATIONAL] {
        engine
            .add_detail(
                inspection.id,
                AddDetail {
                    item: DetailItemRef::UnitItem(item.id),
                    condition_id: condition,
                    note: None,
                    payload: None,
                },
            )
            .expect("detail recorded");
    }

    let report = harness
        .aggregator(PendingPolicy::default())
        .list_pending()
        .expect("report built");

    assert_eq!(report.total, 2);
    assert!(report
        .entries
        .iter()
        .all(|entry| entry.condition_id != GOOD));
}

#[test]
fn zone_details_carry_zone_scope() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (zone, item) = harness.zone_with_item("BBQ Terrace", "Grill");
    let inspection =
        create_inspection_on(&harness, InspectionTarget::Zone(zone.id), ChecklistScope::Zone);
    engine
        .add_detail(
            inspection.id,
            AddDetail {
                item: DetailItemRef::ZoneItem(item.id),
                condition_id: NON_OPERATIONAL,
                note: None,
                payload: None,
            },
        )
        .expect("detail recorded");

    let report = harness
        .aggregator(PendingPolicy::default())
        .list_pending()
        .expect("report built");

    assert_eq!(report.total, 1);
    assert_eq!(report.entries[0].owner, InspectionTarget::Zone(zone.id));
    assert_eq!(report.entries[0].item_name, "Grill");
}

#[test]
fn entries_are_ordered_by_inspection_then_detail() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (unit, unit_item) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let (zone, zone_item) = harness.zone_with_item("Game Room", "Foosball table");
    let first =
        create_inspection_on(&harness, InspectionTarget::Unit(unit.id), ChecklistScope::Unit);
    let second =
        create_inspection_on(&harness, InspectionTarget::Zone(zone.id), ChecklistScope::Zone);

    // Interleave writes across the two inspections.
    engine
        .add_detail(
            second.id,
            AddDetail {
                item: DetailItemRef::ZoneItem(zone_item.id),
                condition_id: NEEDS_MAINTENANCE,
                note: None,
                payload: None,
            },
        )
        .expect("detail recorded");
    engine
        .add_detail(
            first.id,
            AddDetail {
                item: DetailItemRef::UnitItem(unit_item.id),
                condition_id: NEEDS_MAINTENANCE,
                note: None,
                payload: None,
            },
        )
        .expect("detail recorded");
    engine
        .add_detail(
            second.id,
            AddDetail {
                item: DetailItemRef::ZoneItem(zone_item.id),
                condition_id: NON_OPERATIONAL,
                note: None,
                payload: None,
            },
        )
        .expect("detail recorded");

    let report = harness
        .aggregator(PendingPolicy::default())
        .list_pending()
        .expect("report built");

    let order: Vec<_> = report
        .entries
        .iter()
        .map(|entry| (entry.inspection_id, entry.detail_id))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
    assert_eq!(report.entries[0].inspection_id, first.id);
}

#[test]
fn renaming_the_clear_state_breaks_name_policy_but_not_rank_policy() {
    // Same catalog, but the rank-1 state is now called "OK".
    let catalog = InMemoryCatalog::new(
        [
            ConditionState {
                id: GOOD,
                name: "OK".to_string(),
                severity_rank: 1,
            },
            ConditionState {
                id: NEEDS_MAINTENANCE,
                name: "Requires maintenance".to_string(),
                severity_rank: 3,
            },
        ],
        [Category {
            id: CategoryId(1),
            name: "Space".to_string(),
            description: None,
        }],
    );
    let harness = Harness::with_catalog(catalog);
    let engine = harness.engine();
    let (unit, item) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let inspection =
        create_inspection_on(&harness, InspectionTarget::Unit(unit.id), ChecklistScope::Unit);
    engine
        .add_detail(
            inspection.id,
            AddDetail {
                item: DetailItemRef::UnitItem(item.id),
                condition_id: GOOD,
                note: None,
                payload: None,
            },
        )
        .expect("detail recorded");

    // Name policy still looks for "Good", so the renamed clear state
    // now counts as pending. This is the recorded legacy behavior.
    let by_name = harness
        .aggregator(PendingPolicy::by_name("Good"))
        .list_pending()
        .expect("report built");
    assert_eq!(by_name.total, 1);

    // Rank policy keys off severity and is immune to the rename.
    let by_rank = harness
        .aggregator(PendingPolicy::BySeverityRank)
        .list_pending()
        .expect("report built");
    assert_eq!(by_rank.total, 0);
}

#[test]
fn orphaned_details_are_surfaced_not_dropped() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (unit, item) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let inspection =
        create_inspection_on(&harness, InspectionTarget::Unit(unit.id), ChecklistScope::Unit);
    let detail = engine
        .add_detail(
            inspection.id,
            AddDetail {
                item: DetailItemRef::UnitItem(item.id),
                condition_id: NEEDS_MAINTENANCE,
                note: None,
                payload: None,
            },
        )
        .expect("detail recorded");

    // Deleting the unit cascades over its items, leaving the detail's
    // item reference dangling.
    harness
        .inventory_service()
        .delete_unit(unit.id)
        .expect("unit deleted");

    let report = harness
        .aggregator(PendingPolicy::default())
        .list_pending()
        .expect("report built");

    assert!(report.entries.is_empty());
    assert_eq!(report.total, 0);
    assert_eq!(report.orphaned, vec![detail.id]);
}
