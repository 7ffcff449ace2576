use quickcheck_macros::quickcheck;
use scenario_chart_wasm::domain::projection::{ActiveSelection, AdjustmentId};

#[test]
fn toggle_adds_then_removes() {
    let mut selection = ActiveSelection::new();
    let id = AdjustmentId::from("fix-1");

    selection.toggle(id.clone());
    assert!(selection.contains(&id));

    selection.toggle(id.clone());
    assert!(!selection.contains(&id));
    assert!(selection.is_empty());
}

#[quickcheck]
fn double_toggle_restores_membership(raw_id: String, preexisting: Vec<String>) -> bool {
    let mut selection = ActiveSelection::new();
    for id in preexisting {
        selection.toggle(AdjustmentId::from(id));
    }
    // Membership, not order: re-toggling an already-active id moves it to
    // the back of the list, exactly like the source page's array did.
    let members = |selection: &ActiveSelection| {
        let mut ids: Vec<String> = selection.iter().map(|id| id.value().to_string()).collect();
        ids.sort_unstable();
        ids
    };
    let before = members(&selection);

    let id = AdjustmentId::from(raw_id.as_str());
    selection.toggle(id.clone());
    selection.toggle(id);

    members(&selection) == before
}

#[test]
fn reset_always_empties() {
    let mut selection = ActiveSelection::new();
    selection.toggle(AdjustmentId::from("fix-1"));
    selection.toggle(AdjustmentId::from("fix-2"));
    selection.toggle(AdjustmentId::from("fix-3"));
    assert_eq!(selection.len(), 3);

    selection.reset();
    assert!(selection.is_empty());

    // Reset of an already-empty selection stays empty
    selection.reset();
    assert!(selection.is_empty());
}

#[test]
fn toggle_order_is_preserved() {
    let mut selection = ActiveSelection::new();
    selection.toggle(AdjustmentId::from("fix-3"));
    selection.toggle(AdjustmentId::from("fix-1"));

    let order: Vec<&str> = selection.iter().map(|id| id.value()).collect();
    assert_eq!(order, vec!["fix-3", "fix-1"]);
}
