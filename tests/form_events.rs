// tests/form_events.rs
//
// Named form events: toggles, custom gateways, and the reducer on top.
use dorkgen::config::state::{AppState, Event};
use dorkgen::form::{FormEvent, FormState};

fn toggle_gw(name: &str, on: bool) -> FormEvent {
    FormEvent::ToggleGateway { name: name.into(), on }
}

#[test]
fn toggling_off_removes_exactly_that_gateway() {
    let f = FormState::empty()
        .apply(toggle_gw("Cielo", true))
        .apply(toggle_gw("Zoop", true))
        .apply(toggle_gw("Iugu", true))
        .apply(toggle_gw("Zoop", false));
    assert_eq!(f.selected_gateways, ["Cielo", "Iugu"]);
}

#[test]
fn toggling_off_absent_gateway_changes_nothing() {
    let before = FormState::default();
    let after = before.apply(toggle_gw("Adyen", false));
    assert_eq!(before, after);
}

#[test]
fn add_custom_gateway_appends_and_clears_draft() {
    let f = FormState::default()
        .apply(FormEvent::SetCustomGateway("Stone".into()))
        .apply(FormEvent::AddCustomGateway);
    assert_eq!(f.selected_gateways, ["Cielo", "PagSeguro", "Stone"]);
    assert!(f.custom_gateway_draft.is_empty());
}

#[test]
fn add_duplicate_custom_gateway_is_noop() {
    let before = FormState::default().apply(FormEvent::SetCustomGateway("Cielo".into()));
    let after = before.apply(FormEvent::AddCustomGateway);
    assert_eq!(before, after);
}

#[test]
fn add_blank_custom_gateway_is_noop() {
    for draft in ["", "   "] {
        let before = FormState::default().apply(FormEvent::SetCustomGateway(draft.into()));
        let after = before.apply(FormEvent::AddCustomGateway);
        assert_eq!(before, after, "draft {draft:?}");
    }
}

#[test]
fn added_custom_gateway_can_be_toggled_off() {
    let f = FormState::default()
        .apply(FormEvent::SetCustomGateway("Stone".into()))
        .apply(FormEvent::AddCustomGateway)
        .apply(toggle_gw("Stone", false));
    assert_eq!(f.selected_gateways, ["Cielo", "PagSeguro"]);
}

#[test]
fn domains_toggle_like_gateways() {
    let f = FormState::default().apply(FormEvent::ToggleDomain { suffix: ".br".into(), on: false });
    assert_eq!(f.domain_suffixes, [".com"]);
    let f = f.apply(FormEvent::ToggleDomain { suffix: ".br".into(), on: true });
    assert_eq!(f.domain_suffixes, [".com", ".br"]);
}

#[test]
fn generate_regenerates_wholesale() {
    let s = AppState::default()
        .reduce(Event::Form(FormEvent::SetProductName("A".into())))
        .reduce(Event::Generate);
    assert!(s.dork.starts_with(r#"("A")"#));

    let s = s
        .reduce(Event::Form(FormEvent::SetProductName("B".into())))
        .reduce(Event::Generate);
    assert!(s.dork.starts_with(r#"("B")"#));
    assert!(!s.dork.contains(r#""A""#));
}

#[test]
fn initial_state_has_no_dork() {
    let s = AppState::default();
    assert!(!s.has_dork());
    assert_eq!(s.analysis.estimated_results_label, "Fetching...");
}
