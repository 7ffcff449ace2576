use std::cell::RefCell;
use std::rc::Rc;

use scenario_chart_wasm::domain::events::{
    ChartEvent, DomainEvent, EventDispatcher, InMemoryEventDispatcher, SimulationEvent,
};
use scenario_chart_wasm::domain::projection::AdjustmentId;

#[test]
fn subscribed_handlers_receive_events() {
    let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = InMemoryEventDispatcher::new();

    let sink = Rc::clone(&seen);
    dispatcher.subscribe_to_simulation_events(move |event| {
        sink.borrow_mut().push(event.event_type());
    });
    let sink = Rc::clone(&seen);
    dispatcher.subscribe_to_chart_events(move |event| {
        sink.borrow_mut().push(event.event_type());
    });

    dispatcher.publish_simulation_event(SimulationEvent::AdjustmentToggled {
        id: AdjustmentId::from("fix-1"),
        now_active: true,
    });
    dispatcher.publish_simulation_event(SimulationEvent::SelectionReset);
    dispatcher.publish_chart_event(ChartEvent::SeriesRecomputed {
        series_count: 1,
        point_count: 4,
        total_adjustment: 0.05,
    });

    assert_eq!(*seen.borrow(), vec!["AdjustmentToggled", "SelectionReset", "SeriesRecomputed"]);
}

#[test]
fn event_types_are_stable_names() {
    let toggled = SimulationEvent::PeriodCountChanged { old: 4, new: 5 };
    assert_eq!(toggled.event_type(), "PeriodCountChanged");

    let viewport = ChartEvent::ViewportChanged { old_max: 420.0, new_max: 546.0 };
    assert_eq!(viewport.event_type(), "ViewportChanged");
}
