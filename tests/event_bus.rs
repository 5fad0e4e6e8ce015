use std::collections::HashSet;

use storefront::event::{EventBus, EventKind, ShopEvent, Topic};
use storefront::product::ProductId;

#[derive(Default)]
struct Log {
    seen: Vec<String>,
}

fn basket_delete(id: &str) -> ShopEvent {
    ShopEvent::BasketDelete(ProductId::new(id))
}

#[test]
fn test_handlers_run_in_registration_order() {
    let mut bus = EventBus::<Log>::new();
    bus.on_all(|log, event| log.seen.push(format!("all:{}", event.name())));
    bus.on(EventKind::BasketOpen, |log, _| log.seen.push("open".to_owned()));
    bus.on(Topic::Prefix("basket:"), |log, _| log.seen.push("basket".to_owned()));
    bus.on(EventKind::ModalOpen, |log, _| log.seen.push("modal".to_owned()));

    let mut log = Log::default();
    bus.emit(&mut log, ShopEvent::BasketOpen);

    assert_eq!(log.seen, vec!["all:basket:open", "open", "basket"]);
}

#[test]
fn test_prefix_topic_matches_namespace_only() {
    let mut bus = EventBus::<Log>::new();
    bus.on(Topic::Prefix("basket:"), |log, event| log.seen.push(event.name().to_owned()));

    let mut log = Log::default();
    bus.emit(&mut log, ShopEvent::BasketOpen);
    bus.emit(&mut log, basket_delete("a"));
    bus.emit(&mut log, ShopEvent::BasketOrder);
    bus.emit(&mut log, ShopEvent::ModalClose);
    bus.emit(&mut log, ShopEvent::OrderSubmit);

    assert_eq!(log.seen, vec!["basket:open", "basket:delete", "basket:order"]);
}

#[test]
fn test_off_removes_only_that_handler() {
    let mut bus = EventBus::<Log>::new();
    let first = bus.on(EventKind::ModalOpen, |log, _| log.seen.push("first".to_owned()));
    bus.on(EventKind::ModalOpen, |log, _| log.seen.push("second".to_owned()));

    assert!(bus.off(first));
    assert!(!bus.off(first));
    assert_eq!(bus.handler_count(), 1);

    let mut log = Log::default();
    bus.emit(&mut log, ShopEvent::ModalOpen);
    assert_eq!(log.seen, vec!["second"]);
}

#[test]
fn test_nested_emits_delivered_before_emit_returns() {
    let mut bus = EventBus::<Log>::new();
    let sink = bus.sink();
    bus.on(EventKind::BasketOpen, move |log, _| {
        sink.emit(ShopEvent::ModalOpen);
        log.seen.push("open-1".to_owned());
    });
    bus.on(EventKind::BasketOpen, |log, _| log.seen.push("open-2".to_owned()));
    bus.on(EventKind::ModalOpen, |log, _| log.seen.push("modal".to_owned()));

    let mut log = Log::default();
    bus.emit(&mut log, ShopEvent::BasketOpen);

    assert_eq!(log.seen, vec!["open-1", "open-2", "modal"]);
    assert_eq!(bus.sink().pending(), 0);
}

#[test]
fn test_flush_delivers_queued_events_in_order() {
    let mut bus = EventBus::<Log>::new();
    bus.on_all(|log, event| log.seen.push(event.name().to_owned()));

    let sink = bus.sink();
    sink.emit(ShopEvent::BasketOpen);
    sink.emit(ShopEvent::BasketOrder);

    let mut log = Log::default();
    assert_eq!(bus.flush(&mut log), 2);
    assert_eq!(bus.flush(&mut log), 0);
    assert_eq!(log.seen, vec!["basket:open", "basket:order"]);
}

#[test]
fn test_unsubscribed_events_are_dropped() {
    let mut bus = EventBus::<Log>::new();
    let mut log = Log::default();
    bus.emit(&mut log, ShopEvent::ModalClose);
    assert!(log.seen.is_empty());
    assert_eq!(bus.sink().pending(), 0);
}

#[test]
#[should_panic(expected = "handler failed")]
fn test_handler_panic_reaches_caller() {
    let mut bus = EventBus::<Log>::new();
    bus.on(EventKind::OrderSubmit, |_, _| panic!("handler failed"));
    bus.emit(&mut Log::default(), ShopEvent::OrderSubmit);
}

#[test]
fn test_topic_names_are_unique() {
    let kinds = [
        EventKind::ItemsChanged,
        EventKind::CatalogLoaded,
        EventKind::CardSelect,
        EventKind::PreviewChanged,
        EventKind::PreviewLoaded,
        EventKind::CardToBasket,
        EventKind::BasketChanged,
        EventKind::BasketOpen,
        EventKind::BasketDelete,
        EventKind::BasketOrder,
        EventKind::OrderInputChange,
        EventKind::OrderFormErrorsChange,
        EventKind::ContactsFormErrorsChange,
        EventKind::OrderReady,
        EventKind::ContactsReady,
        EventKind::OrderSubmit,
        EventKind::ContactsSubmit,
        EventKind::OrderSuccess,
        EventKind::ImageLoaded,
        EventKind::ApiFailed,
        EventKind::ModalOpen,
        EventKind::ModalClose,
    ];
    let names: HashSet<&str> = kinds.iter().map(|kind| kind.name()).collect();
    assert_eq!(names.len(), kinds.len());
    assert_eq!(basket_delete("x").kind(), EventKind::BasketDelete);
}
