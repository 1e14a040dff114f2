//! User journeys through the drawer controller.
//!
//! Each test drives the controller the way the page does and checks the
//! cart snapshot together with what was painted.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;

use apexfit_core::LineKey;
use apexfit_integration_tests::{controller, selection};
use apexfit_storefront::cart::{CartMode, CartViewModel};
use apexfit_storefront::config::StorefrontConfig;
use apexfit_storefront::drawer::{Direction, DrawerEvent};
use apexfit_storefront::notify::Severity;
use apexfit_storefront::product_card::ProductCard;
use apexfit_storefront::session::{PageSession, SessionStep};
use rust_decimal::Decimal;

fn dataset(action_key: &LineKey) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("product-id".to_string(), action_key.product_id.to_string()),
        ("size".to_string(), action_key.size.clone()),
        ("color".to_string(), action_key.color.clone()),
    ])
}

#[test]
fn test_same_variant_twice_merges() {
    let mut ctl = controller();
    ctl.on_add_trigger(selection("1", "M", "Black", 4500));
    ctl.on_add_trigger(selection("1", "M", "Black", 4500));

    let snapshot = ctl.snapshot();
    assert_eq!(snapshot.items().len(), 1);
    assert_eq!(snapshot.items()[0].quantity.get(), 2);

    let aggregates = ctl.store().aggregates();
    assert_eq!(aggregates.item_count, 2);
    assert_eq!(aggregates.subtotal, Decimal::new(9000, 2));
    assert_eq!(ctl.surface().subtotal_text(), "$90.00");
    assert!(ctl.surface().badge_html().contains('2'));
}

#[test]
fn test_decrement_at_one_empties_cart() {
    let mut ctl = controller();
    let sel = selection("1", "M", "Black", 2000);
    let key = sel.key();
    ctl.on_add_trigger(sel);
    ctl.on_quantity_control_clicked(key.clone(), Direction::Minus);

    assert!(ctl.snapshot().is_empty());
    assert_eq!(CartViewModel::render(ctl.snapshot()).mode, CartMode::Empty);
    assert!(ctl.surface().drawer_html().contains("Your cart is empty"));

    // The line is gone, so further controls for it do nothing.
    ctl.on_quantity_control_clicked(key.clone(), Direction::Plus);
    ctl.on_quantity_control_clicked(key, Direction::Minus);
    assert!(ctl.snapshot().is_empty());
}

#[test]
fn test_remove_first_of_two() {
    let mut ctl = controller();
    let first = selection("1", "M", "Black", 1000);
    let first_key = first.key();
    ctl.on_add_trigger(first);
    ctl.on_add_trigger(selection("2", "M", "Black", 1500));
    ctl.on_remove_control_clicked(first_key);

    let ids: Vec<_> = ctl
        .snapshot()
        .items()
        .iter()
        .map(|i| i.key.product_id.as_str())
        .collect();
    assert_eq!(ids, ["2"]);
    assert_eq!(ctl.store().aggregates().subtotal, Decimal::new(1500, 2));
    assert!(ctl.notifier().messages(Severity::Info).is_empty());
}

#[test]
fn test_colors_are_separate_lines_and_controls_hit_one() {
    let mut ctl = controller();
    let black = selection("1", "M", "Black", 4500);
    let white = selection("1", "M", "White", 4500);
    let white_key = white.key();
    ctl.on_add_trigger(black);
    ctl.on_add_trigger(white);
    assert_eq!(ctl.snapshot().items().len(), 2);

    ctl.dispatch(DrawerEvent::from_dataset("increment", &dataset(&white_key)).unwrap());

    let quantities: Vec<_> = ctl
        .snapshot()
        .items()
        .iter()
        .map(|i| (i.key.color.as_str(), i.quantity.get()))
        .collect();
    assert_eq!(quantities, [("Black", 1), ("White", 2)]);
}

#[test]
fn test_delegated_clicks_drive_the_drawer() {
    let mut ctl = controller();
    let sel = selection("1-M", "L/XL", "Black", 3000);
    let key = sel.key();
    ctl.on_add_trigger(sel);
    assert!(ctl.is_open());

    // Markup carries the identity the delegated handler decodes.
    assert!(ctl.surface().drawer_html().contains(r#"data-size="L/XL""#));

    ctl.dispatch(DrawerEvent::from_dataset("remove", &dataset(&key)).unwrap());
    assert!(ctl.snapshot().is_empty());
    assert_eq!(
        ctl.notifier().messages(Severity::Info),
        ["Item removed from cart"]
    );

    ctl.dispatch(DrawerEvent::from_dataset("continue-shopping", &BTreeMap::new()).unwrap());
    assert!(!ctl.is_open());
    assert!(!ctl.surface().is_scroll_locked());
}

#[test]
fn test_toggle_then_escape() {
    let mut ctl = controller();
    ctl.dispatch(DrawerEvent::Toggle);
    assert!(ctl.surface().is_drawer_open());
    assert!(ctl.surface().is_scroll_locked());
    assert!(ctl.surface().drawer_html().contains("Your cart is empty"));

    ctl.dispatch(DrawerEvent::EscapePressed);
    assert!(!ctl.surface().is_drawer_open());
    assert!(!ctl.surface().is_scroll_locked());
}

#[tokio::test(start_paused = true)]
async fn test_quick_add_journey() {
    let mut session = PageSession::new(StorefrontConfig::default());
    let card = ProductCard {
        product_id: Some("7".to_string()),
        title: Some("Seamless Tank".to_string()),
        image_url: Some("images/tank.jpg".to_string()),
        price_text: Some("$32.00".to_string()),
    };

    session
        .replay(vec![
            SessionStep::QuickAdd(card.clone()),
            SessionStep::QuickAdd(card),
            SessionStep::Escape,
        ])
        .await
        .unwrap();

    let ctl = session.controller();
    let item = &ctl.snapshot().items()[0];
    assert_eq!(item.key, LineKey::new("7", "M", "Midnight Black"));
    assert_eq!(item.quantity.get(), 2);
    assert_eq!(ctl.surface().subtotal_text(), "$64.00");
    assert!(!ctl.is_open());
    assert_eq!(
        ctl.notifier().current().map(|t| t.message.as_str()),
        Some("Seamless Tank added to cart")
    );
}

#[tokio::test]
async fn test_scripted_session_snapshot() {
    let script = r#"[
        {"type": "add", "product_id": "1", "title": "Tee", "unit_price": "10.00",
         "image_url": "images/tee.jpg", "size": "M", "color": "Black"},
        {"type": "add", "product_id": "2", "title": "Short", "unit_price": "15.00",
         "image_url": "images/short.jpg", "size": "S", "color": "Grey"},
        {"type": "increment", "product_id": "2", "size": "S", "color": "Grey"},
        {"type": "remove", "product_id": "1", "size": "M", "color": "Black"},
        {"type": "click", "action": "close-cart"}
    ]"#;

    let mut session = PageSession::new(StorefrontConfig::default());
    session
        .replay(PageSession::parse_script(script).unwrap())
        .await
        .unwrap();

    let json = serde_json::to_value(session.controller().snapshot()).unwrap();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["key"]["product_id"], "2");
    assert_eq!(items[0]["quantity"], 2);
    assert!(!session.controller().is_open());
}
