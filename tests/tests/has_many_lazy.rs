//! Lazy `has_many` loading: fetch on first access, cached until reloaded.

use tests::{
    models,
    models::{InvoiceItem, OrderItem},
    DbTest,
};

use pretty_assertions::assert_eq;
use rowmap::{row, Model, Value};
use std_util::prelude::*;

fn setup() -> DbTest {
    DbTest::setup(&models!(OrderItem, InvoiceItem))
}

fn seed_invoice_items(test: &DbTest) {
    test.rows.extend(
        "InvoiceItem",
        [
            row! { id => 1, order_item_id => 42, description => "widget", amount => 10 },
            row! { id => 2, order_item_id => 7, description => "gadget", amount => 5 },
            row! { id => 3, order_item_id => 42, description => "gizmo", amount => 20 },
        ],
    );
}

fn ids(items: &[InvoiceItem]) -> Vec<i64> {
    items
        .iter()
        .map(|item| item.id().and_then(Value::as_i64).unwrap())
        .collect()
}

#[tokio::test]
async fn loads_matching_rows_in_store_order() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);

    let items = order_item.invoice_items(&test.db).await.unwrap();
    assert_eq!(ids(items), [1, 3]);
    assert_eq!(items[0].description(), Some(&Value::from("widget")));
    assert_eq!(items[1].amount().and_then(Value::as_i64), Some(20));

    assert_eq!(test.log().len(), 1);

    let op = test.log().last();
    assert_eq!(op.model, "InvoiceItem");
    assert_eq!(op.filter.attribute, "order_item_id");
    assert_eq!(op.filter.value, Value::from(42));
    assert_eq!(op.rows, Some(2));
}

#[tokio::test]
async fn repeated_access_fetches_once() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);

    let first = ids(order_item.invoice_items(&test.db).await.unwrap());
    let second = ids(order_item.invoice_items(&test.db).await.unwrap());

    assert_eq!(first, second);
    assert_eq!(test.log().fetches_of("InvoiceItem"), 1);
}

#[tokio::test]
async fn empty_result_is_cached() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(99);

    assert!(order_item.invoice_items(&test.db).await.unwrap().is_empty());
    assert!(order_item.invoice_items(&test.db).await.unwrap().is_empty());
    assert_eq!(test.log().len(), 1);
}

#[tokio::test]
async fn owner_without_primary_key_is_unresolved() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();

    let err = assert_err!(order_item.invoice_items(&test.db).await);
    assert!(err.is_unresolved_owner());
    assert_eq!(
        err.to_string(),
        "cannot load `OrderItem.invoice_items`: owner has no primary key value"
    );

    // An explicit null counts as no identifier
    order_item.set_id(Value::Null);
    let err = assert_err!(order_item.invoice_items(&test.db).await);
    assert!(err.is_unresolved_owner());

    assert!(test.log().is_empty());
}

#[tokio::test]
async fn reload_fetches_again() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);

    assert_eq!(order_item.invoice_items(&test.db).await.unwrap().len(), 2);

    order_item.reload_invoice_items();
    assert_eq!(order_item.invoice_items(&test.db).await.unwrap().len(), 2);
    assert_eq!(test.log().len(), 2);

    order_item.reload_all();
    assert_eq!(order_item.invoice_items(&test.db).await.unwrap().len(), 2);
    assert_eq!(test.log().len(), 3);
}

#[tokio::test]
async fn out_of_band_writes_stay_invisible_until_reload() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);

    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [1, 3]);

    test.rows.insert(
        "InvoiceItem",
        row! { id => 4, order_item_id => 42, description => "doohickey", amount => 1 },
    );
    test.rows
        .delete("InvoiceItem", &rowmap::Filter::eq("id", 1));

    // Stale until reloaded
    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [1, 3]);

    order_item.reload_invoice_items();
    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [3, 4]);
    assert_eq!(test.log().len(), 2);
}

#[tokio::test]
async fn changing_primary_key_invalidates_cache() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);
    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [1, 3]);

    order_item.set_id(7);
    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [2]);
    assert_eq!(test.log().len(), 2);
    assert_eq!(test.log().last().filter.value, Value::from(7));
}

#[tokio::test]
async fn failed_fetch_is_not_cached() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);

    test.fail_next_fetches(1);

    let err = assert_err!(order_item.invoice_items(&test.db).await);
    assert!(err.is_store_failure());
    assert_eq!(err.to_string(), "store failure: connection reset by peer");
    assert_none!(test.log().last().rows);

    // The next access retries
    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [1, 3]);
    assert_eq!(test.log().len(), 2);
}

#[tokio::test]
async fn owners_keep_separate_caches() {
    let test = setup();
    seed_invoice_items(&test);

    let mut first = OrderItem::new(&test.db).unwrap();
    first.set_id(42);

    let mut second = OrderItem::new(&test.db).unwrap();
    second.set_id(7);

    assert_eq!(ids(first.invoice_items(&test.db).await.unwrap()), [1, 3]);
    assert_eq!(ids(second.invoice_items(&test.db).await.unwrap()), [2]);
    assert_eq!(test.log().len(), 2);
}

#[tokio::test]
async fn loaded_owner_from_store() {
    let test = setup();
    seed_invoice_items(&test);
    test.rows.insert(
        "OrderItem",
        row! { id => 42, item_name => "Widget pack", qty => 3 },
    );

    let mut order_items: Vec<OrderItem> = test
        .db
        .filter(&rowmap::Filter::eq("item_name", "Widget pack"))
        .await
        .unwrap();

    assert_eq!(order_items.len(), 1);
    let order_item = &mut order_items[0];
    assert_eq!(order_item.qty(), Some(&Value::from(3)));
    assert_none!(order_item.notes());

    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [1, 3]);
    assert_eq!(test.log().fetches_of("OrderItem"), 1);
    assert_eq!(test.log().fetches_of("InvoiceItem"), 1);
}

#[tokio::test]
async fn dynamic_record_access() {
    let test = setup();
    seed_invoice_items(&test);

    let mut record = test.db.new_record("OrderItem").unwrap();
    record.set("id", 42).unwrap();

    assert!(!record.is_loaded("invoice_items"));

    let items = record.has_many(&test.db, "invoice_items").await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("description").unwrap(), Some(&Value::from("widget")));

    assert!(record.is_loaded("invoice_items"));
    record.has_many(&test.db, "invoice_items").await.unwrap();
    assert_eq!(test.log().len(), 1);

    assert_ok!(record.reload("invoice_items"));
    assert!(!record.is_loaded("invoice_items"));

    // Changing the key makes the cache stale without a reload
    record.has_many(&test.db, "invoice_items").await.unwrap();
    record.set("id", 7).unwrap();
    assert!(!record.is_loaded("invoice_items"));
}

#[tokio::test]
async fn unknown_association() {
    let test = setup();

    let mut record = test.db.new_record("OrderItem").unwrap();
    record.set("id", 42).unwrap();

    let err = assert_err!(record.has_many(&test.db, "payments").await);
    assert!(err.is_unknown_association());
    assert_eq!(
        err.to_string(),
        "unknown association `payments` on model `OrderItem`"
    );

    assert!(assert_err!(record.reload("payments")).is_unknown_association());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn typed_wrapper_round_trips_through_record() {
    let test = setup();
    seed_invoice_items(&test);

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);
    order_item.invoice_items(&test.db).await.unwrap();

    let record = order_item.into_record();
    assert_eq!(record.primary_key(), Some(&Value::from(42)));

    let order_item = OrderItem::load(record).unwrap();
    assert_eq!(order_item.id(), Some(&Value::from(42)));
}

#[tokio::test]
async fn order_item_42_loads_both_invoice_items() {
    let test = setup();
    test.rows.extend(
        "InvoiceItem",
        [
            row! { id => 1, order_item_id => 42 },
            row! { id => 2, order_item_id => 42 },
        ],
    );

    let mut order_item = OrderItem::new(&test.db).unwrap();
    order_item.set_id(42);

    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [1, 2]);
    assert_eq!(test.log().len(), 1);

    let op = test.log().last();
    assert_eq!(op.model, "InvoiceItem");
    assert_eq!(op.filter, rowmap::Filter::eq("order_item_id", 42));

    assert_eq!(ids(order_item.invoice_items(&test.db).await.unwrap()), [1, 2]);
    assert_eq!(test.log().len(), 1);
}

#[tokio::test]
async fn owner_from_another_db_is_rejected() {
    let a = DbTest::setup(&models!(OrderItem, InvoiceItem));
    let b = DbTest::setup(&models!(InvoiceItem, OrderItem));

    for test in [&a, &b] {
        test.rows
            .insert("InvoiceItem", row! { id => 1, order_item_id => 42 });
    }

    let mut order_item = OrderItem::new(&a.db).unwrap();
    order_item.set_id(42);

    let err = assert_err!(order_item.invoice_items(&b.db).await);
    assert!(err.root().is_unknown_model());
    assert_eq!(
        err.to_string(),
        "cannot load `OrderItem.invoice_items` through a `Db` built from another schema: unknown model `OrderItem`"
    );
    assert!(b.log().is_empty());

    let mut record = a.db.new_record("OrderItem").unwrap();
    record.set("id", 42).unwrap();

    let err = assert_err!(record.has_many(&b.db, "invoice_items").await);
    assert!(err.root().is_unknown_model());
    assert!(!record.is_loaded("invoice_items"));
    assert!(b.log().is_empty());

    // The owning `Db` still loads normally
    assert_eq!(ids(order_item.invoice_items(&a.db).await.unwrap()), [1]);
    assert_eq!(record.has_many(&a.db, "invoice_items").await.unwrap().len(), 1);
    assert_eq!(a.log().len(), 2);
}
