use rowmap::{Db, HasMany, MemoryStore, Model, Record, Row};

#[derive(Debug, Model)]
#[schema(item_description, item_name, item_type, notes, order_id, product_id, cpu, ppu, qty)]
struct OrderItem {
    #[record]
    record: Record,

    #[has_many]
    invoice_items: HasMany<InvoiceItem>,
}

#[derive(Debug, Model)]
#[schema(order_item_id, description, amount)]
struct InvoiceItem {
    #[record]
    record: Record,
}

const INVOICE_ITEMS: &str = r#"[
    { "id": 1, "order_item_id": 42, "description": "Widget pack", "amount": 19.5 },
    { "id": 2, "order_item_id": 7, "description": "Gadget", "amount": 4.25 },
    { "id": 3, "order_item_id": 42, "description": "Shipping", "amount": 6 }
]"#;

#[tokio::main]
async fn main() -> rowmap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let store = MemoryStore::new();
    let rows: Vec<Row> = serde_json::from_str(INVOICE_ITEMS)
        .map_err(|err| rowmap::err!("invalid seed rows: {err}"))?;
    store.extend(InvoiceItem::NAME, rows);

    let db = Db::builder()
        .register::<OrderItem>()
        .register::<InvoiceItem>()
        .build(store)?;

    println!("==> OrderItem::new(&db)");
    let mut order_item = OrderItem::new(&db)?;
    order_item.set_item_name("Widget pack");
    order_item.set_qty(2);

    println!("==> order_item.invoice_items(&db) without an id");
    if let Err(err) = order_item.invoice_items(&db).await {
        println!(" -> {err}");
    }

    order_item.set_id(42);

    println!("==> order_item.invoice_items(&db)");
    for invoice_item in order_item.invoice_items(&db).await? {
        println!(
            " -> {} {}",
            invoice_item.description().map(ToString::to_string).unwrap_or_default(),
            invoice_item.amount().map(ToString::to_string).unwrap_or_default(),
        );
    }

    println!("==> order_item.invoice_items(&db) again; served from cache");
    let count = order_item.invoice_items(&db).await?.len();
    println!(" -> {count} invoice items");

    println!("==> order_item.reload_invoice_items()");
    order_item.reload_invoice_items();
    let count = order_item.invoice_items(&db).await?.len();
    println!(" -> {count} invoice items");

    println!("{order_item:#?}");

    Ok(())
}
