//! Shared order-item fixtures.

use rowmap::{HasMany, Model, Record};

#[derive(Debug, Model)]
#[schema(item_description, item_name, item_type, notes, order_id, product_id)]
#[schema(cpu, ppu, qty)]
pub struct OrderItem {
    #[record]
    record: Record,

    #[has_many]
    invoice_items: HasMany<InvoiceItem>,
}

#[derive(Debug, Model)]
#[schema(order_item_id, description, amount)]
pub struct InvoiceItem {
    #[record]
    record: Record,
}
