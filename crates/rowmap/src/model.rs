use crate::{Record, Result};

use rowmap_core::schema::ModelBuilder;

/// A record type with generated accessors, usually implemented with
/// `#[derive(Model)]`.
///
/// The type wraps a [`Record`], which holds the attribute store; the derive
/// adds one getter and setter per declared attribute and one lazy accessor
/// per `has_many` field.
pub trait Model: Sized + Send + Sync + 'static {
    /// Name the model is registered under
    const NAME: &'static str;

    /// Add this model's attributes and associations to the schema builder.
    fn declare(model: &mut ModelBuilder);

    /// Wrap a record of this model. Fails if the record belongs to another
    /// model.
    fn load(record: Record) -> Result<Self>;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    fn into_record(self) -> Record;
}
