use crate::{relation::HasMany, Db, Error, Result};

use indexmap::IndexMap;
use rowmap_core::{
    schema::{Model, ModelId, Name},
    stmt::{Row, Value},
    Schema,
};

use std::{fmt, sync::Arc};

/// One instance of a record type.
///
/// Every declared attribute lives in a single name-indexed store. Undeclared
/// attributes are rejected, unless the model is lenient, in which case they
/// are kept in a side store that is not part of the schema. Loaded
/// associations are cached per association name until reloaded.
#[derive(Clone)]
pub struct Record {
    schema: Arc<Schema>,

    model: ModelId,

    /// Declared attributes that have been assigned
    values: IndexMap<String, Value>,

    /// Undeclared attributes accepted by a lenient model
    extra: IndexMap<String, Value>,

    associations: IndexMap<String, HasMany<Record>>,
}

impl Record {
    /// Creates an empty record. Every attribute starts absent.
    pub fn new(schema: Arc<Schema>, model: impl Into<ModelId>) -> Record {
        Record {
            schema,
            model: model.into(),
            values: IndexMap::new(),
            extra: IndexMap::new(),
            associations: IndexMap::new(),
        }
    }

    /// Populates a record from a raw row. The only check applied is that
    /// each name is declared; values are taken as they are.
    pub fn from_row(schema: Arc<Schema>, model: impl Into<ModelId>, row: Row) -> Result<Record> {
        let mut record = Record::new(schema, model);

        for (name, value) in row {
            record.set(name, value)?;
        }

        Ok(record)
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn model(&self) -> &Model {
        self.schema.model(self.model)
    }

    pub fn model_id(&self) -> ModelId {
        self.model
    }

    /// Read an attribute.
    ///
    /// Returns `Ok(None)` for a declared attribute that was never assigned.
    /// Undeclared names fail with an unknown attribute error, except for
    /// names a lenient model has accepted into its side store.
    pub fn get(&self, name: &str) -> Result<Option<&Value>> {
        let model = self.model();

        if model.is_declared(name) {
            return Ok(self.values.get(name));
        }

        match self.extra.get(name) {
            Some(value) if model.strictness.is_lenient() => Ok(Some(value)),
            _ => Err(Error::unknown_attribute(model.name.to_string(), name)),
        }
    }

    /// Assign an attribute.
    ///
    /// Undeclared names fail on strict models and go to the side store on
    /// lenient ones.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let name = name.into();
        let model = self.schema.model(self.model);

        if model.is_declared(&name) {
            self.values.insert(name, value.into());
            return Ok(());
        }

        if model.strictness.is_strict() {
            return Err(Error::unknown_attribute(model.name.to_string(), name));
        }

        tracing::debug!(
            model = %model.name,
            attribute = %name,
            "storing undeclared attribute outside the schema"
        );
        self.extra.insert(name, value.into());
        Ok(())
    }

    /// Getter used by generated accessors, which only name declared
    /// attributes.
    #[doc(hidden)]
    pub fn get_declared(&self, name: &str) -> Option<&Value> {
        debug_assert!(self.model().is_declared(name), "`{name}` is not declared");
        self.values.get(name)
    }

    /// Setter used by generated accessors, which only name declared
    /// attributes.
    #[doc(hidden)]
    pub fn set_declared(&mut self, name: &str, value: Value) {
        debug_assert!(self.model().is_declared(name), "`{name}` is not declared");
        self.values.insert(name.to_string(), value);
    }

    /// Getter used by generated `id` accessors. Unlike
    /// [`primary_key`](Self::primary_key), an assigned null is returned.
    #[doc(hidden)]
    pub fn get_primary_key(&self) -> Option<&Value> {
        self.values.get(&self.model().primary_key().name)
    }

    /// Assign the primary key attribute, whatever its name.
    pub fn set_primary_key(&mut self, value: impl Into<Value>) {
        let name = self.model().primary_key().name.clone();
        self.values.insert(name, value.into());
    }

    /// The record's identifier, if it has one. A null primary key counts as
    /// no identifier.
    pub fn primary_key(&self) -> Option<&Value> {
        let model = self.model();
        self.values
            .get(&model.primary_key().name)
            .filter(|value| !value.is_null())
    }

    /// Declared attributes in declaration order, with their values if
    /// assigned.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, Option<&Value>)> + '_ {
        self.model()
            .attribute_names()
            .map(|name| (name, self.values.get(name)))
    }

    /// Attributes held outside the schema by a lenient model.
    pub fn extra(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.extra.iter().map(|(name, value)| (&name[..], value))
    }

    /// The assigned attributes as a raw row, declared attributes first.
    pub fn to_row(&self) -> Row {
        self.attributes()
            .filter_map(|(name, value)| Some((name, value?.clone())))
            .chain(self.extra().map(|(name, value)| (name, value.clone())))
            .collect()
    }

    /// Load the `name` association, or return the cached collection.
    ///
    /// The first call fetches every `target` row whose foreign key equals
    /// this record's primary key and caches the materialized records. Later
    /// calls return the cache until [`reload`](Self::reload) is called or
    /// the primary key changes.
    pub async fn has_many(&mut self, db: &Db, name: &str) -> Result<&[Record]> {
        let schema = self.schema.clone();
        let owner = schema.model(self.model);
        let key = self.primary_key().cloned();

        if owner.has_many(name).is_none() {
            return Err(Error::unknown_association(owner.name.to_string(), name));
        }

        self.associations
            .entry(name.to_string())
            .or_default()
            .load_with(db, &schema, owner, key.as_ref(), name, Ok)
            .await
    }

    /// Returns true if `name` has been loaded for the current primary key.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.associations
            .get(name)
            .is_some_and(|association| association.is_loaded_for(self.primary_key()))
    }

    /// Evict the cached `name` association so the next access fetches again.
    pub fn reload(&mut self, name: &str) -> Result<()> {
        let model = self.schema.model(self.model);

        if model.has_many(name).is_none() {
            return Err(Error::unknown_association(model.name.to_string(), name));
        }

        if let Some(association) = self.associations.get_mut(name) {
            association.reload();
        }

        Ok(())
    }

    /// Evict every cached association.
    pub fn reload_all(&mut self) {
        for association in self.associations.values_mut() {
            association.reload();
        }
    }

    /// Fails with an unknown attribute error unless the record's model
    /// declares every name in `names`.
    #[doc(hidden)]
    pub fn ensure_declared(&self, names: &[&str]) -> Result<()> {
        let model = self.model();

        match names.iter().find(|name| !model.is_declared(name)) {
            Some(name) => Err(Error::unknown_attribute(model.name.to_string(), *name)),
            None => Ok(()),
        }
    }

    /// Fails unless this record belongs to the model named `name`.
    #[doc(hidden)]
    pub fn ensure_model(&self, name: &str) -> Result<()> {
        let model = self.model();

        if model.name == Name::new(name) {
            Ok(())
        } else {
            Err(Error::unknown_model(name).context(format!(
                "record of `{}` cannot load as `{name}`",
                model.name
            )))
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = fmt.debug_struct("Record");
        debug
            .field("model", &self.model().name.to_string())
            .field("values", &self.values);

        if !self.extra.is_empty() {
            debug.field("extra", &self.extra);
        }

        let loaded: Vec<_> = self
            .associations
            .iter()
            .filter(|(_, association)| association.is_loaded())
            .map(|(name, _)| name)
            .collect();

        debug.field("loaded", &loaded).finish()
    }
}
