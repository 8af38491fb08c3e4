use crate::{Db, Error, Model, Record, Result};

use rowmap_core::{
    schema,
    stmt::{Filter, Value},
    Schema,
};

use std::{fmt, sync::Arc};

/// Cache slot for a one-to-many association.
///
/// Starts unloaded. Loading remembers the owner identifier it was loaded
/// for; if the owner's primary key later changes, the slot is treated as
/// unloaded again. The slot never watches the store, so rows added or
/// removed out of band stay invisible until [`reload`](Self::reload).
#[derive(Clone)]
pub struct HasMany<T> {
    loaded: Option<Loaded<T>>,
}

#[derive(Clone)]
struct Loaded<T> {
    /// Owner primary key the values were fetched for
    owner: Value,

    values: Vec<T>,
}

impl<T> HasMany<T> {
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub(crate) fn is_loaded_for(&self, owner: Option<&Value>) -> bool {
        match (&self.loaded, owner) {
            (Some(loaded), Some(owner)) => loaded.owner == *owner,
            _ => false,
        }
    }

    /// The cached values, without loading.
    pub fn get(&self) -> Option<&[T]> {
        self.loaded.as_ref().map(|loaded| &loaded.values[..])
    }

    /// Evict the cached values.
    pub fn reload(&mut self) {
        self.loaded = None;
    }

    pub(crate) async fn load_with<F>(
        &mut self,
        db: &Db,
        schema: &Arc<Schema>,
        owner: &schema::Model,
        key: Option<&Value>,
        name: &str,
        load: F,
    ) -> Result<&[T]>
    where
        F: Fn(Record) -> Result<T>,
    {
        // Model IDs only mean something within the schema that issued them.
        if !Arc::ptr_eq(schema, db.schema()) {
            return Err(Error::unknown_model(owner.name.to_string()).context(format!(
                "cannot load `{}.{name}` through a `Db` built from another schema",
                owner.name
            )));
        }

        let Some(association) = owner.has_many(name) else {
            return Err(Error::unknown_association(owner.name.to_string(), name));
        };

        let Some(key) = key.filter(|key| !key.is_null()) else {
            return Err(Error::unresolved_owner(owner.name.to_string(), name));
        };

        let loaded = match self.loaded.take() {
            Some(loaded) if loaded.owner == *key => {
                tracing::trace!(model = %owner.name, association = name, "association cache hit");
                loaded
            }
            stale => {
                if let Some(stale) = stale {
                    tracing::debug!(
                        model = %owner.name,
                        association = name,
                        previous = %stale.owner,
                        current = %key,
                        "owner identifier changed; evicting cached association"
                    );
                }

                Loaded {
                    owner: key.clone(),
                    values: fetch(db, schema, owner, association, key, &load).await?,
                }
            }
        };

        Ok(&self.loaded.insert(loaded).values)
    }
}

impl<T: Model> HasMany<T> {
    /// Return the cached collection, loading it through `db` on first
    /// access. Used by generated association accessors.
    pub async fn get_or_load(&mut self, db: &Db, owner: &Record, name: &str) -> Result<&[T]> {
        let schema = owner.schema().clone();
        let model = schema.model(owner.model_id());

        self.load_with(db, &schema, model, owner.primary_key(), name, T::load)
            .await
    }
}

async fn fetch<T, F>(
    db: &Db,
    schema: &Arc<Schema>,
    owner: &schema::Model,
    association: &schema::HasMany,
    key: &Value,
    load: &F,
) -> Result<Vec<T>>
where
    F: Fn(Record) -> Result<T>,
{
    let target = association.target(schema);
    let filter = Filter::eq(&association.foreign_key, key.clone());

    tracing::debug!(
        model = %owner.name,
        association = %association.name,
        target = %target.name,
        foreign_key = %association.foreign_key,
        owner_key = %key,
        "fetching association"
    );

    let rows = db.store().fetch(target, &filter).await?;

    rows.into_iter()
        .map(|row| {
            db.store()
                .materialize(schema, target, row)
                .and_then(load)
        })
        .collect()
}

impl<T> Default for HasMany<T> {
    fn default() -> Self {
        Self { loaded: None }
    }
}

impl<T: fmt::Debug> fmt::Debug for HasMany<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.loaded {
            Some(loaded) => fmt.debug_list().entries(&loaded.values).finish(),
            None => write!(fmt, "<not loaded>"),
        }
    }
}
