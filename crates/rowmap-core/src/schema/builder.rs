use super::{Attribute, HasMany, Model, ModelId, Name, Schema, Strictness};
use crate::{Error, Result};

use indexmap::{IndexMap, IndexSet};
use std_util::str;

/// Collects model declarations and resolves them into a [`Schema`].
///
/// Declarations are additive: asking for the same model twice returns the
/// same [`ModelBuilder`], and repeated `define_schema` calls extend the
/// attribute list. Nothing is validated until [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder {
    models: IndexMap<Name, ModelBuilder>,

    /// Strictness for models that do not pick one
    strictness: Strictness,

    /// Primary key attribute for models that do not pick one
    primary_key: Option<String>,

    /// Declaration errors not tied to one model
    errors: Vec<String>,
}

#[derive(Debug)]
pub struct ModelBuilder {
    name: Name,

    attributes: IndexSet<String>,

    primary_key: Option<String>,

    strictness: Option<Strictness>,

    associations: IndexMap<String, HasManyBuilder>,

    /// Declaration errors, reported by `Builder::build`
    errors: Vec<String>,
}

#[derive(Debug)]
pub struct HasManyBuilder {
    name: String,

    target: Option<String>,

    foreign_key: Option<String>,
}

impl Builder {
    /// Returns the builder for `name`, creating it on first use.
    pub fn model(&mut self, name: &str) -> &mut ModelBuilder {
        let name = Name::new(name);
        self.models
            .entry(name.clone())
            .or_insert_with(|| ModelBuilder::new(name))
    }

    pub fn strictness(&mut self, strictness: Strictness) -> &mut Self {
        self.strictness = strictness;
        self
    }

    pub fn primary_key(&mut self, name: &str) -> &mut Self {
        if str::is_ident(name) {
            self.primary_key = Some(name.to_string());
        } else {
            self.errors
                .push(format!("`{name}` is not a valid default primary key name"));
        }
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let errors: Vec<_> = self
            .errors
            .iter()
            .chain(self.models.values().flat_map(|model| &model.errors))
            .map(String::as_str)
            .collect();

        if !errors.is_empty() {
            return Err(Error::invalid_schema(errors.join("; ")));
        }

        let mut schema = Schema::default();

        for (index, builder) in self.models.values().enumerate() {
            let model = self.build_model(ModelId(index), builder);
            schema.models.insert(model.id, model);
        }

        // Associations reference other models, so they resolve once every
        // model has an ID.
        for (index, builder) in self.models.values().enumerate() {
            let id = ModelId(index);
            let owner = schema.model(id);

            let associations = builder
                .associations
                .values()
                .map(|association| association.resolve(owner, &schema))
                .collect::<Result<Vec<_>>>()?;

            if let Some(model) = schema.models.get_mut(&id) {
                model.associations = associations;
            }
        }

        schema.verify()?;

        Ok(schema)
    }

    fn build_model(&self, id: ModelId, builder: &ModelBuilder) -> Model {
        let primary_key = builder
            .primary_key
            .as_deref()
            .or(self.primary_key.as_deref())
            .unwrap_or("id");

        let mut names: Vec<&str> = builder.attributes.iter().map(String::as_str).collect();

        if !builder.attributes.contains(primary_key) {
            names.insert(0, primary_key);
        }

        let attributes: Vec<_> = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Attribute {
                id: id.attribute(index),
                name: name.to_string(),
                primary_key: name == primary_key,
            })
            .collect();

        let primary_key = attributes
            .iter()
            .find(|attribute| attribute.primary_key)
            .map(|attribute| attribute.id)
            .unwrap_or(id.attribute(0));

        Model {
            id,
            name: builder.name.clone(),
            attributes,
            primary_key,
            associations: vec![],
            strictness: builder.strictness.unwrap_or(self.strictness),
        }
    }
}

impl ModelBuilder {
    fn new(name: Name) -> Self {
        Self {
            name,
            attributes: IndexSet::new(),
            primary_key: None,
            strictness: None,
            associations: IndexMap::new(),
            errors: vec![],
        }
    }

    /// Declare attribute names.
    ///
    /// Names already declared by an earlier call are kept where they are;
    /// new names are appended. A call must list at least one name, and may
    /// not list the same name twice.
    pub fn define_schema<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen = IndexSet::new();
        let errors_before = self.errors.len();

        for name in names {
            let name = name.as_ref();

            if !str::is_ident(name) {
                self.errors.push(format!(
                    "`{name}` is not a valid attribute name on `{}`",
                    self.name
                ));
                continue;
            }

            if !seen.insert(name.to_string()) {
                self.errors.push(format!(
                    "`define_schema` on `{}` lists `{name}` more than once",
                    self.name
                ));
            }
        }

        if seen.is_empty() && self.errors.len() == errors_before {
            self.errors.push(format!(
                "`define_schema` on `{}` requires at least one attribute name",
                self.name
            ));
        }

        self.attributes.extend(seen);
        self
    }

    /// Set the attribute holding the record identifier. Defaults to `id`.
    /// The attribute is declared implicitly if `define_schema` does not list
    /// it.
    pub fn primary_key(&mut self, name: &str) -> &mut Self {
        if str::is_ident(name) {
            self.primary_key = Some(name.to_string());
        } else {
            self.errors.push(format!(
                "`{name}` is not a valid primary key name on `{}`",
                self.name
            ));
        }
        self
    }

    pub fn strictness(&mut self, strictness: Strictness) -> &mut Self {
        self.strictness = Some(strictness);
        self
    }

    /// Declare a one-to-many association. Declaring the same name again
    /// returns the existing declaration.
    pub fn has_many(&mut self, name: &str) -> &mut HasManyBuilder {
        if !str::is_ident(name) {
            self.errors.push(format!(
                "`{name}` is not a valid association name on `{}`",
                self.name
            ));
        }

        self.associations
            .entry(name.to_string())
            .or_insert_with(|| HasManyBuilder {
                name: name.to_string(),
                target: None,
                foreign_key: None,
            })
    }
}

impl HasManyBuilder {
    /// Override the target model. Defaults to the singularized association
    /// name.
    pub fn target(&mut self, model: &str) -> &mut Self {
        self.target = Some(model.to_string());
        self
    }

    /// Override the foreign key attribute on the target. Defaults to
    /// `<owner>_id`.
    pub fn foreign_key(&mut self, attribute: &str) -> &mut Self {
        self.foreign_key = Some(attribute.to_string());
        self
    }

    fn resolve(&self, owner: &Model, schema: &Schema) -> Result<HasMany> {
        let singular = Name::new(&self.name).singularize();

        let target_name = match &self.target {
            Some(target) => Name::new(target),
            None => singular.clone(),
        };

        let Some(target) = schema.models().find(|model| model.name == target_name) else {
            return Err(Error::invalid_schema(format!(
                "association `{}.{}` targets unknown model `{target_name}`",
                owner.name, self.name
            )));
        };

        let foreign_key = match &self.foreign_key {
            Some(foreign_key) => foreign_key.clone(),
            None => format!("{}_id", owner.name.snake_case()),
        };

        Ok(HasMany {
            name: self.name.clone(),
            target: target.id,
            foreign_key,
            singular,
        })
    }
}
