use super::{Model, Schema};
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for model in self.schema.models() {
            debug_assert!(model.primary_key().primary_key);

            self.verify_association_names_are_free(model)?;
            self.verify_foreign_keys_are_declared(model)?;
        }

        Ok(())
    }

    fn verify_association_names_are_free(&self, model: &Model) -> Result<()> {
        for association in &model.associations {
            if model.is_declared(&association.name) {
                return Err(Error::invalid_schema(format!(
                    "association `{}.{}` has the same name as an attribute",
                    model.name, association.name
                )));
            }
        }

        Ok(())
    }

    fn verify_foreign_keys_are_declared(&self, model: &Model) -> Result<()> {
        for association in &model.associations {
            let target = association.target(self.schema);

            if !target.is_declared(&association.foreign_key) {
                return Err(Error::invalid_schema(format!(
                    "association `{}.{}` uses foreign key `{}`, which `{}` does not declare",
                    model.name, association.name, association.foreign_key, target.name
                )));
            }
        }

        Ok(())
    }
}
