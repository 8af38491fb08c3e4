pub mod db;
pub use db::Db;

mod model;
pub use model::Model;

mod record;
pub use record::Record;

pub mod relation;
pub use relation::HasMany;

pub mod store;
pub use store::{MemoryStore, RowStore};

pub use rowmap_core::{
    bail, err, row,
    schema::{self, Strictness},
    stmt::{self, Filter, Row, Value},
    Error, Result, Schema,
};

pub use rowmap_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Db, Error, HasMany, Model, Record, Result};
    pub use rowmap_core::{
        schema::{ModelBuilder, Strictness},
        stmt::Value,
    };
    pub use std::{convert::Into, default::Default, option::Option};
}
