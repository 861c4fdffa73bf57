mod model;
pub use model::{generate_unique_id, Model};

pub mod registry;
pub use registry::{Binding, BindingDef, Builder, EntityRef, Registry};

pub mod schema;

pub mod stmt;

pub use bindery_core::{bail, err, Error, Result};
