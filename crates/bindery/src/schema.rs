pub use bindery_core::schema::*;
