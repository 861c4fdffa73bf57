pub use bindery_core::stmt::*;
