mod builtin;
mod persistence;
mod store;

pub use builtin::DEFAULT_CATALOG;
pub use persistence::{load_catalog, save_catalog};
pub use store::{Catalog, FUZZY_MATCH_THRESHOLD};
