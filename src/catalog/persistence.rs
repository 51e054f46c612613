use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::FoodItem;

/// Load a catalog from a JSON array of foods.
///
/// Duplicate names keep the last occurrence.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;
    let catalog = Catalog::new(foods)?;

    info!(path = %path.as_ref().display(), foods = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Save a catalog as a pretty-printed JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    fs::write(path, json)?;
    Ok(())
}
