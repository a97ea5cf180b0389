pub mod check;
pub mod list;
pub mod play;
pub mod show;

use saray_engine::Catalog;

/// Load and validate the embedded story catalog.
fn load_story() -> Result<Catalog, String> {
    saray_story::load().map_err(|e| format!("story catalog failed to load: {e}"))
}
