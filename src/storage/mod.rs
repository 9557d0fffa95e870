pub mod local_store;

pub use local_store::LocalStore;

use std::fs;
use std::path::Path;

/// Ensure data directory exists
pub fn ensure_data_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
