use crate::commands::{CmdMessage, CmdResult};
use crate::config::{config_path, ZettelConfig, CONFIG_DIR};
use crate::error::{Result, ZettelError};
use std::fs;
use std::path::Path;

/// Marks `root` as a notes root by creating `.zettel/` with a config template.
///
/// Running it again leaves an existing config untouched.
pub fn run(root: &Path) -> Result<CmdResult> {
    let dir = root.join(CONFIG_DIR);
    fs::create_dir_all(&dir).map_err(ZettelError::Io)?;

    let mut result = CmdResult::default();
    let path = config_path(root);
    if path.exists() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized: {}",
            root.display()
        )));
    } else {
        fs::write(&path, ZettelConfig::template()).map_err(ZettelError::Io)?;
        result.add_message(CmdMessage::success(format!(
            "Initialized zettel in {}",
            root.display()
        )));
    }
    Ok(result.with_note_paths(vec![path]))
}
