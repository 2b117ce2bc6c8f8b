use crate::config::PaintConfig;
use crate::error::PaintResult;
use image::RgbaImage;
use std::fs;
use std::path::PathBuf;

/// Writes canvas snapshots as `<prefix>_<n>.<ext>` into the save directory.
///
/// `n` is the first index, counting from 1, whose file does not exist yet.
/// The probe is not atomic, so two writers sharing a directory can pick
/// the same name; the widget only ever saves from its single UI thread.
#[derive(Debug, Clone)]
pub struct FileHandler {
    save_dir: PathBuf,
    prefix: String,
    extension: String,
}

impl FileHandler {
    pub fn new(save_dir: impl Into<PathBuf>, prefix: &str, extension: &str) -> Self {
        Self {
            save_dir: save_dir.into(),
            prefix: prefix.to_owned(),
            extension: extension.to_owned(),
        }
    }

    pub fn from_config(config: &PaintConfig) -> Self {
        Self::new(&config.save_dir, &config.file_prefix, &config.file_extension)
    }

    /// Creates the save directory if it is missing.
    pub fn ensure_directory(&self) -> PaintResult<()> {
        if !self.save_dir.exists() {
            log::info!("Creating save directory: {}", self.save_dir.display());
        }
        fs::create_dir_all(&self.save_dir)?;
        Ok(())
    }

    pub fn path_for_index(&self, index: u64) -> PathBuf {
        self.save_dir
            .join(format!("{}_{}.{}", self.prefix, index, self.extension))
    }

    pub fn next_available_path(&self) -> PathBuf {
        let mut index = 1;
        loop {
            let path = self.path_for_index(index);
            if !path.exists() {
                return path;
            }
            index += 1;
        }
    }

    /// Encodes `image` to the next free file name and returns its path.
    pub fn save(&self, image: &RgbaImage) -> PaintResult<PathBuf> {
        self.ensure_directory()?;
        let path = self.next_available_path();

        log::info!(
            "Saving canvas {}x{} to {}",
            image.width(),
            image.height(),
            path.display()
        );
        image.save(&path)?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_free_index() {
        let dir = tempfile::tempdir().unwrap();
        let handler = FileHandler::new(dir.path(), "pypaint", "png");

        assert_eq!(handler.next_available_path(), dir.path().join("pypaint_1.png"));

        fs::write(dir.path().join("pypaint_1.png"), b"").unwrap();
        fs::write(dir.path().join("pypaint_2.png"), b"").unwrap();
        fs::write(dir.path().join("other_3.png"), b"").unwrap();
        assert_eq!(handler.next_available_path(), dir.path().join("pypaint_3.png"));
    }

    #[test]
    fn test_probe_runs_past_long_runs() {
        let dir = tempfile::tempdir().unwrap();
        let handler = FileHandler::new(dir.path(), "pypaint", "png");
        for i in 1..=40 {
            fs::write(handler.path_for_index(i), b"").unwrap();
        }
        assert_eq!(handler.next_available_path(), dir.path().join("pypaint_41.png"));
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("a").join("b");
        let handler = FileHandler::new(&save_dir, "pypaint", "png");
        handler.ensure_directory().unwrap();
        handler.ensure_directory().unwrap();
        assert!(save_dir.is_dir());
    }
}
