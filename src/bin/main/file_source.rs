use std::{fs, io, path::PathBuf};

use speedreader_core::content::{
    TextSource,
    normalize::{NormalizeOptions, normalize_text},
};

/// Plain UTF-8 text file on disk.
pub(super) struct FileText {
    path: PathBuf,
}

impl FileText {
    pub(super) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TextSource for FileText {
    type Error = io::Error;

    fn load(&mut self) -> Result<String, Self::Error> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(normalize_text(&raw, NormalizeOptions::default()))
    }

    fn title(&self) -> Option<&str> {
        self.path.file_stem().and_then(|stem| stem.to_str())
    }
}
