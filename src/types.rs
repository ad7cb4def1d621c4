/// One fenced block pulled out of the markdown, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFileBlock {
    pub rel_path: String,
    pub content: String,
}

impl ExtractedFileBlock {
    /// A block whose marker was blank after trimming is never written
    pub fn has_path(&self) -> bool {
        !self.rel_path.is_empty()
    }
}

/// Tallies for the whole run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}
