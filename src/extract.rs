use crate::types::ExtractedFileBlock;
use anyhow::{Context, Result};
use regex::Regex;

/// Language tag the fence must carry when nothing else is configured
pub const DEFAULT_LANG: &str = "markdown";

/// Finds fenced blocks shaped like
///
/// ````text
/// ```markdown
/// // FILE: lib/foo.txt
/// hello
/// ```
/// ````
///
/// The body stops at the first closing fence, so a body that itself contains
/// three backticks is cut short. There is no escaping.
#[derive(Debug)]
pub struct BlockExtractor {
    pattern: Regex,
}

impl BlockExtractor {
    pub fn new(lang: &str) -> Result<Self> {
        // The marker text after `FILE:` only eats spaces/tabs so that a blank
        // marker captures as empty instead of swallowing the next line.
        let source = format!(
            r"```{}\s*//\s*FILE:[ \t]*(.*?)\s*?\n([\s\S]*?)```",
            regex::escape(lang)
        );
        let pattern = Regex::new(&source)
            .with_context(|| format!("building block pattern for tag {:?}", lang))?;
        Ok(Self { pattern })
    }

    /// Lazily walk `text` in document order. Call again to rescan.
    pub fn blocks<'a>(&'a self, text: &'a str) -> impl Iterator<Item = ExtractedFileBlock> + 'a {
        self.pattern.captures_iter(text).map(|caps| ExtractedFileBlock {
            rel_path: caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            content: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        })
    }
}
