use crate::types::RunSummary;

/// The closing line for a run: a count when something was written, otherwise
/// a hint about the marker shape that was expected.
pub fn summary_message(summary: &RunSummary, lang: &str, dry_run: bool) -> String {
    match (summary.written, dry_run) {
        (0, _) => format!(
            "\n⚠️ No ```{} code blocks with valid \"// FILE: path/to/file\" markers found.",
            lang
        ),
        (1, true) => "\n✅ Would create 1 file.".to_string(),
        (n, true) => format!("\n✅ Would create {} files.", n),
        (1, false) => "\n✅ Successfully created 1 file.".to_string(),
        (n, false) => format!("\n✅ Successfully created {} files.", n),
    }
}

pub fn print_summary(summary: &RunSummary, lang: &str, dry_run: bool) {
    println!("{}", summary_message(summary, lang, dry_run));
}
