mod app;
mod config;
mod errors;
mod extract;
mod input;
mod materialize;
mod report;
mod types;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("md2r")
        .version(env!("CARGO_PKG_VERSION"))
        .about("md2r: writes every ```markdown block carrying a `// FILE: path` marker to that path.")
        .arg(
            // Optional here so a missing path reports our own usage error and exit code
            Arg::new("markdown")
                .help("Markdown file to materialize")
                .value_name("MARKDOWN_FILE")
                .required(false),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .value_name("TAG")
                .help("Fence language tag to match (default: markdown, or `lang` from md2r.yml)"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory that relative FILE paths are written under (default: current directory)"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("List the files that would be written without touching the disk")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

fn args_from(matches: &ArgMatches) -> app::Args {
    app::Args {
        input: matches.get_one::<String>("markdown").cloned(),
        lang: matches.get_one::<String>("lang").cloned(),
        output_dir: matches.get_one::<PathBuf>("output-dir").cloned(),
        dry_run: matches.get_flag("dry-run"),
        debug: matches.get_flag("debug"),
    }
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    app::run(args_from(&matches))?;
    Ok(())
}
