//! md2report - status report markdown to XML converter

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use md2report::{Result, read_markdown, read_markdown_from_reader, write_xml, write_xml_to_writer};

#[derive(Parser)]
#[command(name = "md2report")]
#[command(version, about = "Convert status report markdown to report XML", long_about = None)]
#[command(after_help = "EXAMPLES:
    md2report 2026q2.md 2026q2.xml    Convert a report file
    md2report 2026q2.md               Convert to standard output
    md2report < 2026q2.md             Filter standard input")]
struct Cli {
    /// Input markdown file (standard input if omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output XML file (standard output if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let report = match &cli.input {
        Some(path) => read_markdown(path)?,
        None => read_markdown_from_reader(io::stdin().lock())?,
    };

    match &cli.output {
        Some(path) => write_xml(&report, path)?,
        None => write_xml_to_writer(&report, io::stdout().lock())?,
    }

    Ok(())
}
