use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

/// Argument definitions for the `matprod` binary.
pub fn command() -> Command {
    Command::new("matprod")
        .version(clap::crate_version!())
        .about("Computes and returns the product of two matrices stored as delimited text")
        .arg(
            Arg::new("a")
                .short('a')
                .long("left")
                .help("Delimited text file containing matrix a")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("b")
                .short('b')
                .long("right")
                .help("Delimited text file containing matrix b")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the result to this file instead of printing it (optional)")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .help("Delimiter for all files (default: tab for .tsv, comma otherwise)")
                .value_parser(clap::value_parser!(char)),
        )
        .arg(
            Arg::new("overflow")
                .long("overflow")
                .help("Integer overflow handling for the product")
                .value_parser(["wrapping", "checked"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON configuration file. Command line flags override it.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("print_config")
                .long("print-config")
                .help("Print the effective configuration as JSON and exit")
                .action(ArgAction::SetTrue),
        )
}
