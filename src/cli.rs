use std::path::PathBuf;

use clap::Parser;

/// Every flag is optional; running with none reproduces the default layout.
#[derive(Parser, Debug)]
#[command(
    name = "spdx-gen",
    about = "Generate Ada enumerations from the SPDX license and exception lists",
    version
)]
pub struct Cli {
    /// Directory receiving the generated .ads files [default: src]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file [default: ./.spdx-gen/config.toml, fallback ~/.config/spdx-gen/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// URL of the SPDX licenses.json document
    #[arg(long, value_name = "URL")]
    pub licenses_url: Option<String>,

    /// URL of the SPDX exceptions.json document
    #[arg(long, value_name = "URL")]
    pub exceptions_url: Option<String>,

    /// Read licenses.json from disk instead of the network
    #[arg(long, value_name = "FILE")]
    pub licenses_file: Option<PathBuf>,

    /// Read exceptions.json from disk instead of the network
    #[arg(long, value_name = "FILE")]
    pub exceptions_file: Option<PathBuf>,

    /// HTTP timeout in seconds [default: 30]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Add an `Unknown` placeholder as the first license
    #[arg(long)]
    pub with_unknown: bool,

    /// Compare with the files on disk instead of writing; exit 1 if any differ
    #[arg(long)]
    pub check: bool,

    /// List every id and its Ada identifier
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}
