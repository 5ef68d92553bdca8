use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Ruby style checker - flag per-line stylistic anti-patterns")]
#[command(long_about = "Scans Ruby sources and prints one diagnostic per line matching \
    a fixed set of style rules.\n\n\
    Exit codes:\n  \
    0 - Run completed (diagnostics may or may not have been printed)\n  \
    2 - A supplied path could not be resolved or read")]
pub struct Cli {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// File extension scanned for inside directories (directly named files
    /// are always checked)
    #[arg(long, default_value = "rb")]
    pub ext: String,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
