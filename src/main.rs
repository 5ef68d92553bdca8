use std::path::Path;

use clap::Parser;

use style_guard::analyzer::{FileAnalyzer, FileReport};
use style_guard::cli::Cli;
use style_guard::output::{DiagnosticFormatter, TextFormatter};
use style_guard::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use style_guard::{EXIT_PATH_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let filter = match SourceFilter::new(cli.ext.clone(), &cli.exclude) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_PATH_ERROR;
        }
    };

    let scanner = DirectoryScanner::new(filter);
    let analyzer = FileAnalyzer::new();
    let formatter = TextFormatter;

    // Each argument is resolved independently: a bad path fails that
    // argument alone, the remaining ones are still processed.
    let mut failed = false;
    for path in &cli.paths {
        if let Err(e) = check_path(path, &scanner, &analyzer, &formatter) {
            eprintln!("Error: {e}");
            failed = true;
        }
    }

    if failed { EXIT_PATH_ERROR } else { EXIT_SUCCESS }
}

fn check_path(
    path: &Path,
    scanner: &DirectoryScanner<SourceFilter>,
    analyzer: &FileAnalyzer,
    formatter: &TextFormatter,
) -> style_guard::Result<()> {
    if !path.exists() {
        return Err(style_guard::StyleGuardError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    if path.is_dir() {
        for file in scanner.scan(path)? {
            let report = analyzer.analyze(&file)?;
            emit(&report, formatter);
        }
    } else {
        // Directly named files are checked regardless of extension
        let report = analyzer.analyze(path)?;
        emit(&report, formatter);
    }

    Ok(())
}

fn emit(report: &FileReport, formatter: &TextFormatter) {
    for diagnostic in &report.diagnostics {
        println!("{}", formatter.format(diagnostic));
    }
    for problem in &report.problems {
        eprintln!("{}", TextFormatter::format_problem(problem));
    }
}
