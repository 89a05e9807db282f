use crate::config::models::{AppConfig, StreamTarget};
use crate::error::{CliError, Result};
use crate::utils::parser::STDIO_SENTINEL;
use crate::utils::progress::CliProgressHandler;
use fupred::core::io::ct::CtFile;
use fupred::core::io::report::FuReport;
use fupred::core::io::traits::{ContactFile, ReportFile};
use fupred::core::models::candidate::Candidate;
use fupred::core::models::contact::ContactSet;
use fupred::engine::progress::ProgressReporter;
use fupred::workflows;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

pub fn run(config: &AppConfig) -> Result<()> {
    let contacts = read_contacts(&config.input)?;
    info!(
        "Read {} contact(s) on a chain of {} position(s).",
        contacts.num_contacts(),
        contacts.len()
    );

    let reporter = if config.show_progress {
        ProgressReporter::with_callback(CliProgressHandler::new().get_callback())
    } else {
        ProgressReporter::new()
    };

    let result = workflows::predict::run(&contacts, &config.core_config, &reporter)?;
    if result.candidates.is_empty() {
        warn!("No boundary candidates found.");
    }

    write_report(&config.output, &result.candidates)?;
    info!(
        "Wrote {} of {} candidate(s).",
        result.candidates.len(),
        result.candidates_considered
    );
    Ok(())
}

fn display_path(target: &StreamTarget) -> PathBuf {
    match target {
        StreamTarget::Stdio => PathBuf::from(STDIO_SENTINEL),
        StreamTarget::Path(path) => path.clone(),
    }
}

fn read_contacts(input: &StreamTarget) -> Result<ContactSet> {
    let read = match input {
        StreamTarget::Stdio => {
            info!("Reading contacts from standard input.");
            CtFile::read_from(&mut io::stdin().lock())
        }
        StreamTarget::Path(path) => {
            info!("Reading contacts from {:?}", path);
            CtFile::read_from_path(path)
        }
    };
    read.map_err(|e| CliError::Input {
        path: display_path(input),
        source: e.into(),
    })
}

fn write_report(output: &StreamTarget, candidates: &[Candidate]) -> Result<()> {
    let written = match output {
        StreamTarget::Stdio => {
            let mut stdout = io::stdout().lock();
            FuReport::write_to(candidates, &mut stdout)
                .and_then(|()| stdout.flush().map_err(Into::into))
        }
        StreamTarget::Path(path) => {
            info!("Writing report to {:?}", path);
            FuReport::write_to_path(candidates, path)
        }
    };
    written.map_err(|e| CliError::Output {
        path: display_path(output),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fupred::core::io::report::HEADER;
    use fupred::engine::config::PredictionConfig;
    use std::fs;
    use tempfile::tempdir;

    const NESTED_DOMAIN_CT: &str = "\
16 nested domain
 1 A 0 2 16 1
 2 A 1 3 15 2
 3 A 2 4 4 3
 4 A 3 5 3 4
 5 A 4 6 12 5
 6 A 5 7 11 6
 7 A 6 8 10 7
 8 A 7 9 9 8
 9 A 8 10 8 9
10 A 9 11 7 10
11 A 10 12 6 11
12 A 11 13 5 12
13 A 12 14 14 13
14 A 13 15 13 14
15 A 14 16 2 15
16 A 15 0 1 16
";

    fn app(input: StreamTarget, output: StreamTarget) -> AppConfig {
        AppConfig {
            input,
            output,
            show_progress: false,
            core_config: PredictionConfig::default(),
        }
    }

    #[test]
    fn report_is_written_to_the_output_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chain.ct");
        let output = dir.path().join("chain.fu");
        fs::write(&input, NESTED_DOMAIN_CT).unwrap();

        run(&app(
            StreamTarget::Path(input),
            StreamTarget::Path(output.clone()),
        ))
        .unwrap();

        let report = fs::read_to_string(output).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            "1.200000\tD\t(1-4,13-16)(5-12)\t(1-4,13-16)5-4,13-12(5-12)"
        );
        assert_eq!(lines[2], "4.000000\tC\t(1-4)(5-16)\t(1-4)5-4(5-16)");
        assert_eq!(lines[3], "4.000000\tC\t(1-12)(13-16)\t(1-12)13-12(13-16)");
    }

    #[test]
    fn missing_input_file_names_the_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.ct");
        let err = run(&app(
            StreamTarget::Path(missing.clone()),
            StreamTarget::Path(dir.path().join("out.fu")),
        ))
        .unwrap_err();
        assert!(matches!(err, CliError::Input { path, .. } if path == missing));
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chain.ct");
        fs::write(&input, NESTED_DOMAIN_CT).unwrap();

        let err = run(&app(
            StreamTarget::Path(input),
            StreamTarget::Path(dir.path().to_path_buf()),
        ))
        .unwrap_err();
        assert!(matches!(err, CliError::Output { .. }));
    }

    #[test]
    fn overlong_chain_surfaces_the_engine_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chain.ct");
        fs::write(&input, NESTED_DOMAIN_CT).unwrap();

        let mut config = app(
            StreamTarget::Path(input),
            StreamTarget::Path(dir.path().join("out.fu")),
        );
        config.core_config.search.max_chain_length = 12;
        assert!(matches!(run(&config), Err(CliError::Engine(_))));
    }
}
