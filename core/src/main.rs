use clap::Parser;
use ddsmcat_core::cli::{Cli, OutputFormat};
use ddsmcat_core::{read_case, read_overlay, CaseDocument, OverlayDocument, TextReport};
use log::{error, info};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    info!("Parsing case metadata: {}", cli.case_file.display());
    let case = match read_case(&cli.case_file) {
        Ok(case) => case,
        Err(e) => {
            error!("Failed to parse {}: {}", cli.case_file.display(), e);
            eprintln!("Error: {}: {}", cli.case_file.display(), e);
            process::exit(1);
        }
    };
    info!(
        "Found {} view blocks, {} with overlays",
        case.views.len(),
        case.overlay_views().len()
    );

    let mut overlays: Vec<(String, OverlayDocument)> = Vec::new();
    for path in &cli.overlays {
        info!("Parsing annotation file: {}", path.display());
        match read_overlay(path) {
            Ok(document) => {
                info!("{}: {} abnormalities", path.display(), document.len());
                overlays.push((file_label(path), document));
            }
            Err(e) => {
                error!("Failed to parse {}: {}", path.display(), e);
                eprintln!("Error: {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    output_report(&case, &overlays, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Display label for an annotation file: its file name when it has one
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn output_report(
    case: &CaseDocument,
    overlays: &[(String, OverlayDocument)],
    format: OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(case, overlays);
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(case, overlays) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(
    case: &CaseDocument,
    overlays: &[(String, OverlayDocument)],
) -> Result<String, serde_json::Error> {
    use ddsmcat_core::AbnormalityRecord;
    use serde::Serialize;

    #[derive(Serialize)]
    struct CaseJson<'a> {
        case: &'a CaseDocument,
        annotations: Vec<AnnotationJson<'a>>,
    }

    #[derive(Serialize)]
    struct AnnotationJson<'a> {
        file: &'a str,
        abnormalities: &'a [AbnormalityRecord],
    }

    let annotations = overlays
        .iter()
        .map(|(label, document)| AnnotationJson {
            file: label,
            abnormalities: &document.abnormalities,
        })
        .collect();

    serde_json::to_string_pretty(&CaseJson { case, annotations })
}
