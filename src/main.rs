use acreage::{ReportEngine, ReportRequest};
use std::env;
use std::fs;

/// A simple CLI to render a report PDF from a JSON request file.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Renders a markdown report request into a PDF.");
        eprintln!();
        eprintln!("Usage: {} <path/to/request.json> <path/to/output.pdf>", args[0]);
        eprintln!();
        eprintln!("The request file holds the upstream JSON body:");
        eprintln!(r##"  {{"markdown_text": "# Report\n...", "name": "...", "location": "...", "language": "english"}}"##);
        std::process::exit(1);
    }

    let request_path = &args[1];
    let output_path = &args[2];

    let raw = match fs::read_to_string(request_path) {
        Ok(raw) => raw,
        Err(error) => {
            eprintln!("Could not read {request_path}: {error}");
            std::process::exit(1);
        }
    };
    let request: ReportRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(error) => {
            eprintln!("Invalid request JSON in {request_path}: {error}");
            std::process::exit(1);
        }
    };

    let engine = ReportEngine::with_default_layout(&default_catalog());
    let bytes = match engine.render(&request) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = fs::write(output_path, &bytes) {
        eprintln!("Could not write {output_path}: {error}");
        std::process::exit(1);
    }
    println!("Wrote {} bytes to {output_path}", bytes.len());
}

#[cfg(feature = "system-fonts")]
fn default_catalog() -> acreage::SystemCatalog {
    acreage::SystemCatalog::from_system()
}

#[cfg(not(feature = "system-fonts"))]
fn default_catalog() -> acreage::BuiltinCatalog {
    acreage::BuiltinCatalog
}
