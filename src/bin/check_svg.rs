use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use logo_search::svg::inspect_file;

#[derive(Parser, Debug)]
#[command(about = "Print width/height/viewBox metadata for a local SVG file")]
struct Args {
    /// Path to the SVG file
    svg_path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // Help and version requests are not failures.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let meta = match inspect_file(&args.svg_path) {
        Ok(meta) => meta,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("file={}", args.svg_path.display());
    println!("width={}", value_or_missing(meta.width.as_deref()));
    println!("height={}", value_or_missing(meta.height.as_deref()));
    println!("viewBox={}", value_or_missing(meta.view_box.as_deref()));

    if meta.view_box.as_deref().map_or(true, str::is_empty) {
        println!("warning: missing viewBox (can cause scaling issues)");
    }
    ExitCode::SUCCESS
}

fn value_or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "missing",
    }
}
