//! Keysheet - YAML shortcut documents to HTML cheatsheets.

mod generate;
mod logging;
mod render;

use std::env;
use std::path::PathBuf;

use generate::GenerateOptions;
use keysheet_core::storage::load_layout_data;
use render::Renderer;

const DEFAULT_CHEATSHEETS_DIR: &str = "cheatsheets";
const DEFAULT_OUTPUT_DIR: &str = "output";
const OUTPUT_DIR_ENV: &str = "KEYSHEET_OUTPUT_DIR";

fn print_usage() {
    eprintln!("Usage: keysheet [OPTIONS] [FILE]...");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]...                 Cheatsheet YAML files (default: all *.yaml in the cheatsheets directory)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <DIR>        Output directory (default: $KEYSHEET_OUTPUT_DIR or output/)");
    eprintln!("  --cheatsheets <DIR>       Directory scanned when no files are given (default: cheatsheets/)");
    eprintln!("  --layouts <DIR>           Directory with keyboard_layouts.yaml / system_mappings.yaml overrides");
    eprintln!("  --templates <DIR>         Directory with template overrides");
    eprintln!("  --check                   Validate and lint only; exit non-zero when any file is invalid");
    eprintln!("  --fix                     Apply textual auto-fixes in place before generating");
    eprintln!("  -h, --help                Print help");
}

fn main() {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = env::args().collect();

    let mut files: Vec<PathBuf> = Vec::new();
    let mut output_dir: Option<PathBuf> = None;
    let mut cheatsheets_dir: Option<PathBuf> = None;
    let mut layouts_dir: Option<PathBuf> = None;
    let mut templates_dir: Option<PathBuf> = None;
    let mut check = false;
    let mut fix = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a directory");
                    std::process::exit(1);
                }
                output_dir = Some(PathBuf::from(&args[i]));
            }
            "--cheatsheets" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --cheatsheets requires a directory");
                    std::process::exit(1);
                }
                cheatsheets_dir = Some(PathBuf::from(&args[i]));
            }
            "--layouts" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --layouts requires a directory");
                    std::process::exit(1);
                }
                layouts_dir = Some(PathBuf::from(&args[i]));
            }
            "--templates" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --templates requires a directory");
                    std::process::exit(1);
                }
                templates_dir = Some(PathBuf::from(&args[i]));
            }
            "--check" => check = true,
            "--fix" => fix = true,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => files.push(PathBuf::from(&args[i])),
        }
        i += 1;
    }

    if files.is_empty() {
        let dir = cheatsheets_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CHEATSHEETS_DIR));
        files = match generate::yaml_files_in(&dir) {
            Ok(files) => files,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        };
        if files.is_empty() {
            eprintln!("No YAML files found in {}", dir.display());
            std::process::exit(1);
        }
    }

    if check {
        let invalid = generate::check_files(&files);
        if invalid > 0 {
            eprintln!("{} of {} files are invalid.", invalid, files.len());
            std::process::exit(1);
        }
        return;
    }

    let (layouts, warnings) = load_layout_data(layouts_dir.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let renderer = match Renderer::new(templates_dir.as_deref()) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let options = GenerateOptions {
        output_dir: output_dir
            .or_else(|| env::var(OUTPUT_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        fix,
    };

    let sheets = generate::generate_all(&files, &renderer, &layouts, &options);
    if sheets.is_empty() {
        println!("No valid cheatsheets were generated due to errors.");
        std::process::exit(1);
    }
    println!("Generated cheatsheets for {} YAML files.", sheets.len());
}
