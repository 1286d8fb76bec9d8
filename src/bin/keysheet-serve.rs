//! Keysheet serve - static file server over the generated output.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[path = "../logging.rs"]
mod logging;

const DEFAULT_PORT: u16 = 5000;

fn print_usage() {
    eprintln!("Usage: keysheet-serve [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --port <N>     Port to listen on (default: 5000)");
    eprintln!("  --dir <DIR>    Directory to serve (default: $KEYSHEET_OUTPUT_DIR or output/)");
    eprintln!("  -h, --help     Print help");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut port = DEFAULT_PORT;
    let mut dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --port requires a number");
                    std::process::exit(1);
                }
                port = match args[i].parse() {
                    Ok(port) => port,
                    Err(_) => {
                        eprintln!("Error: invalid port: {}", args[i]);
                        std::process::exit(1);
                    }
                };
            }
            "--dir" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --dir requires a directory");
                    std::process::exit(1);
                }
                dir = Some(PathBuf::from(&args[i]));
            }
            arg => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let dir = dir
        .or_else(|| std::env::var("KEYSHEET_OUTPUT_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("output"));
    if !dir.is_dir() {
        eprintln!(
            "Error: {} is not a directory; generate cheatsheets first",
            dir.display()
        );
        std::process::exit(1);
    }

    let app = Router::new()
        .fallback_service(ServeDir::new(&dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, dir = %dir.display(), "serving cheatsheets");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
