//! Example: Download a file
//!
//! Usage:
//!   cargo run --example download -- [--token TOKEN] [--proxy PROXY] [--save-dir DIR] (--id FILE_ID | REMOTE_PATH)

mod cli;

use cli::{connection_from_parser, init_tracing, usage_and_exit, ArgParser};
use drivelib::RemoteRef;
use std::path::Path;

const USAGE: &str = "Usage: cargo run --example download -- [--token TOKEN] [--proxy PROXY] [--save-dir DIR] (--id FILE_ID | REMOTE_PATH)";

#[tokio::main]
async fn main() -> drivelib::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = connection_from_parser(&mut parser, USAGE);
    let id = parser.take_value(&["--id"]);
    let save_dir = parser.take_value(&["--save-dir"]);
    let mut positionals = parser.remaining();
    if positionals.len() > 1 {
        usage_and_exit(USAGE);
    }

    let source = match RemoteRef::from_options(positionals.pop(), id) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            usage_and_exit(USAGE);
        }
    };

    let session = conn.session()?;

    println!("Downloading {:?}...", source);
    let file = session
        .download(source, save_dir.as_deref().map(Path::new))
        .await?;

    let dest = save_dir.as_deref().unwrap_or(".");
    println!("Saved {} ({}) to {}", file.title, file.id, dest);
    Ok(())
}
