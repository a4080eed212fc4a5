//! Example: Resolve a Drive path to its identifier
//!
//! Usage:
//!   cargo run --example resolve -- [--token TOKEN] [--from FOLDER_ID] <REMOTE_PATH>

mod cli;

use cli::{connection_from_parser, init_tracing, usage_and_exit, ArgParser};
use std::process;

const USAGE: &str =
    "Usage: cargo run --example resolve -- [--token TOKEN] [--proxy PROXY] [--from FOLDER_ID] <REMOTE_PATH>";

#[tokio::main]
async fn main() -> drivelib::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = connection_from_parser(&mut parser, USAGE);
    let from = parser.take_value(&["--from"]);
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }

    let session = conn.session()?;
    match session.resolve_path(&positionals[0], from.as_deref()).await {
        Ok(id) => println!("{}", id),
        Err(e) if e.is_not_found() => {
            eprintln!("{}", e);
            process::exit(2);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
