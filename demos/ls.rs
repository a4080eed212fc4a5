//! Example: List a Drive folder
//!
//! Usage:
//!   cargo run --example ls -- [--token TOKEN] [--proxy PROXY] [--id FOLDER_ID | REMOTE_PATH]

mod cli;

use cli::{connection_from_parser, init_tracing, usage_and_exit, ArgParser};

const USAGE: &str =
    "Usage: cargo run --example ls -- [--token TOKEN] [--proxy PROXY] [--id FOLDER_ID | REMOTE_PATH]";

#[tokio::main]
async fn main() -> drivelib::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = connection_from_parser(&mut parser, USAGE);
    let id = parser.take_value(&["--id"]);
    let positionals = parser.remaining();
    if positionals.len() > 1 || (id.is_some() && !positionals.is_empty()) {
        usage_and_exit(USAGE);
    }

    let session = conn.session()?;

    let folder_id = match (id, positionals.first()) {
        (Some(id), _) => id,
        (None, Some(path)) => session.resolve_path(path, None).await?,
        (None, None) => drivelib::ROOT_ID.to_string(),
    };

    println!("Listing: {}\n", folder_id);
    let mut entries: Vec<_> = session
        .list_directory(Some(folder_id.as_str()))
        .await?
        .into_iter()
        .collect();
    entries.sort();

    if entries.is_empty() {
        println!("  (empty)");
    }
    for (title, id) in entries {
        println!("  {:<40} {}", title, id);
    }

    Ok(())
}
