//! Example: Upload a file into a team drive
//!
//! Usage:
//!   cargo run --example upload_team -- [--token TOKEN] --team TEAM_ID [--folder-id FOLDER_ID] <LOCAL_FILE>

mod cli;

use cli::{connection_from_parser, init_tracing, usage_and_exit, ArgParser};

const USAGE: &str = "Usage: cargo run --example upload_team -- [--token TOKEN] [--proxy PROXY] --team TEAM_ID [--folder-id FOLDER_ID] <LOCAL_FILE>";

#[tokio::main]
async fn main() -> drivelib::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = connection_from_parser(&mut parser, USAGE);
    let team = parser
        .take_value(&["--team"])
        .unwrap_or_else(|| usage_and_exit(USAGE));
    let folder_id = parser.take_value(&["--folder-id"]);
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }

    let session = conn.session()?;
    let file = session
        .upload_team(&positionals[0], &team, folder_id.as_deref())
        .await?;

    println!("Uploaded {} ({}) to team drive {}", file.title, file.id, team);
    Ok(())
}
