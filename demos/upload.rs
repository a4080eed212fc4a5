mod cli;

use cli::{connection_from_parser, init_tracing, usage_and_exit, ArgParser};
use drivelib::RemoteRef;
use std::process;

const USAGE: &str = "Usage: cargo run --example upload -- [--token TOKEN] [--proxy PROXY] (--dir REMOTE_DIR | --dir-id FOLDER_ID) <LOCAL_FILE>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = connection_from_parser(&mut parser, USAGE);
    let dir = parser.take_value(&["--dir"]);
    let dir_id = parser.take_value(&["--dir-id"]);
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let local_file = &positionals[0];

    let destination = match RemoteRef::from_options(dir, dir_id) {
        Ok(destination) => destination,
        Err(e) => {
            eprintln!("{}", e);
            usage_and_exit(USAGE);
        }
    };

    let session = conn.session()?;

    println!("Uploading {} to {:?}...", local_file, destination);
    match session.upload(local_file, destination).await {
        Ok(file) => {
            println!("Upload complete!");
            println!("Created file: {} ({})", file.title, file.id);
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            process::exit(1);
        }
    }

    Ok(())
}
