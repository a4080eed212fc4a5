use std::env;
use std::process;

use drivelib::Session;
use tracing_subscriber::{fmt, EnvFilter};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("drivelib=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

/// Connection options shared by every demo.
pub struct Connection {
    pub token: String,
    pub proxy: Option<String>,
}

/// Read `--token` (or `GDRIVE_ACCESS_TOKEN`) and `--proxy`.
pub fn connection_from_parser(parser: &mut ArgParser, usage: &'static str) -> Connection {
    let token = parser
        .take_value(&["--token", "-t"])
        .or_else(|| env::var("GDRIVE_ACCESS_TOKEN").ok())
        .unwrap_or_else(|| usage_and_exit(usage));
    let proxy = parser.take_value(&["--proxy"]);

    Connection { token, proxy }
}

impl Connection {
    pub fn session(&self) -> drivelib::Result<Session> {
        match &self.proxy {
            Some(proxy) => Session::with_proxy(self.token.clone(), proxy),
            None => Ok(Session::new(self.token.clone())),
        }
    }
}
