mod animation;
mod cli;
mod config;
mod field;
mod help;
mod render;
mod terminal;

use std::io;
use std::thread;
use std::time::Duration;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = cli::parse_args(&args);

    // Bare invocation: show the usage screen, then start with defaults.
    if args.is_empty() {
        help::show_usage();
        thread::sleep(Duration::from_secs(2));
    }

    animation::run(config)
}
