use std::io::{self, Write};
use std::process;

use emoji_parse::{EmojiProperty, UcdFile};

use crate::args::ArgMatches;
use crate::error::Result;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::Other(format!($($tt)*)))
    }
}

mod app;
mod args;
mod error;
mod logger;
mod util;
mod writer;

mod emoji_properties;
mod text;

fn main() {
    if let Err(err) = run() {
        if err.is_broken_pipe() {
            process::exit(0);
        }
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = app::app().get_matches();
    init_logging(&matches)?;
    match matches.subcommand() {
        ("emoji-properties", Some(m)) => {
            emoji_properties::command(ArgMatches::new(m))
        }
        ("test-emoji-data", Some(m)) => {
            cmd_test_emoji_data(ArgMatches::new(m))
        }
        ("classify", Some(m)) => text::classify(ArgMatches::new(m)),
        ("filter", Some(m)) => text::filter(ArgMatches::new(m)),
        ("strip", Some(m)) => text::strip(ArgMatches::new(m)),
        ("normalize", Some(m)) => text::normalize(ArgMatches::new(m)),
        ("components", Some(m)) => text::components(ArgMatches::new(m)),
        ("", _) => write_help(&mut io::stdout()),
        (unknown, _) => err!("unrecognized command: {}", unknown),
    }
}

/// Write the top-level help. The help is rendered into memory first so that
/// a closed stdout surfaces as an I/O error.
fn write_help<W: Write>(wtr: &mut W) -> Result<()> {
    let mut help = vec![];
    app::app().write_help(&mut help)?;
    wtr.write_all(&help)?;
    writeln!(wtr)?;
    wtr.flush()?;
    Ok(())
}

fn init_logging(matches: &clap::ArgMatches<'_>) -> Result<()> {
    // Global flags may be given before or after the subcommand.
    let present = |name: &str| {
        matches.is_present(name)
            || matches
                .subcommand()
                .1
                .map_or(false, |sub| sub.is_present(name))
    };
    if let Err(err) = logger::Logger::init() {
        return err!("failed to initialize logger: {}", err);
    }
    if present("trace") {
        log::set_max_level(log::LevelFilter::Trace);
    } else if present("debug") {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Warn);
    }
    Ok(())
}

fn cmd_test_emoji_data(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    let mut stdout = io::stdout();
    for result in EmojiProperty::from_dir(dir)? {
        let x: EmojiProperty = result?;
        writeln!(stdout, "{}", x)?;
    }
    Ok(())
}
