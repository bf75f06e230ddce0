#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::too_many_lines)]

mod options;
mod surface;

pub use options::*;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use semver::Version;
use storm_list::{EntryBrowser, ResourceLister};

use crate::surface::TerminalDetailSurface;

lazy_static::lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
    pub static ref DEFAULT_TITLE: String = format!("Storm View {}", *VERSION);
}

pub type TerminalResult<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(version, about = "Lists resource files matching a name prefix and shows details for a selected entry.", long_about = None)]
pub struct Args {
    /// Resource directory to scan
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// File name prefix an entry must start with
    #[clap(long, value_name = "PREFIX")]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum Commands {
    #[command(about = "Browse the listing interactively (default)")]
    Browse,

    #[command(about = "Print the listing, one row per entry")]
    List,

    #[command(about = "Show the details of a single row")]
    Show { row: usize },
}

fn main() {
    let args = Args::parse();

    let _logger = Options::get_log_dir().and_then(|log_dir| {
        Logger::try_with_env_or_str("info")
            .unwrap()
            .log_to_file(FileSpec::default().directory(&log_dir).basename("storm_view").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
            .ok()
    });

    log::info!("Starting Storm View {}", *VERSION);

    let mut options = Options::load_options();
    let mut changed = false;
    if let Some(prefix) = args.prefix.clone() {
        if options.prefix != prefix {
            options.prefix = prefix;
            changed = true;
        }
    }
    if let Some(path) = args.path.clone() {
        let path = path.to_string_lossy().to_string();
        if options.resource_dir != path {
            options.resource_dir = path;
            changed = true;
        }
    }
    if changed {
        // Remember the last viewing setup for the next launch
        options.store_options();
    }

    let dir = options.resource_dir().unwrap_or_else(|| PathBuf::from("."));
    let lister = ResourceLister::new(dir, options.prefix.clone());
    let browser = EntryBrowser::load(&lister);

    let result = match args.command.unwrap_or(Commands::Browse) {
        Commands::Browse => run_browse(browser),
        Commands::List => run_list(&browser),
        Commands::Show { row } => run_show(browser, row),
    };

    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Render the listing, one numbered row per entry.
///
/// An unavailable listing renders as its error text instead of rows.
fn render_listing(out: &mut impl Write, browser: &EntryBrowser) -> io::Result<()> {
    if let Some(err) = browser.list_error() {
        writeln!(out, "Listing unavailable: {err}")?;
        return Ok(());
    }
    if browser.is_empty() {
        writeln!(out, "No matching entries.")?;
        return Ok(());
    }
    for (row, entry) in browser.entries().iter().enumerate() {
        writeln!(out, "{row:>4}  {}", entry.name)?;
    }
    Ok(())
}

fn run_list(browser: &EntryBrowser) -> TerminalResult<()> {
    let mut stdout = io::stdout();
    render_listing(&mut stdout, browser)?;
    Ok(())
}

fn run_show(mut browser: EntryBrowser, row: usize) -> TerminalResult<()> {
    if let Some(err) = browser.list_error() {
        anyhow::bail!("listing unavailable: {err}");
    }
    if !browser.select(row) {
        anyhow::bail!("no row {row} in the listing ({} entries)", browser.len());
    }
    let mut surface = TerminalDetailSurface::new(io::stdout());
    browser.activate(&mut surface)?;
    Ok(())
}

fn run_browse(mut browser: EntryBrowser) -> TerminalResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", *DEFAULT_TITLE)?;
    render_listing(&mut stdout, &browser)?;
    writeln!(stdout, "Row number shows the entry, 'l' lists, 'q' quits.")?;

    let stdin = io::stdin();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_command(&line) {
            BrowseCommand::Quit => break,
            BrowseCommand::List => render_listing(&mut stdout, &browser)?,
            BrowseCommand::Select(row) => {
                if browser.select(row) {
                    let mut surface = TerminalDetailSurface::new(&mut stdout);
                    browser.activate(&mut surface)?;
                } else {
                    writeln!(stdout, "No row {row} in the listing.")?;
                }
            }
            BrowseCommand::Help => {
                writeln!(stdout, "Commands: ROW (show details), l (list), h (help), q (quit)")?;
            }
            BrowseCommand::Unknown(cmd) => {
                writeln!(stdout, "Unknown command '{cmd}', 'h' for help.")?;
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Select(usize),
    List,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim();
    if let Ok(row) = line.parse::<usize>() {
        return BrowseCommand::Select(row);
    }
    match line {
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        "l" | "list" => BrowseCommand::List,
        "" | "h" | "?" | "help" => BrowseCommand::Help,
        _ => BrowseCommand::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_numbers() {
        assert_eq!(parse_command("0\n"), BrowseCommand::Select(0));
        assert_eq!(parse_command("  42  "), BrowseCommand::Select(42));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("q"), BrowseCommand::Quit);
        assert_eq!(parse_command("quit\n"), BrowseCommand::Quit);
        assert_eq!(parse_command("l"), BrowseCommand::List);
        assert_eq!(parse_command("help"), BrowseCommand::Help);
        assert_eq!(parse_command("\n"), BrowseCommand::Help);
    }

    #[test]
    fn test_parse_unknown_input() {
        assert_eq!(parse_command("-1"), BrowseCommand::Unknown("-1".to_string()));
        assert_eq!(parse_command("open 3"), BrowseCommand::Unknown("open 3".to_string()));
    }

    #[test]
    fn test_listing_renders_rows_in_order() {
        let browser = EntryBrowser::with_entries(vec![
            storm_list::Entry::new("nssl0049.jpg", "/res/nssl0049.jpg"),
            storm_list::Entry::new("nssl0010.jpg", "/res/nssl0010.jpg"),
        ]);

        let mut out = Vec::new();
        render_listing(&mut out, &browser).unwrap();
        let text = String::from_utf8(out).unwrap();

        let first = text.find("nssl0049.jpg").unwrap();
        let second = text.find("nssl0010.jpg").unwrap();
        assert!(first < second);
        assert!(text.contains("   0  nssl0049.jpg"));
        assert!(text.contains("   1  nssl0010.jpg"));
    }

    #[test]
    fn test_empty_listing_renders_placeholder() {
        let browser = EntryBrowser::with_entries(Vec::new());
        let mut out = Vec::new();
        render_listing(&mut out, &browser).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No matching entries.\n");
    }
}
