use anyhow::Result;
use clap::Parser;

use git_wayback::config;
use git_wayback::domain::Cutoff;
use git_wayback::git::Git2Repository;
use git_wayback::ui;
use git_wayback::{current_tag, Selection, Wayback};

#[derive(clap::Parser)]
#[command(
    name = "git-wayback",
    about = "Find the newest commit and tag strictly before a wayback time"
)]
struct Args {
    #[arg(help = "Path to the repository")]
    path: Option<String>,

    #[arg(help = "Wayback commit time, e.g. '2017-09-04 19:43:36 +0300'")]
    ctime: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print each scanned candidate while searching")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-wayback {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let (path, ctime) = match (args.path, args.ctime) {
        (Some(path), Some(ctime)) => (path, ctime),
        _ => {
            ui::display_error("expected <path> and <wayback commit time>");
            print_layout_hint(&config.time_format);
            std::process::exit(1);
        }
    };

    // Parse the cutoff before touching the repository
    let cutoff = match Cutoff::parse_with_layout(&ctime, &config.time_format) {
        Ok(cutoff) => cutoff,
        Err(e) => {
            ui::display_error(&e.to_string());
            print_layout_hint(&config.time_format);
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(&path) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Cannot open repository at '{}': {}", path, e));
            std::process::exit(1);
        }
    };

    run_query(&repo, cutoff, args.debug || config.debug)
}

/// Run the three queries of one invocation: the HEAD tag lookup, then
/// the tag-required and any-commit selections.
fn run_query(repo: &Git2Repository, cutoff: Cutoff, debug: bool) -> Result<()> {
    use git_wayback::git::Repository;

    let head = repo.head_id()?;

    match current_tag(repo)? {
        Some(tag) => ui::display_head_tag(&tag),
        None => ui::display_status("HEAD is not tagged"),
    }

    ui::display_result_header();

    let tagged = Wayback::new(repo, cutoff, true).with_debug(debug).find(head)?;
    report_selection("Tagged", &tagged, &cutoff);

    let untagged = Wayback::new(repo, cutoff, false)
        .with_debug(debug)
        .find(head)?;
    report_selection("Untagged", &untagged, &cutoff);

    // Nothing at all predates the cutoff: signal the caller
    if !tagged.is_found() && !untagged.is_found() {
        std::process::exit(1);
    }

    Ok(())
}

fn report_selection(label: &str, selection: &Selection, cutoff: &Cutoff) {
    match selection {
        Selection::Found { commit, tag } => ui::display_result(label, commit, tag.as_deref()),
        Selection::NotFound => ui::display_not_found(label, cutoff),
    }
}

fn print_layout_hint(layout: &str) {
    eprintln!("\nFormat the wayback commit time to match the layout");
    eprintln!("Layout                 {}", layout);
    eprintln!(
        "Formatted current time {}",
        Cutoff::now_formatted(layout)
    );
}
