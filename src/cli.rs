use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use crate::runtime;
use crate::session::Session;
use crate::tools::export::{CopyPayload, ExportKind};
use crate::tools::fetch::source_for;
use crate::tools::filter::LinkFilter;
use crate::tools::navigate::{destination_url, Destination};
use crate::tools::scrape::{ExtractOptions, DEFAULT_NAV_DEPTH};
use crate::types::ApiResponse;

#[derive(Parser)]
#[command(name = "seoscope", version, about = "On-page SEO inspection (JSON and CSV output)")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the full snapshot of a page
    Analyze(SourceArgs),
    /// Show the page's links through a filter
    Links {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write a CSV export
    Export {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(value_enum)]
        kind: ExportKind,
        /// Output file (defaults to the export's usual file name)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print a clipboard payload as plain text
    Copy {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(value_enum)]
        payload: CopyPayload,
    },
    /// Print the URL of an auxiliary destination for a page URL
    Open {
        page_url: String,
        #[arg(value_enum)]
        destination: Destination,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// http(s) URL, path to an HTML file, or `-` for stdin
    input: String,
    /// Page URL for file or stdin input
    #[arg(long)]
    url: Option<String>,
    /// Skip the local-business heuristics
    #[arg(long)]
    no_business: bool,
    /// Skip JSON-LD, Microdata and RDFa
    #[arg(long)]
    no_schema: bool,
    /// Ancestor levels searched for navigation containers
    #[arg(long, default_value_t = DEFAULT_NAV_DEPTH)]
    nav_depth: usize,
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    hide_duplicates: bool,
    #[arg(long)]
    hide_internal: bool,
    #[arg(long)]
    hide_external: bool,
    #[arg(long)]
    hide_follow: bool,
    #[arg(long)]
    hide_nofollow: bool,
    #[arg(long)]
    hide_navigation: bool,
    #[arg(long)]
    group_by_domain: bool,
    /// Counts and groups only, without the link list
    #[arg(long)]
    summary_only: bool,
    /// Keep links whose URL or anchor contains this text
    #[arg(long)]
    search: Option<String>,
}

impl From<FilterArgs> for LinkFilter {
    fn from(args: FilterArgs) -> Self {
        LinkFilter {
            hide_duplicates: args.hide_duplicates,
            hide_internal: args.hide_internal,
            hide_external: args.hide_external,
            show_follow: !args.hide_follow,
            show_nofollow: !args.hide_nofollow,
            hide_navigation: args.hide_navigation,
            group_by_domain: args.group_by_domain,
            show_full_list: !args.summary_only,
            search: args.search,
        }
    }
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Analyze(source) => {
            finish(load(&source).map(|session| session.snapshot().clone()));
        }
        Command::Links { source, filter } => {
            let filter = LinkFilter::from(filter);
            finish(load(&source).map(|session| session.filter_links(&filter)));
        }
        Command::Export {
            source,
            kind,
            out,
            filter,
        } => {
            let filter = LinkFilter::from(filter);
            let path = out.unwrap_or_else(|| PathBuf::from(kind.default_file_name()));
            finish(load(&source).and_then(|session| {
                session
                    .export_to(kind, &filter, &path)
                    .with_context(|| format!("export to {} failed", path.display()))?;
                Ok(json!({ "kind": kind, "path": path.display().to_string() }))
            }));
        }
        Command::Copy { source, payload } => {
            let text = load(&source).and_then(|session| Ok(session.payload(payload)?));
            match text {
                Ok(text) => print!("{text}"),
                Err(e) => fail(e),
            }
        }
        Command::Open {
            page_url,
            destination,
        } => match destination_url(&page_url, destination) {
            Ok(url) => println!("{url}"),
            Err(e) => fail(e.into()),
        },
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

fn load(args: &SourceArgs) -> anyhow::Result<Session> {
    let opts = ExtractOptions::new()
        .with_business(!args.no_business)
        .with_structured_data(!args.no_schema)
        .with_nav_depth(args.nav_depth);
    let source = source_for(&args.input, args.url.as_deref())?;
    let session = runtime::block_on(Session::from_source(source.as_ref(), &opts))
        .with_context(|| format!("could not load {}", args.input))?;
    Ok(session)
}

fn finish<T: serde::Serialize>(res: anyhow::Result<T>) {
    match res {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => {
            log::error!("{e:#}");
            print_json(ApiResponse::<()>::err(format!("{e:#}")));
            std::process::exit(1);
        }
    }
}

fn fail(e: anyhow::Error) {
    log::error!("{e:#}");
    eprintln!("error: {e:#}");
    std::process::exit(1);
}

fn print_json<T: serde::Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: could not serialise output: {e}"),
    }
}
