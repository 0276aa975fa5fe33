use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "graphreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sequence a graph description into a render-op reel (JSON).
    Sequence(SequenceArgs),
    /// Print per-phase op counts, total duration and fingerprint.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Input graph description JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional reel config JSON (defaults apply to omitted fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output reel JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input graph description JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional reel config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sequence(args) => cmd_sequence(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load(in_path: &Path, config: Option<&Path>) -> anyhow::Result<graphreel::Reel> {
    let graph = graphreel::GraphDescription::from_path(in_path)?
        .into_graph()
        .with_context(|| format!("build graph from '{}'", in_path.display()))?;
    let config = match config {
        Some(path) => graphreel::ReelConfig::from_path(path)?,
        None => graphreel::ReelConfig::default(),
    };
    Ok(graphreel::sequence_graph(&graph, &config)?)
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let reel = load(&args.in_path, args.config.as_deref())?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&reel)
    } else {
        serde_json::to_string(&reel)
    }
    .context("serialize reel")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let reel = load(&args.in_path, args.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();
    for phase in graphreel::Phase::ORDER {
        writeln!(
            stdout,
            "{:<20} batches={:<3} ops={}",
            format!("{phase:?}"),
            reel.batch_count(phase),
            reel.ops_in(phase).count()
        )?;
    }
    writeln!(stdout, "objects:     {}", reel.objects.len())?;
    writeln!(stdout, "duration:    {:.2}s", reel.total_duration())?;
    writeln!(stdout, "fingerprint: {}", graphreel::fingerprint_reel(&reel))?;
    Ok(())
}
