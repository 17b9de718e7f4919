use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use recount::{
    execute_compile, execute_render, execute_segment, find_time_cues, parse_answer_sheet_file,
    prompts, read_statement_file, segment_by_cue, segment_by_discourse, segment_statement,
    AnswerSheet, RenderConfig, SegmentMode, SegmenterConfig,
};

#[derive(Parser)]
#[command(name = "recount")]
#[command(author, version, about = "Narrative statement segmentation and follow-up pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment a statement, merge narrator answers, and write reports
    Process {
        /// Input statement file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the machine-readable report (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for the human-readable report (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Segmentation mode: "time" or "semantic"
        #[arg(long, default_value = "time")]
        mode: String,

        /// Maximum number of segments for the semantic and fallback paths
        #[arg(long, default_value = "3")]
        max_segments: usize,

        /// Answer sheet with narrator edits and probe answers (JSON)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect a statement's cues and segmentation without writing anything
    Analyze {
        /// Input statement file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of segments for the semantic and fallback paths
        #[arg(long, default_value = "3")]
        max_segments: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            human_readable,
            mode,
            max_segments,
            answers,
            verbose,
        } => {
            setup_logging(verbose);
            process_statement(input, output, human_readable, &mode, max_segments, answers)
        }
        Commands::Analyze {
            input,
            max_segments,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_statement(input, max_segments)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn parse_mode(mode: &str) -> Result<SegmentMode> {
    match mode {
        "time" | "時間" => Ok(SegmentMode::TimeCue),
        "semantic" | "語意" => Ok(SegmentMode::Discourse),
        other => bail!("Unknown mode '{}' (expected \"time\" or \"semantic\")", other),
    }
}

fn process_statement(
    input: PathBuf,
    output: PathBuf,
    human_readable: Option<PathBuf>,
    mode: &str,
    max_segments: usize,
    answers: Option<PathBuf>,
) -> Result<()> {
    let config = SegmenterConfig {
        mode: parse_mode(mode)?,
        max_segments,
    };

    info!("Loading statement from {:?}", input);
    let statement = read_statement_file(&input).context("Failed to read input statement")?;
    info!("Loaded statement of {} chars", statement.char_count);

    let mut session =
        execute_segment(statement, &config).context("Failed to segment statement")?;
    info!(
        "{} segments (fallback: {})",
        session.segment_count(),
        session.used_fallback
    );

    let sheet = match answers {
        Some(path) => {
            info!("Loading answer sheet from {:?}", path);
            parse_answer_sheet_file(&path).context("Failed to parse answer sheet")?
        }
        None => AnswerSheet::default(),
    };

    let compile_result =
        execute_compile(&mut session, &sheet).context("Failed to compile responses")?;
    info!(
        "Compiled {} entries, {} edits applied",
        compile_result.entries_compiled, compile_result.edits_applied
    );

    let render_result = execute_render(
        &session,
        Some(&output),
        human_readable.as_deref(),
        &RenderConfig::default(),
    )?;

    info!("Machine report written to {:?}", render_result.machine_path);
    if let Some(human_path) = render_result.human_path {
        info!("Human report written to {:?}", human_path);
    }

    info!(
        "Complete: {} of {} responses answered",
        session.answered_count(),
        session.responses.len()
    );

    Ok(())
}

fn analyze_statement(input: PathBuf, max_segments: usize) -> Result<()> {
    info!("Analyzing statement from {:?}", input);
    let statement = read_statement_file(&input).context("Failed to read input statement")?;

    println!("Statement Analysis");
    println!("==================");
    println!("Characters: {}", statement.char_count);
    println!();

    let cues = find_time_cues(&statement.text);
    println!("Time Cues");
    println!("---------");
    if cues.is_empty() {
        println!("(none)");
    }
    for cue in &cues {
        println!("offset {:>4}: {}", cue.start, cue.text);
    }
    println!();

    let by_cue = segment_by_cue(&statement.text);
    let by_discourse = segment_by_discourse(&statement.text, max_segments);
    println!("Segmentation");
    println!("------------");
    println!("Time mode: {} segments", by_cue.len());
    println!(
        "Semantic mode (cap {}): {} segments",
        max_segments,
        by_discourse.len()
    );

    let config = SegmenterConfig {
        mode: SegmentMode::TimeCue,
        max_segments,
    };
    let result = segment_statement(&statement.text, &config);
    if result.used_fallback {
        println!(
            "Time mode falls back to equal partitioning ({} segments)",
            result.segments.len()
        );
    }
    println!();

    println!("Interview Probes");
    println!("----------------");
    println!("開場指導語：{}", prompts::OPENING_INSTRUCTION);
    println!();
    for (i, segment) in result.segments.iter().enumerate() {
        let label = prompts::segment_label(i + 1);
        println!("{}：{}", label, segment);
        println!("  {}", prompts::segment_probe(&label));
    }
    println!();
    println!("{}：{}", prompts::BEFORE_EVENT_TITLE, prompts::BEFORE_EVENT_PROBE);
    println!("{}：{}", prompts::AFTER_EVENT_TITLE, prompts::AFTER_EVENT_PROBE);
    println!("{}：{}", prompts::CREDIBILITY_TITLE, prompts::CREDIBILITY_PROBE);

    Ok(())
}
