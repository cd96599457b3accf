//! `vvt` - align synthesized narration to a timestamped script and mux
//! it onto a video.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

use vvt_core::config::ConfigManager;
use vvt_core::logging;
use vvt_core::mixer::DurationPolicy;
use vvt_core::pipeline::{self, Context};
use vvt_core::script::ScriptFormat;
use vvt_core::toolkit::FfmpegToolkit;
use vvt_core::tts::PiperSynthesizer;
use vvt_core::workspace::Workspace;

#[derive(Parser, Debug)]
#[command(
    name = "vvt",
    version,
    about = "Generate a timed voiceover from a script and mux it onto a video"
)]
struct Args {
    /// Narration script (bracket format or .srt)
    #[arg(long)]
    script: PathBuf,

    /// Source video; omit to export the narration audio only
    #[arg(long)]
    video: Option<PathBuf>,

    /// Script format (detected from extension/content when omitted)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Background music to mix under the narration
    #[arg(long)]
    music: Option<PathBuf>,

    /// Narration gain when mixing (overrides config)
    #[arg(long)]
    narration_gain: Option<f64>,

    /// Music gain when mixing (overrides config)
    #[arg(long)]
    music_gain: Option<f64>,

    /// Mixed-track length policy (overrides config)
    #[arg(long, value_enum)]
    music_policy: Option<PolicyArg>,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Config file (created with defaults if missing)
    #[arg(long, default_value = "vvt.toml")]
    config: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Bracket,
    Srt,
}

impl From<FormatArg> for ScriptFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Bracket => ScriptFormat::Bracket,
            FormatArg::Srt => ScriptFormat::Srt,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Shortest,
    Longest,
    MatchNarration,
}

impl From<PolicyArg> for DurationPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Shortest => DurationPolicy::Shortest,
            PolicyArg::Longest => DurationPolicy::Longest,
            PolicyArg::MatchNarration => DurationPolicy::MatchNarration,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ConfigManager::new(&args.config);
    config
        .load_or_create()
        .with_context(|| format!("loading config {}", args.config.display()))?;

    let mut settings = config.settings().clone();
    if let Some(gain) = args.narration_gain {
        settings.audio.narration_gain = gain;
    }
    if let Some(gain) = args.music_gain {
        settings.audio.music_gain = gain;
    }
    if let Some(policy) = args.music_policy {
        settings.audio.music_policy = policy.into();
    }

    let _guard = if settings.logging.log_to_file {
        Some(logging::init_tracing_with_file(
            settings.logging.level,
            Path::new(&settings.paths.logs_folder),
        )?)
    } else {
        logging::init_tracing(settings.logging.level);
        None
    };

    tracing::info!("vvt {} starting", vvt_core::version());

    let toolkit = FfmpegToolkit::from_settings(&settings.tools, &settings.audio);
    let synthesizer = PiperSynthesizer::from_settings(&settings.tts);
    let workspace = Workspace::new(Path::new(&settings.paths.temp_root))
        .context("creating job workspace")?;

    let job_name = args
        .output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("job")
        .to_string();

    let mut ctx = Context::new(
        job_name,
        settings,
        args.script,
        args.output,
        toolkit,
        Box::new(synthesizer),
        workspace,
    );
    if let Some(video) = args.video {
        ctx = ctx.with_video(video);
    }
    if let Some(music) = args.music {
        ctx = ctx.with_music(music);
    }
    if let Some(format) = args.format {
        ctx = ctx.with_script_format(format.into());
    }

    let output = pipeline::run_job(&ctx)?;
    println!("Wrote {}", output.display());
    Ok(())
}
