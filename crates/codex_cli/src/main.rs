use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use codex_celestial::get_sun_sign;
use codex_geometry::{AppMode, GeometryConfig, GlowNode, build_scene, calculate_node_config};
use codex_narrative::{ConfigError, NarrativeConfig, NarrativeKind, fallback_text, render_prompt};
use codex_profile::{OnboardingInput, UserProfile, derive_profile};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "codex", about = "Business codex profile and constellation CLI")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Full name
    #[arg(long)]
    name: String,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: String,
    /// Time of birth (HH:MM, 24-hour)
    #[arg(long, default_value = "")]
    tob: String,
}

impl InputArgs {
    fn to_input(&self) -> OnboardingInput {
        let input = OnboardingInput::new(&self.name, &self.dob, &self.tob);
        if !input.is_complete() {
            warn!("incomplete onboarding input, missing fields use defaults");
        }
        input
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the full profile
    Profile {
        #[command(flatten)]
        input: InputArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Sun sign and bearing angle for a birth date
    Sign {
        /// Date of birth (YYYY-MM-DD)
        dob: String,
    },
    /// Glow nodes of the constellation
    Nodes {
        #[command(flatten)]
        input: InputArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Complete scene description (always JSON)
    Scene {
        #[command(flatten)]
        input: InputArgs,
        /// Display mode: logo, aura or explain
        #[arg(long, default_value = "aura")]
        mode: AppMode,
    },
    /// Render the narrative prompt for a profile
    Prompt {
        #[command(flatten)]
        input: InputArgs,
        /// initial-calibration, premium-blueprint, profile-narrative or mentor-advice
        #[arg(long, default_value = "initial-calibration")]
        kind: NarrativeKind,
        /// Narrative config TOML; defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the fallback text instead of the prompt
        #[arg(long)]
        fallback: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} has no fallback text")]
    NoFallback(&'static str),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Profile { input, json } => {
            let profile = derive_profile(&input.to_input());
            if json {
                Ok(serde_json::to_string_pretty(&profile)?)
            } else {
                Ok(format_profile(&profile))
            }
        }

        Commands::Sign { dob } => {
            let info = get_sun_sign(&dob);
            let mut out = format!("{} ({} deg)", info.sign, info.angle);
            if !info.resolved {
                out.push_str(" [default: date not recognized]");
            }
            Ok(out)
        }

        Commands::Nodes { input, json } => {
            let nodes = calculate_node_config(&derive_profile(&input.to_input()));
            debug!(count = nodes.len(), "nodes computed");
            if json {
                Ok(serde_json::to_string_pretty(&nodes)?)
            } else {
                Ok(format_nodes(&nodes))
            }
        }

        Commands::Scene { input, mode } => {
            let profile = derive_profile(&input.to_input());
            let scene = build_scene(&profile, mode, &GeometryConfig::default());
            Ok(serde_json::to_string_pretty(&scene)?)
        }

        Commands::Prompt {
            input,
            kind,
            config,
            fallback,
        } => {
            let config = match config {
                Some(path) => NarrativeConfig::load(&path)?,
                None => NarrativeConfig::default(),
            };
            let profile = derive_profile(&input.to_input());
            if fallback {
                fallback_text(kind, &profile).ok_or(CliError::NoFallback(kind.name()))
            } else {
                Ok(render_prompt(kind, &profile, &config))
            }
        }
    }
}

fn format_angle(angle: Option<f64>) -> String {
    angle.map_or_else(|| "-".to_string(), |a| format!("{a:.1} deg"))
}

fn format_profile(p: &UserProfile) -> String {
    let sign = p.sun_sign().map_or("-", |s| s.name());
    [
        format!("Name:                {}", p.name()),
        format!("Sun sign:            {sign}"),
        format!("Life Path:           {}", p.life_path_number()),
        format!("Destiny:             {}", p.destiny_number()),
        format!("Business codex:      {}", p.business_codex_value()),
        format!("Archetype:           {}", p.archetype()),
        format!("Activation strength: {:.3}", p.activation_strength()),
        format!("Circle band:         {}", p.circle_band()),
        format!("Bearings:            sun {}", format_angle(Some(p.sun_rel_angle()))),
        format!("                     moon {}", format_angle(p.moon_rel_angle())),
        format!("                     rising {}", format_angle(p.rising_rel_angle())),
        format!("                     jupiter {}", format_angle(p.jupiter_rel_angle())),
    ]
    .join("\n")
}

fn format_nodes(nodes: &[GlowNode]) -> String {
    let mut lines = vec![format!("{} nodes", nodes.len())];
    for n in nodes {
        lines.push(format!(
            "{:<8} circle {} r={:7.2} at ({:7.2}, {:7.2}) intensity {:.3} core {:.0} glow {:.0}",
            n.bearing.name(),
            n.circle,
            n.distance,
            n.x,
            n.y,
            n.intensity,
            n.core_radius,
            n.glow_radius
        ));
    }
    lines.join("\n")
}
