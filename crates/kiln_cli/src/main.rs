//! Kiln CLI
//!
//! Inspect the icon set and simulate components from the command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kiln_core::FocusOrigin;
use kiln_ui::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kiln design-system components", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every icon name in the registry
    Icons,

    /// Print an icon as an SVG element
    Icon {
        /// Icon name
        name: String,

        /// Edge length in pixels
        #[arg(short, long, default_value_t = 24)]
        size: u32,

        /// Stroke color
        #[arg(long, default_value = "currentColor")]
        stroke: String,
    },

    /// Build a field, feed it input and print its view as JSON
    Field {
        /// Field kind (text, password, search, credit-card, verification, ...)
        kind: String,

        /// Text typed into the field, repeat to type several times
        #[arg(short = 't', long = "type", value_name = "TEXT")]
        inputs: Vec<String>,

        /// Initial value
        #[arg(long)]
        value: Option<String>,

        /// Declared state (default, error, success, ...)
        #[arg(long)]
        state: Option<String>,

        /// Render the field disabled
        #[arg(long)]
        disabled: bool,

        /// Give the field keyboard focus before typing
        #[arg(long)]
        focus: bool,

        /// Configuration file (defaults to ./kiln.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Build a button and print its view as JSON
    Button {
        /// Button variant (primary, secondary, icon-outline, ...)
        variant: String,

        /// Label or accessible name
        #[arg(short, long, default_value = "Button")]
        label: String,

        /// Button size (md, lg)
        #[arg(short, long)]
        size: Option<String>,

        /// Icon name
        #[arg(long)]
        icon: Option<String>,

        /// Render the button disabled
        #[arg(long)]
        disabled: bool,

        /// Render the button loading
        #[arg(long)]
        loading: bool,

        /// Configuration file (defaults to ./kiln.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Icons => cmd_icons(),
        Commands::Icon { name, size, stroke } => cmd_icon(&name, size, &stroke),
        Commands::Field {
            kind,
            inputs,
            value,
            state,
            disabled,
            focus,
            config,
        } => cmd_field(&kind, &inputs, value, state.as_deref(), disabled, focus, config.as_deref()),
        Commands::Button {
            variant,
            label,
            size,
            icon,
            disabled,
            loading,
            config,
        } => cmd_button(&variant, label, size.as_deref(), icon, disabled, loading, config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<KilnConfig> {
    let config = match path {
        Some(path) => KilnConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            KilnConfig::load_from_dir(&cwd)?
        }
    };
    Ok(config)
}

fn cmd_icons() -> Result<()> {
    for name in kiln_icons::names() {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_icon(name: &str, size: u32, stroke: &str) -> Result<()> {
    if size == 0 {
        bail!("icon size must be positive");
    }
    let icon = kiln_icons::lookup(name).with_context(|| format!("unknown icon '{}'", name))?;
    println!("{}", kiln_icons::to_svg_px(icon.body, size, stroke, "none"));
    Ok(())
}

fn cmd_field(
    kind: &str,
    inputs: &[String],
    value: Option<String>,
    state: Option<&str>,
    disabled: bool,
    focus: bool,
    config: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let kind: FieldKind = kind.parse()?;

    let mut builder = config.field(kind).id(kind.as_str()).disabled(disabled);
    if let Some(state) = state {
        builder = builder.state(state.parse()?);
    }
    if let Some(value) = value {
        builder = builder.default_value(value);
    }

    let mut field = builder.build()?;
    field.mount();
    if focus && !field.focus(FocusOrigin::Keyboard) {
        info!("{} field did not take focus", kind);
    }

    for text in inputs {
        debug!("typing {:?}", text);
        field.input(text);
    }

    println!("{}", serde_json::to_string_pretty(&field.render())?);
    Ok(())
}

fn cmd_button(
    variant: &str,
    label: String,
    size: Option<&str>,
    icon: Option<String>,
    disabled: bool,
    loading: bool,
    config: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let variant: ButtonVariant = variant.parse()?;

    let mut builder = config
        .button(label)
        .variant(variant)
        .disabled(disabled)
        .loading(loading);
    if let Some(size) = size {
        builder = builder.size(size.parse::<ButtonSize>()?);
    }
    if let Some(icon) = icon {
        builder = builder.icon(icon);
    }

    let button = builder.build();
    println!("{}", serde_json::to_string_pretty(&button.render())?);
    Ok(())
}
