//! expo-theme: render design presets as style-variable sheets
//!
//! ```text
//! expo-theme list
//! expo-theme show --preset fantasy
//! expo-theme render --preset cyberpunk --color accent=oklch(0.7 0.3 120)
//! expo-theme render --preset retro --shadow none --format json
//! ```

mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::{ExpoConfig, OutputFormat};
use expo_theme::panel::{EDITABLE_COLORS, RADIUS_OPTIONS};
use expo_theme::{
    ColorRole, DesignPanel, FontRole, PresetCatalog, ShadowStyle, StyleNamespace, ThemeStore,
};

#[derive(Parser)]
#[command(name = "expo-theme", version, about = "Expo design token renderer")]
struct Cli {
    /// Path to expo.toml (or a directory containing it)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Extra preset catalog files
    #[arg(long = "catalog", global = true)]
    catalogs: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available presets
    List,

    /// Print the settings panel fields for a preset
    Show {
        /// Preset to show
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// Print the style namespace for a preset plus edits
    Render(RenderArgs),
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// Preset to start from
    #[arg(short, long)]
    preset: Option<String>,

    /// Override a color, as ROLE=VALUE (roles: primary, secondary, accent, background, foreground)
    #[arg(long = "color", value_parser = parse_color)]
    colors: Vec<(ColorRole, String)>,

    #[arg(long)]
    heading_font: Option<String>,

    #[arg(long)]
    body_font: Option<String>,

    /// Spacing scale, published as given
    #[arg(long, allow_negative_numbers = true)]
    spacing: Option<f64>,

    /// Base border radius (e.g. 0.5rem)
    #[arg(long)]
    radius: Option<String>,

    #[arg(long, value_parser = parse_shadow)]
    shadow: Option<ShadowStyle>,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn parse_color(arg: &str) -> Result<(ColorRole, String), String> {
    let (role, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ROLE=VALUE, got `{arg}`"))?;
    let role = ColorRole::from_id(role.trim()).ok_or_else(|| format!("unknown color role `{role}`"))?;
    Ok((role, value.to_string()))
}

fn parse_shadow(arg: &str) -> Result<ShadowStyle, String> {
    arg.parse().map_err(|e: expo_theme::ThemeError| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ExpoConfig::load_or_default(cli.config.as_deref())?;
    let catalog = build_catalog(&config, &cli.catalogs)?;

    match cli.command {
        Commands::List => {
            print!("{}", list_presets(&catalog, &config.theme.preset));
        }
        Commands::Show { preset } => {
            let preset = preset.as_deref().unwrap_or(&config.theme.preset);
            let store = ThemeStore::with_preset(catalog, preset, StyleNamespace::new())?;
            print!("{}", show_panel(&store));
        }
        Commands::Render(args) => {
            print!("{}", render(catalog, &config, &args)?);
        }
    }

    Ok(())
}

fn build_catalog(config: &ExpoConfig, extra: &[PathBuf]) -> Result<PresetCatalog> {
    let mut catalog = PresetCatalog::builtin();
    for path in config.theme.catalogs.iter().chain(extra) {
        catalog
            .load_toml_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    }
    tracing::debug!("catalog has {} presets", catalog.len());
    Ok(catalog)
}

fn list_presets(catalog: &PresetCatalog, configured: &str) -> String {
    let mut out = String::new();
    for (name, tokens) in catalog.iter() {
        let marker = if name == configured { "*" } else { " " };
        out.push_str(&format!(
            "{marker} {name:<12} {:<24} {}\n",
            tokens.colors.primary, tokens.shadows.style
        ));
    }
    out
}

fn show_panel(store: &ThemeStore) -> String {
    let tokens = store.current();
    let mut out = format!("preset: {}\n\ncolors:\n", store.current_preset());
    for input in EDITABLE_COLORS {
        out.push_str(&format!(
            "  {:<10} {:<26} {}\n",
            input.label,
            tokens.color(input.role),
            input.description
        ));
    }

    out.push_str("\nfonts:\n");
    for role in [FontRole::Heading, FontRole::Body] {
        out.push_str(&format!("  {:<10} {}\n", role.id(), tokens.font(role)));
    }

    let radius = &tokens.border_radius.base;
    let radius_label = RADIUS_OPTIONS
        .iter()
        .find(|(_, value)| value == radius)
        .map_or("Custom", |(label, _)| *label);
    out.push_str(&format!(
        "\nlayout:\n  spacing    {}x\n  radius     {radius} ({radius_label})\n  shadow     {}\n",
        tokens.spacing.to_css_value(),
        tokens.shadow_style().display_name()
    ));
    out
}

fn render(catalog: PresetCatalog, config: &ExpoConfig, args: &RenderArgs) -> Result<String> {
    let preset = args.preset.as_deref().unwrap_or(&config.theme.preset);
    let mut store = ThemeStore::with_preset(catalog, preset, StyleNamespace::new())?;
    let panel = DesignPanel::new();

    for (role, value) in &args.colors {
        panel.set_color(&mut store, *role, value.as_str());
    }
    if let Some(font) = &args.heading_font {
        panel.set_font(&mut store, FontRole::Heading, font.as_str());
    }
    if let Some(font) = &args.body_font {
        panel.set_font(&mut store, FontRole::Body, font.as_str());
    }
    if let Some(scale) = args.spacing {
        panel.set_spacing(&mut store, scale);
    }
    if let Some(radius) = &args.radius {
        panel.set_radius(&mut store, radius.as_str());
    }
    if let Some(style) = args.shadow {
        panel.set_shadow(&mut store, style);
    }

    let namespace = store.into_sink();
    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Css => Ok(namespace.to_css()),
        OutputFormat::Json => {
            let mut json = namespace.to_json().context("Failed to encode namespace")?;
            json.push('\n');
            Ok(json)
        }
    }
}
