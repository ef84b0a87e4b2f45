use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use globset::{Glob, GlobSetBuilder};
use hero_collage_core::config::{LayoutMode, SpacingPolicy};
use hero_collage_core::source::load_secondaries_with;
use hero_collage_core::{
    CollageConfig, CollagePlan, InputImage, LoadedImages, ScaleFactor, build, load_hero,
    plan_layout, to_json,
};
use serde::Deserialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "hero-collage",
    about = "Lay out a hero image and a folder of screenshots on a fixed-size canvas",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v: fit counts and spacing, -vv: trace)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the collage and write it to --output
    Build(CollageArgs),
    /// Layout-only: compute placements and print/export them as JSON (no pixels written)
    Layout(CollageArgs),
}

#[derive(Parser, Debug, Clone)]
struct CollageArgs {
    // Canvas
    /// Output width in pixels
    #[arg(long, help_heading = "Canvas")]
    width: u32,
    /// Output height in pixels
    #[arg(long, help_heading = "Canvas")]
    height: u32,
    /// Collage type: single | screenshots
    #[arg(long = "type", value_parser = ["single", "screenshots"], default_value = "screenshots", help_heading = "Canvas")]
    collage_type: String,
    /// Band spacing: anchored | uniform
    #[arg(long, value_parser = ["anchored", "uniform"], default_value = "anchored", help_heading = "Canvas")]
    spacing: String,
    /// Fill color: #rrggbb or r,g,b
    #[arg(long, default_value = "#000000", help_heading = "Canvas")]
    fill: String,
    /// Gap between hero and band
    #[arg(long, default_value_t = 2, help_heading = "Canvas")]
    margin: u32,
    /// Draw red outlines around placements (debug)
    #[arg(long, default_value_t = false, help_heading = "Canvas")]
    outlines: bool,

    // Input/Output
    /// Path to the hero image
    #[arg(long, help_heading = "Input/Output")]
    hero: PathBuf,
    /// Folder containing additional images
    #[arg(long, help_heading = "Input/Output")]
    folder: PathBuf,
    /// Filename for the output image
    #[arg(short, long, default_value = "collage_output.jpg", help_heading = "Input/Output")]
    output: PathBuf,
    /// YAML config file path (overrides canvas options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Export
    /// Export the placement plan (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_plan: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
    /// Dry run: compute layout and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    let show_progress = cli.progress && !cli.quiet;
    match &cli.command {
        Commands::Build(args) => run_build(args, show_progress),
        Commands::Layout(args) => run_layout(args),
    }
}

fn run_build(args: &CollageArgs, show_progress: bool) -> anyhow::Result<()> {
    let cfg = resolve_config(args)?;
    if args.print_config {
        return print_config(&cfg, &args.print_config_format);
    }

    let hero = load_hero(&args.hero).context("load hero image")?;
    let loaded = gather_and_load(args, show_progress)?;

    let out = build(&hero, &loaded.images, &cfg).context("build collage")?;
    report_plan(&out.plan);

    if !args.dry_run {
        out.save(&args.output)
            .with_context(|| format!("write {}", args.output.display()))?;
        info!(output = ?args.output, "collage written");
    }
    export_plan(args, &out.plan)?;
    Ok(())
}

fn run_layout(args: &CollageArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(args)?;
    if args.print_config {
        return print_config(&cfg, &args.print_config_format);
    }

    let hero = load_hero(&args.hero).context("load hero image")?;
    let loaded = gather_and_load(args, false)?;

    let plan = plan_layout(
        dims(&hero),
        loaded.images.iter().map(dims).collect(),
        &cfg,
    )
    .context("plan layout")?;
    report_plan(&plan);

    if args.export_plan.is_none() {
        println!("{}", serde_json::to_string_pretty(&to_json(&plan))?);
    }
    export_plan(args, &plan)?;
    Ok(())
}

fn dims(img: &InputImage) -> (String, u32, u32) {
    (img.key.clone(), img.image.width(), img.image.height())
}

fn export_plan(args: &CollageArgs, plan: &CollagePlan) -> anyhow::Result<()> {
    let Some(path) = &args.export_plan else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(&to_json(plan))?;
    if args.dry_run {
        println!("{json}");
        return Ok(());
    }
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(?path, "plan exported");
    Ok(())
}

fn report_plan(plan: &CollagePlan) {
    let stats = plan.stats();
    info!(
        images = stats.num_images,
        rejected = stats.num_rejected,
        coverage = format!("{:.2}%", stats.coverage * 100.0),
        "stats"
    );
    match &plan.band {
        Some(band) => debug!(
            orientation = ?plan.orientation,
            policy = ?band.policy,
            available = band.available,
            candidates = band.candidates,
            fitted = band.fitted,
            rejected_at = ?band.rejected_at,
            spacing = band.spacing,
            "{} images fit in band",
            band.fitted
        ),
        None if plan.mode == LayoutMode::Screenshots => {
            debug!(orientation = ?plan.orientation, "no room for secondary images")
        }
        None => {}
    }
}

fn print_config(cfg: &CollageConfig, format: &str) -> anyhow::Result<()> {
    match format {
        "yaml" => println!("{}", serde_yaml::to_string(cfg)?),
        _ => println!("{}", serde_json::to_string_pretty(cfg)?),
    }
    Ok(())
}

fn resolve_config(args: &CollageArgs) -> anyhow::Result<CollageConfig> {
    let mode: LayoutMode = args
        .collage_type
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown collage type: {}", args.collage_type))?;
    let spacing: SpacingPolicy = args
        .spacing
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown spacing policy: {}", args.spacing))?;
    let base = CollageConfig {
        width: args.width,
        height: args.height,
        mode,
        spacing,
        fill: parse_color(&args.fill)?,
        margin: args.margin,
        outlines: args.outlines,
        ..Default::default()
    };
    // Config file sets canvas options en bloc
    let cfg = if let Some(path) = &args.config {
        let file =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        y.into_collage_config(base)?
    } else {
        base
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Parses `#rrggbb`, `rrggbb` or `r,g,b`.
fn parse_color(s: &str) -> anyhow::Result<[u8; 3]> {
    let s = s.trim();
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            anyhow::bail!("color must have three components: {}", s);
        }
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(parts) {
            *slot = part
                .parse()
                .with_context(|| format!("invalid color component '{}' in {}", part, s))?;
        }
        return Ok(rgb);
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        anyhow::bail!("invalid hex color: {}", s);
    }
    let mut rgb = [0u8; 3];
    for (i, slot) in rgb.iter_mut().enumerate() {
        *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .with_context(|| format!("invalid hex color: {}", s))?;
    }
    Ok(rgb)
}

/// Converts a decimal cap like `1.5` to an exact ratio (millesimal precision).
fn upscale_from_f64(v: f64) -> anyhow::Result<ScaleFactor> {
    if !v.is_finite() || v <= 0.0 {
        anyhow::bail!("max_upscale must be a positive number, got {}", v);
    }
    Ok(ScaleFactor::new((v * 1000.0).round() as u64, 1000))
}

fn gather_and_load(args: &CollageArgs, show_progress: bool) -> anyhow::Result<LoadedImages> {
    let paths = gather_paths(&args.folder, &args.include, &args.exclude)?;
    let loaded = load_images_with_progress(&paths, &args.hero, show_progress)?;
    info!(
        count = loaded.images.len(),
        skipped = loaded.skipped.len(),
        "loaded secondary images"
    );
    for s in &loaded.skipped {
        debug!(path = ?s.path, error = %s.error, "skipped");
    }
    Ok(loaded)
}

/// Lists regular files directly inside `dir` in directory order (not sorted).
fn gather_paths(dir: &Path, include: &[String], exclude: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    // Build glob matchers
    let mut inc_set = None;
    if !include.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in include {
            b.add(Glob::new(pat)?);
        }
        inc_set = Some(b.build()?);
    }
    let mut exc_set = None;
    if !exclude.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in exclude {
            b.add(Glob::new(pat)?);
        }
        exc_set = Some(b.build()?);
    }
    if !dir.is_dir() {
        anyhow::bail!("images folder is not a directory: {}", dir.display());
    }
    let mut list: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "unreadable directory entry");
                continue;
            }
        };
        let p = entry.path();
        if p.is_file() && !should_skip(p, inc_set.as_ref(), exc_set.as_ref()) {
            list.push(p.to_path_buf());
        }
    }
    Ok(list)
}

fn should_skip(
    p: &Path,
    include: Option<&globset::GlobSet>,
    exclude: Option<&globset::GlobSet>,
) -> bool {
    let s = p.to_string_lossy().replace('\\', "/");
    if let Some(ex) = exclude {
        if ex.is_match(&s) {
            return true;
        }
    }
    if let Some(inc) = include {
        if !inc.is_match(&s) {
            return true;
        }
    }
    false
}

fn load_images_with_progress(
    paths: &[PathBuf],
    hero: &Path,
    progress: bool,
) -> anyhow::Result<LoadedImages> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(ProgressStyle::with_template(
            "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
        )?);
        Some(b)
    } else {
        None
    };
    let loaded = load_secondaries_with(paths, hero, |p| {
        if let Some(b) = &bar {
            let msg = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
            b.set_message(msg.to_string());
            b.inc(1);
        }
    });
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(loaded)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Deserialize, Debug, Default)]
struct YamlConfig {
    width: Option<u32>,
    height: Option<u32>,
    mode: Option<String>,
    spacing: Option<String>,
    fill: Option<String>,
    margin: Option<u32>,
    max_upscale: Option<f64>,
    max_spacing: Option<u32>,
    min_spacing: Option<u32>,
    outlines: Option<bool>,
}

impl YamlConfig {
    fn into_collage_config(self, mut cfg: CollageConfig) -> anyhow::Result<CollageConfig> {
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.mode {
            cfg.mode = v
                .parse()
                .map_err(|_| anyhow::anyhow!("unknown collage type in config: {}", v))?;
        }
        if let Some(v) = self.spacing {
            cfg.spacing = v
                .parse()
                .map_err(|_| anyhow::anyhow!("unknown spacing policy in config: {}", v))?;
        }
        if let Some(v) = self.fill {
            cfg.fill = parse_color(&v)?;
        }
        if let Some(v) = self.margin {
            cfg.margin = v;
        }
        if let Some(v) = self.max_upscale {
            cfg.max_upscale = upscale_from_f64(v)?;
        }
        if let Some(v) = self.max_spacing {
            cfg.max_spacing = v;
        }
        if let Some(v) = self.min_spacing {
            cfg.min_spacing = v;
        }
        if let Some(v) = self.outlines {
            cfg.outlines = v;
        }
        Ok(cfg)
    }
}
