use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crewcanvas::{
    ClubIconData, ClubPreset, ColorScheme, Crew, GeneratorConfig, PosterGenerator, PosterRequest,
    TemplateChoice, TemplateConfig, TemplateId,
};

#[derive(Parser, Debug)]
#[command(name = "crewcanvas", version, about = "Render rowing crew lineup posters")]
struct Cli {
    /// Generator config JSON (asset locations). Defaults to the bundled assets.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one poster per crew file.
    Render(RenderArgs),
    /// Print the predefined template catalogue as JSON.
    Templates,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Crew JSON. Repeat to render several crews in one run.
    #[arg(long, required = true)]
    crew: Vec<PathBuf>,

    /// Predefined template id.
    #[arg(long, default_value = "template1", conflicts_with = "template_file")]
    template: String,

    /// Explicit template config JSON.
    #[arg(long)]
    template_file: Option<PathBuf>,

    /// Primary color override (`#RRGGBB` or a color name).
    #[arg(long, requires = "secondary", conflicts_with = "preset")]
    primary: Option<String>,

    /// Secondary color override.
    #[arg(long, requires = "primary")]
    secondary: Option<String>,

    /// Club preset JSON supplying colors and, optionally, a logo.
    #[arg(long)]
    preset: Option<PathBuf>,

    #[command(flatten)]
    logo: LogoArgs,

    /// Output PNG path (overwritten). Only valid with a single crew.
    #[arg(long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// Output directory; files are named `<base>.png`, `<base>_1.png`, ... without overwriting.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Base file name for `--out-dir`. Defaults to the crew name.
    #[arg(long, requires = "out_dir")]
    base_name: Option<String>,

    /// Worker threads for multi-crew runs.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct LogoArgs {
    /// Logo file name inside the bundled club-logos directory.
    #[arg(long)]
    logo_preset: Option<String>,

    /// Path to an uploaded logo file.
    #[arg(long)]
    logo_file: Option<PathBuf>,

    /// Inline logo as a data URL or bare base64.
    #[arg(long)]
    logo_data: Option<String>,
}

impl LogoArgs {
    fn icon(&self) -> Option<ClubIconData> {
        if let Some(name) = &self.logo_preset {
            Some(ClubIconData::preset(name.clone()))
        } else if let Some(path) = &self.logo_file {
            Some(ClubIconData::upload(path.clone()))
        } else {
            self.logo_data.as_ref().map(|d| ClubIconData::inline(d.clone()))
        }
    }
}

enum Output {
    File(PathBuf),
    Dir(PathBuf),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(cli.config.as_deref(), args),
        Command::Templates => cmd_templates(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let cfg = match path {
        Some(p) => GeneratorConfig::from_path(p)?,
        None => GeneratorConfig::default(),
    };
    Ok(cfg.with_env_override())
}

fn cmd_templates() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&crewcanvas::catalogue())
        .context("serialize template catalogue")?;
    println!("{json}");
    Ok(())
}

fn cmd_render(config: Option<&Path>, args: RenderArgs) -> anyhow::Result<()> {
    let output = match (&args.out, &args.out_dir) {
        (Some(_), _) if args.crew.len() > 1 => {
            anyhow::bail!("--out takes a single --crew; use --out-dir for several crews")
        }
        (Some(out), _) => Output::File(out.clone()),
        (None, Some(dir)) => Output::Dir(dir.clone()),
        (None, None) => anyhow::bail!("one of --out or --out-dir is required"),
    };

    let template = match &args.template_file {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read template config '{}'", path.display()))?;
            TemplateChoice::Custom(TemplateConfig::from_json_str(&s)?)
        }
        None => TemplateChoice::Preset(args.template.parse::<TemplateId>()?),
    };

    let (mut colors, mut icon) = match &args.preset {
        Some(path) => {
            let (colors, icon) = ClubPreset::from_path(path)?.resolve()?;
            (Some(colors), icon)
        }
        None => (None, None),
    };
    if let (Some(p), Some(s)) = (&args.primary, &args.secondary) {
        colors = Some(ColorScheme::parse(p, s)?);
    }
    if let Some(explicit) = args.logo.icon() {
        icon = Some(explicit);
    }

    let requests = args
        .crew
        .iter()
        .map(|path| {
            let crew = Crew::from_path(path)?;
            Ok(PosterRequest {
                crew,
                template,
                colors,
                club_icon: icon.clone(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let generator = PosterGenerator::new(&load_config(config)?)?;
    let results = generator.render_batch(&requests, args.threads)?;

    let mut failed = 0usize;
    for (req, result) in requests.iter().zip(results) {
        let poster = match result {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(crew = %req.crew.name, error = %e, "render failed");
                failed += 1;
                continue;
            }
        };
        let path = match &output {
            Output::File(out) => out.clone(),
            Output::Dir(dir) => {
                let base = args
                    .base_name
                    .clone()
                    .unwrap_or_else(|| file_stem_for(&req.crew.name));
                next_file_name(dir, &base)
            }
        };
        write_png(&path, &poster.png)?;
        tracing::info!(
            crew = %req.crew.name,
            width = poster.width,
            height = poster.height,
            logo = poster.logo_drawn,
            "wrote {}",
            path.display()
        );
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} posters failed", requests.len());
    }
    Ok(())
}

fn write_png(path: &Path, png: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))
}

/// `<dir>/<base>.png`, or the first free `<dir>/<base>_<n>.png`.
fn next_file_name(dir: &Path, base: &str) -> PathBuf {
    let first = dir.join(format!("{base}.png"));
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| dir.join(format!("{base}_{n}.png")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// Lowercase ASCII alphanumerics with `-` between words; `poster` when nothing is left.
fn file_stem_for(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "poster".to_owned()
    } else {
        trimmed.to_owned()
    }
}
