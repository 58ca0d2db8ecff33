use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "deepbooth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON to a PNG composite.
    Render(RenderArgs),
    /// List the available layouts.
    Layouts,
    /// List the available decoration ids.
    Stickers,
    /// Inspect or prune a gallery archive.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON. Photo paths are resolved relative to it.
    #[arg(long)]
    scene: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Skip the drop shadows behind photos and decorations.
    #[arg(long, default_value_t = false)]
    no_shadows: bool,

    /// Also archive the composite in this gallery directory.
    #[arg(long)]
    gallery: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Gallery directory.
    #[arg(long)]
    dir: PathBuf,

    #[command(subcommand)]
    action: GalleryAction,
}

#[derive(Subcommand, Debug)]
enum GalleryAction {
    /// List entries, newest first.
    List,
    /// Delete one entry.
    Delete {
        /// Entry id.
        id: String,
    },
    /// Delete every entry.
    Clear,
    /// Copy one entry's PNG out of the archive.
    Export {
        /// Entry id.
        id: String,
        /// Destination path; defaults to `deep-blue-archive-<id>.png`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layouts => cmd_layouts(),
        Command::Stickers => cmd_stickers(),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let file = deepbooth::SceneFile::from_path(&args.scene)?;
    let base_dir = args.scene.parent().unwrap_or_else(|| Path::new("."));
    let scene = file.load(base_dir)?;

    let mut settings = deepbooth::RenderSettings::from_env();
    settings.shadows = !args.no_shadows;
    let rendered = deepbooth::Compositor::new(settings).render(&scene)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    rendered.encoded.write_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());

    if let Some(dir) = args.gallery {
        let saved = deepbooth::GalleryStore::open(dir)?.save(&rendered.encoded)?;
        eprintln!("saved to gallery as {}", saved.id);
    }
    Ok(())
}

fn cmd_layouts() -> anyhow::Result<()> {
    for kind in deepbooth::LayoutKind::ALL {
        let t = kind.template();
        println!(
            "{}\t{}x{}\t{} photos\t{}: {}",
            t.id(),
            t.canvas.width,
            t.canvas.height,
            t.photo_count,
            t.name,
            t.description
        );
    }
    Ok(())
}

fn cmd_stickers() -> anyhow::Result<()> {
    for kind in deepbooth::StickerKind::ALL {
        println!("{kind}");
    }
    Ok(())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let store = deepbooth::GalleryStore::open(&args.dir)?;
    match args.action {
        GalleryAction::List => {
            for r in store.list()? {
                println!("{}\t{}", r.id, r.timestamp);
            }
        }
        GalleryAction::Delete { id } => {
            let remaining = store.delete(&id)?;
            eprintln!("deleted {id}, {} remaining", remaining.len());
        }
        GalleryAction::Clear => {
            store.clear()?;
            eprintln!("cleared {}", args.dir.display());
        }
        GalleryAction::Export { id, out } => {
            let png = store.load_png(&id)?;
            let out = out.unwrap_or_else(|| PathBuf::from(format!("deep-blue-archive-{id}.png")));
            std::fs::write(&out, png).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
    }
    Ok(())
}
