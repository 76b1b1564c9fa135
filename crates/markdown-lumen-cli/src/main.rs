//! markdown-lumen - render, inspect and re-parse Markdown files

mod images;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_lumen_config::Config;
use markdown_lumen_engine::{
    HtmlRenderer, RenderOptions, build_outline, io, outline_to_text, parse_document,
    parsing::snapshot, reparse_with_stats,
};
use std::path::{Path, PathBuf};

use images::DirImageStore;

/// Incremental Markdown parser and HTML preview renderer
#[derive(Parser, Debug)]
#[command(name = "markdown-lumen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/markdown-lumen/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a markdown file to HTML
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit a complete HTML document instead of a fragment
        #[arg(long)]
        standalone: bool,
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the syntax tree
    Ast {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print JSON instead of the indented dump
        #[arg(long)]
        json: bool,
    },
    /// Print the heading outline
    Outline {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Re-parse NEW incrementally against OLD and report what was reused
    Reparse {
        #[arg(value_name = "OLD")]
        old: PathBuf,
        #[arg(value_name = "NEW")]
        new: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = load_config(args.config.as_deref())?;
    log::debug!("render config: {:?}", config.render);

    match args.command {
        Command::Render {
            file,
            standalone,
            output,
        } => {
            let html = render_file(&config, &file, standalone)?;
            match output {
                Some(path) => io::write_html(&path, &html)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{html}"),
            }
        }
        Command::Ast { file, json } => {
            let root = parse_document(&read(&file)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&root)?);
            } else {
                print!("{}", snapshot::normalize(&root));
            }
        }
        Command::Outline { file, json } => {
            let outline = build_outline(&parse_document(&read(&file)?));
            if json {
                println!("{}", serde_json::to_string_pretty(&outline)?);
            } else {
                print!("{}", outline_to_text(&outline));
            }
        }
        Command::Reparse { old, new } => {
            print!("{}", reparse_report(&read(&old)?, &read(&new)?));
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if loaded.is_none() {
        log::debug!("no config file, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

fn read(path: &Path) -> Result<String> {
    io::read_markdown(path).with_context(|| format!("Failed to load document: {}", path.display()))
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        class_prefix: config.render.class_prefix.clone(),
        highlight: config.render.highlight,
        heading_ids: config.render.heading_ids,
        link_target_blank: config.render.link_target_blank,
        image_ref_prefix: config.images.ref_prefix.clone(),
    }
}

fn render_file(config: &Config, file: &Path, standalone: bool) -> Result<String> {
    let text = read(file)?;
    let root = parse_document(&text);
    let store = config.images.dir.as_ref().map(DirImageStore::new);

    let mut renderer = HtmlRenderer::new(render_options(config));
    if let Some(store) = &store {
        renderer = renderer.with_images(store);
    }

    if standalone {
        let title = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(renderer.render_standalone(&title, &root, None))
    } else {
        Ok(renderer.render(&root))
    }
}

fn reparse_report(old: &str, new: &str) -> String {
    let prev = parse_document(old);
    let (root, stats) = reparse_with_stats(old, &prev, new);
    let matches_full = root == parse_document(new);

    let mut out = String::new();
    for range in &stats.change_ranges {
        out.push_str(&format!(
            "changed: old lines {}..{} -> new lines {}..{}\n",
            range.old.start + 1,
            range.old.end + 1,
            range.new.start + 1,
            range.new.end + 1
        ));
    }
    out.push_str(&format!(
        "reused: {}\nreparsed: {}\nmatches full parse: {matches_full}\n",
        stats.reused, stats.reparsed
    ));
    out
}
