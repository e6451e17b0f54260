//! cover-gen - generate placeholder book covers from a list of titles and authors

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cover_gen::{batch, CoverSpec, Font, Px};

#[derive(Parser, Debug)]
#[command(
    name = "cover-gen",
    version,
    about = "Generate placeholder book covers from a list of titles and authors"
)]
struct Cli {
    /// Book list to read: a title line followed by an author line per book
    #[arg(value_name = "INPUT", default_value = "books.txt")]
    input: PathBuf,

    /// Font file (TTF or OTF) to set the covers in; when missing or
    /// unreadable the built-in face is used instead
    #[arg(short, long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Cover width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Cover height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let spec = CoverSpec::with_size((Px(cli.width as f32), Px(cli.height as f32)));
    let font = Font::load_or_default(cli.font.as_deref());
    if let Some(name) = font.name() {
        log::info!("setting covers in {name}");
    }

    let written = batch::generate(&cli.input, &spec, font)
        .with_context(|| format!("generating covers from {}", cli.input.display()))?;

    println!("Generated {} covers", written.len());
    Ok(())
}
