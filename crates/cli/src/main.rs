use anyhow::{Context, Result};
use clap::Parser;
use meander::cycle::{make_starting_cycle, slide, Shape};
use meander::rand::{fresh_seed, rng_for_seed, seed_from_str};
use meander::screen::project_edges;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;

#[derive(Parser)]
#[command(name = "meander")]
#[command(about = "Generate meander designs: random Hamiltonian loops on a grid")]
struct Cmd {
    /// Seed for the random number generator, an integer or arbitrary string.
    /// Useful for reproducing interesting designs. With --number > 1 it
    /// applies to the first design only.
    #[arg(long, short = 'r')]
    seed: Option<String>,

    /// Design size in grid units, in the form WIDTHxHEIGHT; both odd, >= 3
    #[arg(long, short = 's', default_value = "15x19")]
    size: String,

    /// Number of slide mutations per design
    #[arg(long, default_value_t = 15_000)]
    steps: usize,

    /// Number of designs to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    number: usize,

    /// Output directory for SVG files and design records
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    // All configuration errors fire here, before any mutation runs.
    let (width, height) = parse_size(&cmd.size)?;
    let shape = Shape::from_design_size(width, height)?;
    fs::create_dir_all(&cmd.out)
        .with_context(|| format!("creating output dir {}", cmd.out.display()))?;

    for design in 0..cmd.number {
        let seed = match &cmd.seed {
            Some(s) if design == 0 => seed_from_str(s),
            _ => fresh_seed(),
        };
        tracing::info!(design = design + 1, total = cmd.number, seed, "generating");

        let mut rng = rng_for_seed(seed);
        let mut grid = make_starting_cycle(shape);
        for step in 0..cmd.steps {
            if step % 1000 == 0 {
                tracing::info!(step, total = cmd.steps, "slides");
            }
            slide(&mut grid, &mut rng)
                .with_context(|| format!("slide {step} of design seeded {seed}"))?;
        }

        let screen = project_edges(&grid, shape);
        let record = output::write_design(&cmd.out, seed, &cmd.size, cmd.steps, &screen)?;
        tracing::info!(seed, svg = %record.svg, "wrote design");
    }
    Ok(())
}

fn parse_size(size: &str) -> Result<(usize, usize)> {
    let (w, h) = size
        .split_once('x')
        .context(r#"the "size" argument must be in the form WIDTHxHEIGHT, e.g. 15x19"#)?;
    let width = w
        .parse()
        .with_context(|| format!(r#"the "size" argument must use numbers, got "{w}""#))?;
    let height = h
        .parse()
        .with_context(|| format!(r#"the "size" argument must use numbers, got "{h}""#))?;
    Ok((width, height))
}
