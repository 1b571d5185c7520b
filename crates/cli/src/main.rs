#![deny(unsafe_code)]
//! CLI binary for the hashtone pixel generator.
//!
//! Subcommands:
//! - `hash <coords>...`: hash 1 to 4 coordinates
//! - `hsl <h> <s> <l>`: convert an HSL color to RGB and ARGB
//! - `pack <r> <g> <b> [a]`: pack channels into ARGB8888
//! - `render [pattern]`: fill a raster from a pattern and write PNG
//! - `list`: print available patterns

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hashtone_core::color::Hsl;
use hashtone_core::{hash_coords, to_argb, to_argba, unit_hash_coords, Recipe};
use hashtone_raster::{Pattern, PatternKind};
use log::info;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "hashtone", about = "Deterministic coordinate hashing and color packing")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hash 1 to 4 coordinates and map the hash onto [0, 1).
    Hash {
        /// Coordinates, in order (e.g. `0.5 0.25`). NaN and inf are accepted.
        #[arg(required = true, num_args = 1..=4, allow_negative_numbers = true)]
        coords: Vec<f64>,
    },
    /// Convert an HSL color to RGB and packed ARGB.
    Hsl {
        #[arg(allow_negative_numbers = true)]
        h: f64,
        #[arg(allow_negative_numbers = true)]
        s: f64,
        #[arg(allow_negative_numbers = true)]
        l: f64,
    },
    /// Pack RGB(A) channels in [0, 1] into ARGB8888.
    Pack {
        #[arg(allow_negative_numbers = true)]
        r: f64,
        #[arg(allow_negative_numbers = true)]
        g: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        /// Alpha; fully opaque when omitted.
        #[arg(allow_negative_numbers = true)]
        a: Option<f64>,
    },
    /// Fill a raster from a pattern and write a PNG.
    Render {
        /// Pattern name (see `list`).
        #[arg(required_unless_present = "recipe", conflicts_with = "recipe")]
        pattern: Option<String>,

        /// Raster width in pixels.
        #[arg(short = 'W', long, default_value_t = 256, conflicts_with = "recipe")]
        width: usize,

        /// Raster height in pixels.
        #[arg(short = 'H', long, default_value_t = 256, conflicts_with = "recipe")]
        height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Pattern parameters as a JSON string.
        #[arg(long, default_value = "{}", conflicts_with = "recipe")]
        params: String,

        /// Read pattern, dimensions and params from a JSON recipe file.
        #[arg(long)]
        recipe: Option<PathBuf>,
    },
    /// List available patterns.
    List,
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Builds the render recipe from either a `--recipe` file or the pattern
/// name, size flags and `--params`. Clap guarantees one of the two sources.
fn resolve_recipe(
    pattern: Option<String>,
    width: usize,
    height: usize,
    params: &str,
    recipe: Option<&Path>,
) -> Result<Recipe, CliError> {
    if let Some(path) = recipe {
        return Ok(Recipe::from_path(path)?);
    }
    let mut recipe = Recipe::new(pattern.as_deref().unwrap_or_default(), width, height);
    recipe.params = serde_json::from_str(params).map_err(CliError::Params)?;
    recipe.validate()?;
    Ok(recipe)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Hash { coords } => {
            let h = hash_coords(&coords)?;
            let unit = unit_hash_coords(&coords)?;
            if cli.json {
                print_json(&serde_json::json!({
                    "coords": coords,
                    "hash": h,
                    "hex": format!("{h:#018x}"),
                    "unit": unit,
                }))?;
            } else {
                println!("hash: {h} ({h:#018x})");
                println!("unit: {unit}");
            }
        }
        Command::Hsl { h, s, l } => {
            let rgb = Hsl::new(h, s, l).to_rgb();
            let argb = rgb.to_argb();
            if cli.json {
                print_json(&serde_json::json!({
                    "rgb": rgb,
                    "argb": format!("{argb:#010x}"),
                }))?;
            } else {
                println!("rgb:  {} {} {}", rgb.r, rgb.g, rgb.b);
                println!("argb: {argb:#010x} ({})", rgb.to_hex());
            }
        }
        Command::Pack { r, g, b, a } => {
            let argb = match a {
                Some(a) => to_argba(r, g, b, a),
                None => to_argb(r, g, b),
            };
            if cli.json {
                print_json(&serde_json::json!({"argb": format!("{argb:#010x}")}))?;
            } else {
                println!("{argb:#010x}");
            }
        }
        Command::Render {
            pattern,
            width,
            height,
            output,
            params,
            recipe,
        } => {
            let recipe = resolve_recipe(pattern, width, height, &params, recipe.as_deref())?;

            let pattern = PatternKind::from_name(&recipe.pattern, &recipe.params)?;
            info!(
                "rendering {} {}x{} with {}",
                recipe.pattern,
                recipe.width,
                recipe.height,
                pattern.params()
            );
            let raster = hashtone_raster::fill(&pattern, recipe.width, recipe.height)?;
            hashtone_raster::snapshot::write_png(&raster, &output)?;

            if cli.json {
                print_json(&serde_json::json!({
                    "pattern": recipe.pattern,
                    "width": recipe.width,
                    "height": recipe.height,
                    "params": pattern.params(),
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "rendered {} ({}x{}) -> {}",
                    recipe.pattern,
                    recipe.width,
                    recipe.height,
                    output.display()
                );
            }
        }
        Command::List => {
            let names = PatternKind::list_patterns();
            if cli.json {
                let mut schemas = serde_json::Map::new();
                for &name in names {
                    let pattern = PatternKind::from_name(name, &serde_json::json!({}))?;
                    schemas.insert(name.to_string(), pattern.param_schema());
                }
                print_json(&serde_json::json!({"patterns": schemas}))?;
            } else {
                println!("Patterns:");
                for name in names {
                    println!("  {name}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
