use anyhow::{anyhow, Context};
use config::{Config, File};
use hexring::{timed, GridConfig, HexDirection, HexGrid, HexId, Point2};
use log::{info, LevelFilter};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for building and querying ring-indexed hexagon grids.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexring")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. Any field missing from the file gets its default value.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Number of rings around the center hexagon. Overrides the config file
    #[structopt(short, long)]
    layers: Option<u16>,

    /// Distance between two adjacent hexagon centers. Overrides the config
    /// file
    #[structopt(long)]
    scale: Option<f64>,

    /// Vertical stretch applied to every hexagon. Overrides the config file
    #[structopt(long)]
    skew: Option<f64>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Write the whole grid (config, bounds, and every center) as JSON
    Dump {
        /// File to write to. If not given, the grid is printed to stdout
        #[structopt(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective grid config, after overrides, as TOML
    Config,

    /// Print the neighbors of one or more hexagons
    Neighbors {
        #[structopt(required = true)]
        ids: Vec<HexId>,

        /// Only look in this direction, e.g. `up_left` or `right`
        #[structopt(short, long)]
        direction: Option<HexDirection>,
    },

    /// Print the ring position, corner status, and center of one or more
    /// hexagons
    Info {
        #[structopt(required = true)]
        ids: Vec<HexId>,
    },

    /// Find the hexagon closest to a point
    Locate {
        #[structopt(allow_hyphen_values = true)]
        x: f64,
        #[structopt(allow_hyphen_values = true)]
        y: f64,
    },

    /// Pick a random hexagon within some distance of another one
    Random {
        center: HexId,

        /// Max distance from the center hexagon, in units of the grid scale
        radius: f64,

        /// Seed for the RNG. If not given, a random one is used
        #[structopt(long)]
        seed: Option<u64>,
    },
}

/// Everything we know about a single hexagon, for the `info` command
#[derive(Debug, Serialize)]
struct HexInfo {
    id: HexId,
    layer: u16,
    position: u32,
    section: u8,
    is_corner: bool,
    center: Point2,
    neighbors: Vec<HexId>,
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Load the config file (if any), then apply overrides from the command line
fn build_config(opt: &Opt) -> anyhow::Result<GridConfig> {
    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    if let Some(layers) = opt.layers {
        config.layers = layers;
    }
    if let Some(scale) = opt.scale {
        config.scale = scale;
    }
    if let Some(skew) = opt.skew {
        config.skew = skew;
    }
    Ok(config)
}

fn write_output(output_path: &Path, contents: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output_path)
        .with_context(|| format!("error opening output file {:?}", output_path))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("error writing to file {:?}", output_path))
}

fn hex_info(grid: &HexGrid, id: HexId) -> anyhow::Result<HexInfo> {
    let ring_position = grid.ring_position(id)?;
    Ok(HexInfo {
        id,
        layer: ring_position.layer,
        position: ring_position.position,
        section: ring_position.section,
        is_corner: grid.is_corner_hex(id)?,
        center: grid.center(id)?,
        neighbors: grid.neighbors_of(id)?,
    })
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = build_config(&opt)?;
    if let Command::Config = opt.command {
        // Print the config even if it's invalid, so it can be fixed
        let output = toml::to_string_pretty(&config)
            .context("error serializing config")?;
        print!("{}", output);
        return Ok(());
    }

    let grid = HexGrid::new(config)?;
    match opt.command {
        Command::Config => {}
        Command::Dump { output } => {
            let json = timed!("Serializing grid", log::Level::Info, grid.to_json());
            match output {
                Some(output_path) => {
                    write_output(&output_path, &json)?;
                    info!("Wrote grid to {:?}", output_path);
                }
                None => println!("{}", json),
            }
        }
        Command::Neighbors { ids, direction } => {
            for id in ids {
                match direction {
                    Some(direction) => {
                        let neighbor = grid.neighbor(id, direction)?;
                        match neighbor {
                            Some(neighbor) => println!("{}: {}", id, neighbor),
                            None => println!("{}: none", id),
                        }
                    }
                    None => {
                        println!("{}: {:?}", id, grid.neighbors_of(id)?)
                    }
                }
            }
        }
        Command::Info { ids } => {
            for id in ids {
                let info = hex_info(&grid, id)?;
                println!("{}", serde_json::to_string(&info)?);
            }
        }
        Command::Locate { x, y } => {
            println!("{}", grid.hex_id_at_position(Point2::new(x, y)));
        }
        Command::Random {
            center,
            radius,
            seed,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!("Using seed {}", seed);
            let mut rng = Pcg64::seed_from_u64(seed);
            println!("{}", grid.random_hex_id(center, radius, &mut rng)?);
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
