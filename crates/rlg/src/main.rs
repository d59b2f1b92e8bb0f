//! Roguelike dungeon generator.
//!
//! Generates (or loads) a dungeon, computes both distance maps from the
//! player's position, and prints all three boards to stdout.

mod display;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;

use rlg_core::{
    Coord, Dungeon, DungeonConfig, DungeonRng, compute_distances, config, generate_dungeon,
    load_dungeon, place_player, save_dungeon, world,
};

#[derive(Parser, Debug)]
#[command(name = "rlg327", version, about = "Generate a roguelike dungeon level")]
struct Cli {
    /// Save the dungeon to ~/.rlg327/dungeon
    #[arg(long)]
    save: bool,

    /// Load the dungeon from ~/.rlg327/dungeon instead of generating
    #[arg(long)]
    load: bool,

    /// Number of rooms (clamped to 10..=50)
    #[arg(long, default_value_t = config::MIN_NUMBER_OF_ROOMS)]
    rooms: usize,

    /// Player column; requires --player-y
    #[arg(long, requires = "player_y")]
    player_x: Option<usize>,

    /// Player row; requires --player-x
    #[arg(long, requires = "player_x")]
    player_y: Option<usize>,

    /// Largest room width to place
    #[arg(long, default_value_t = config::DEFAULT_MAX_ROOM_WIDTH)]
    max_room_width: usize,

    /// Largest room height to place
    #[arg(long, default_value_t = config::DEFAULT_MAX_ROOM_HEIGHT)]
    max_room_height: usize,

    /// RNG seed for reproducible dungeons
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> DungeonConfig {
        let player = match (self.player_x, self.player_y) {
            (Some(x), Some(y)) => Some(Coord::new(x, y)),
            _ => None, // clap enforces both-or-neither
        };
        DungeonConfig {
            rooms: self.rooms,
            max_room_width: self.max_room_width,
            max_room_height: self.max_room_height,
            player,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rlg327: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.config();
    if config.rooms != config.clamped_rooms() {
        eprintln!(
            "room count {} clamped to {}",
            config.rooms,
            config.clamped_rooms()
        );
    }

    let mut dungeon = if cli.load {
        load(&config)?
    } else {
        println!("Generating dungeon with {} rooms...", config.clamped_rooms());
        generate_dungeon(&config)?
    };

    compute_distances(&mut dungeon.grid, dungeon.player);
    println!(
        "Player location: ({}, {}) (x, y)",
        dungeon.player.x, dungeon.player.y
    );

    print!("{}", display::render_dungeon(&dungeon.grid, dungeon.player));
    println!("Non-tunneling distance map:");
    print!(
        "{}",
        display::render_non_tunneling(&dungeon.grid, dungeon.player)
    );
    println!("Tunneling distance map:");
    print!(
        "{}",
        display::render_tunneling(&dungeon.grid, dungeon.player)
    );

    if cli.save {
        world::ensure_dungeon_directory()?;
        let path = world::dungeon_file_path()?;
        save_dungeon(&path, &dungeon.grid, &dungeon.rooms)?;
        println!("Saved dungeon to {}", path.display());
    }

    Ok(())
}

fn load(config: &DungeonConfig) -> Result<Dungeon, Box<dyn Error>> {
    config.validate(rlg_core::DUNGEON_HEIGHT, rlg_core::DUNGEON_WIDTH)?;
    let path = world::dungeon_file_path()?;
    println!("Loading dungeon from {}", path.display());
    let (grid, rooms) = load_dungeon(&path)?;

    if config.player.is_none() && rooms.is_empty() {
        return Err("loaded dungeon has no rooms; pass --player-x/--player-y".into());
    }
    let mut rng = config
        .seed
        .map_or_else(DungeonRng::from_entropy, DungeonRng::new);
    let player = place_player(config.player, &rooms, &mut rng);
    Ok(Dungeon {
        grid,
        rooms,
        player,
    })
}
