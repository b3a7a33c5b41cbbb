//! Chroma Life CLI - run headless simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chroma_life::{FieldStats, Seed, SimulationConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Chroma Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations to advance (default: 100)");
        eprintln!();
        eprintln!("A seed sidecar <config>.seed.json is used when present;");
        eprintln!("otherwise the field is seeded randomly.");
        eprintln!();
        eprintln!("Example configuration is printed with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Load or default the seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    println!("Chroma Life");
    println!("===========");
    println!(
        "Grid: {}x{} ({:?} blend)",
        config.width, config.height, config.blend_mode
    );
    println!("Generations: {}", generations);
    println!();

    let mut field = seed.generate(&config);
    let initial_stats = FieldStats::from_field(&field);

    println!("Initial field:");
    println!("  Live cells: {}", initial_stats.live_cells);
    println!("  Mean vitality: {:.2}", initial_stats.mean_vitality);
    println!();

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        field = field.next_round();

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = FieldStats::from_field(&field);
            let elapsed = start.elapsed().as_secs_f32();
            let per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: live={}, mean vitality={:.2}, {:.1} gen/s",
                i + 1,
                generations,
                stats.live_cells,
                stats.mean_vitality,
                per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = FieldStats::from_field(&field);

    println!();
    println!("Final field:");
    println!("  Live cells: {}", final_stats.live_cells);
    println!("  Mean vitality: {:.2}", final_stats.mean_vitality);
    println!("  Max vitality: {}", final_stats.max_vitality);
    println!();
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
