//! Lexevo CLI - Evolve discriminating word attributes from a training file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use lexevo::{
    evolve::EvolutionEngine,
    schema::{EvolutionConfig, filter_languages, load_examples},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <training.txt> [language_one] [language_two]", args[0]);
        eprintln!();
        eprintln!("Evolve word attributes that discriminate between two languages.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  training.txt  Labeled examples, one per line: <label> <word> <word> ...");
        eprintln!("  language_one  First language label (default: English)");
        eprintln!("  language_two  Second language label (default: Dutch)");
        eprintln!();
        eprintln!("A sidecar <training>.config.json overrides run parameters.");
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let training_path = PathBuf::from(&args[1]);
    let language_one = args.get(2).cloned().unwrap_or_else(|| "English".to_string());
    let language_two = args.get(3).cloned().unwrap_or_else(|| "Dutch".to_string());

    // Load or default the run configuration
    let config_path = training_path.with_extension("config.json");
    let config: EvolutionConfig = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        })
    } else {
        EvolutionConfig::default()
    };

    // Load training rows and restrict to the two languages under comparison
    let rows = load_examples(&training_path).unwrap_or_else(|e| {
        eprintln!("Error loading training file: {}", e);
        std::process::exit(1);
    });
    let total_rows = rows.len();
    let rows = filter_languages(rows, &language_one, &language_two);

    println!("Lexevo Attribute Evolution");
    println!("==========================");
    println!("Languages: {} vs {}", language_one, language_two);
    println!("Rows: {} ({} before filtering)", rows.len(), total_rows);
    println!("Pool capacity: {}", config.max_pool_size);
    println!("Generations: {}", config.generations);
    println!();

    let generations = config.generations;
    let mut engine = EvolutionEngine::new(rows, language_one, language_two, config)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    println!("Seeded pool: {} attributes", engine.pool().len());
    println!();
    println!("Running evolution...");
    let start = Instant::now();

    let result = engine.run_with_callback(|summary| {
        // Print progress every 10%
        if summary.generation % (generations / 10).max(1) == 0 {
            println!(
                "  Generation {}/{}: size={}, best={:.4}, mean={:.4}",
                summary.generation,
                generations,
                summary.size,
                summary.best_fitness,
                summary.mean_fitness
            );
        }
    });

    if let Err(e) = result {
        eprintln!("Error during evolution: {}", e);
        std::process::exit(1);
    }

    let elapsed = start.elapsed();

    println!();
    println!("Final pool (ascending fitness):");
    for member in engine.pool().iter() {
        println!("  {}: {:.4}", member.attribute.name(), member.fitness);
    }
    println!();
    println!(
        "Time: {:.2}s ({} generations)",
        elapsed.as_secs_f32(),
        engine.generation()
    );
}

fn print_example_config() {
    let config = EvolutionConfig::default();

    println!("Example configuration (training.config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
