use cedict_loader::Dictionary;
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-cedict-file>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];

    println!("Loading CEDICT file: {}", path);
    println!("{}", "=".repeat(60));

    let start = Instant::now();
    match Dictionary::open(path) {
        Ok(dict) => {
            let elapsed = start.elapsed();

            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Load completed.");
            println!("{}", "=".repeat(60));

            println!("\nStatistics:");
            println!("  Entries loaded: {}", dict.len());
            println!("  Lines skipped:  {}", dict.skipped_lines());
            println!("  Pool bytes:     {}", dict.pool_bytes());
            println!("  Elapsed:        {:.3} ms", elapsed.as_secs_f64() * 1000.0);

            println!("\nSample Entries (first 10):");
            for (i, entry) in dict.iter().take(10).enumerate() {
                println!(
                    "  {}. {} [{}] /{}/",
                    i + 1,
                    entry.traditional,
                    entry.pinyin,
                    entry.english
                );
            }

            if dict.len() > 10 {
                println!("  ... and {} more", dict.len() - 10);
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to load CEDICT file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
