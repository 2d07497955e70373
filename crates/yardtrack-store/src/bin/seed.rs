//! # Seed Data Generator
//!
//! Initializes a YardTrack data directory for development and demos.
//!
//! ## Usage
//! ```bash
//! # Create ./yardtrack_data with the standard catalog at zero stock
//! cargo run -p yardtrack-store --bin seed
//!
//! # Opening stock per product
//! cargo run -p yardtrack-store --bin seed -- --stock cement=250 --stock bricks=5000
//!
//! # Specify the data directory
//! cargo run -p yardtrack-store --bin seed -- --dir ./data
//! ```

use std::env;
use std::process;
use std::sync::Arc;

use yardtrack_core::Catalog;
use yardtrack_store::{FileStore, InventoryLedger, KvStore};

struct Options {
    dir: String,
    stock: Vec<(String, i64)>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        dir: "./yardtrack_data".to_string(),
        stock: Vec::new(),
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--dir" => {
                options.dir = args
                    .next()
                    .ok_or_else(|| "--dir requires a path".to_string())?;
            }
            "-s" | "--stock" => {
                let spec = args
                    .next()
                    .ok_or_else(|| "--stock requires <product>=<qty>".to_string())?;
                let (product, qty) = spec
                    .split_once('=')
                    .ok_or_else(|| format!("invalid stock spec '{spec}', expected <product>=<qty>"))?;
                let qty: i64 = qty
                    .parse()
                    .map_err(|_| format!("invalid quantity in '{spec}'"))?;
                if qty <= 0 {
                    return Err(format!("quantity in '{spec}' must be positive"));
                }
                options.stock.push((product.to_string(), qty));
            }
            "-h" | "--help" => {
                println!("YardTrack Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --dir <PATH>           Data directory (default: ./yardtrack_data)");
                println!("  -s, --stock <PRODUCT>=<N>  Opening stock, repeatable");
                println!("  -h, --help                 Show this help message");
                process::exit(0);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(options)
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            process::exit(1);
        }
    };

    println!("🌱 YardTrack Seed Data Generator");
    println!("================================");
    println!("Data directory: {}", options.dir);

    let store = match FileStore::open(&options.dir) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let catalog = Catalog::standard();
    let mut ledger = InventoryLedger::load(&catalog, store.clone() as Arc<dyn KvStore>);

    for (product, qty) in &options.stock {
        match ledger.adjust(product, *qty) {
            Ok(new_stock) => println!("  {product}: stock set to {new_stock}"),
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
    }

    // Materialize the mapping even when no opening stock was given
    ledger.save();

    println!();
    println!("Seeded {} products:", catalog.products().len());
    for product in catalog.products() {
        let stock = ledger.stock(&product.id).unwrap_or(0);
        println!(
            "  {:<8} {:>8} {} @ {} per {}",
            product.id,
            stock,
            product.unit,
            product.price,
            product.unit.trim_end_matches('s')
        );
    }
    println!();
    println!("Done.");
}
