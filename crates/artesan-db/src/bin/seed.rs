//! # Seed Data Generator
//!
//! Populates an empty store with sample handmade products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default) into ./artesanapp.db
//! cargo run -p artesan-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p artesan-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p artesan-db --bin seed -- --db ./data/artesanapp.db
//! ```
//!
//! ## Generated Products
//! One base name per category, combined with a material variant:
//! "Collar de plata", "Tapiz de lana", ...
//!
//! Each product has:
//! - A price between 8.000 and 150.000 pesos
//! - Stock between 0 and 30
//! - Every tenth product marked unavailable
//! - Shipping type cycling Local / Nacional / Internacional

use artesan_core::{Category, ProductInput, ShippingType};
use artesan_db::{Database, DbConfig, DEFAULT_DB_FILENAME};
use std::env;

/// Base product names per category.
const CATALOG: &[(Category, &[&str])] = &[
    (
        Category::Decoration,
        &["Vela aromática", "Jarrón", "Portarretrato", "Móvil colgante"],
    ),
    (
        Category::Jewelry,
        &["Collar", "Aretes", "Pulsera", "Anillo"],
    ),
    (
        Category::Textile,
        &["Tapiz", "Mochila", "Ruana", "Cojín"],
    ),
    (
        Category::Stationery,
        &["Cuaderno", "Agenda", "Marcapáginas", "Tarjeta"],
    ),
    (
        Category::Other,
        &["Llavero", "Imán", "Juguete", "Maceta"],
    ),
];

/// Material variants appended to the base name.
const MATERIALS: &[&str] = &["de plata", "de lana", "de madera", "de cuero", "reciclado"];

/// Sample suppliers; an empty entry means "no supplier".
const SUPPLIERS: &[&str] = &["Artesanos Unidos", "Taller La Ceiba", "", "Cooperativa Wayuu"];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from(DEFAULT_DB_FILENAME);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("ArtesanApp Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./{DEFAULT_DB_FILENAME})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("ArtesanApp Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected, table ready");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);
        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }
        generated += 1;
    }

    println!(
        "✓ Generated {} products in {:?}",
        generated,
        start.elapsed()
    );

    Ok(())
}

/// Builds the `seed`-th sample product.
fn generate_product(seed: usize) -> ProductInput {
    let (category, names) = CATALOG[seed % CATALOG.len()];
    let name = names[(seed / CATALOG.len()) % names.len()];
    let material = MATERIALS[(seed / (CATALOG.len() * names.len())) % MATERIALS.len()];

    // 8.000 - 150.000 pesos, rounded to 500
    let price = 8000 + ((seed * 7919) % 285) * 500;

    ProductInput {
        name: format!("{} {}", name, material),
        category,
        price: price as f64,
        stock: ((seed * 13) % 31) as i64,
        available: seed % 10 != 9,
        supplier: SUPPLIERS[seed % SUPPLIERS.len()].to_string(),
        shipping_type: ShippingType::ALL[seed % ShippingType::ALL.len()],
    }
}
