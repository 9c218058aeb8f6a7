use artisanflow::core::*;
use artisanflow::registry::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = std::env::temp_dir().join("artisanflow-demo");
    let mut store = FileStore::open(&dir)?;

    save_config(
        &mut store,
        &ArtisanConfig {
            country: "BE".into(),
            hourly_rate: Some(rust_decimal_macros::dec!(55)),
            materials_margin: Some(rust_decimal_macros::dec!(15)),
            completed: true,
            ..ArtisanConfig::default()
        },
    )?;
    println!("Artisan currency: {}", artisan_currency(&store)?.code);

    let mut clients = ClientRegistry::new(&mut store);
    if clients.initialize()? {
        println!("Seeded default clients in {}", dir.display());
    }

    let candidate = ClientProfile::new("Paul", "Lambert", "paul@lambert.be")
        .company("Lambert SRL")
        .country("BE");
    match clients.add(candidate) {
        Ok(client) => println!("Added #{} {}", client.id, client.name),
        Err(e) if e.is_duplicate() => println!("Skipped: {e}"),
        Err(e) => return Err(e.into()),
    }

    for client in clients.list()? {
        println!("  #{:<3} {:<32} {}", client.id, client.name, client.email);
    }
    Ok(())
}
