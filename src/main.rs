use contact_buckets::hash_table::HashTable;
use contact_buckets::logger::initialize_logger;
use log::{error, info};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::process::ExitCode;
use std::time::Instant;

const TABLE_SIZE: isize = 10;
const SAMPLE_SIZE: usize = 100000;
const NAME_LENGTH: usize = 12;
// NAME_LENGTH alphanumeric code points never sum past 1464
const TIMING_TABLE_SIZE: usize = 1 << 11;

fn show_search(table: &HashTable, name: &str) {
    match table.search(name) {
        Some(contact) => println!("Search result: {}", contact),
        None => println!("Search result: {} not found", name),
    }
}

fn run_scenario() -> Result<(), contact_buckets::error::HashTableError> {
    let mut table: HashTable = HashTable::new(TABLE_SIZE)?;
    table.print_table();

    println!("\n--- Inserting Contacts ---");
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    table.print_table();

    println!("\n--- Searching for John ---");
    show_search(&table, "John");

    println!("\n--- Testing Collisions ---");
    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");
    table.print_table();

    println!("\n--- Updating Rebecca's Number ---");
    table.insert("Rebecca", "999-444-9999");
    table.print_table();

    println!("\n--- Searching for Missing Contact ---");
    show_search(&table, "Chris");
    Ok(())
}

fn run_timing() -> Result<(), contact_buckets::error::HashTableError> {
    let mut rng = rand::thread_rng();
    let names: Vec<String> = (0..SAMPLE_SIZE)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(NAME_LENGTH)
                .map(char::from)
                .collect()
        })
        .collect();

    let mut table: HashTable = HashTable::with_size(TIMING_TABLE_SIZE)?;

    let now: Instant = Instant::now();
    for name in names.iter() {
        table.insert(name, "000-000-0000");
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("\nTable size {} entries {}", table.size(), table.count());
    println!("Load factor {}", table.load_factor());
    println!("Avg time to insert {}", elapsed as f64 / SAMPLE_SIZE as f64);

    benchmarking::warm_up();
    let result = benchmarking::measure_function(|measurer| {
        for name in names.iter() {
            measurer.measure(|| table.search(name));
        }
    });
    match result {
        Ok(r) => println!("Avg time to search {:?}", r.elapsed()),
        Err(e) => error!("Search benchmark failed: {:?}", e),
    }
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();

    if let Err(e) = run_scenario().and_then(|_| run_timing()) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    info!("Done");
    ExitCode::SUCCESS
}
