use contact_buckets::error::HashTableError;
use contact_buckets::hash_table::{Contact, HashTable};
use contact_buckets::logger::initialize_logger;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

fn setup(size: isize) -> HashTable {
    initialize_logger();
    HashTable::new(size).expect("positive size")
}

#[test]
fn directory_scenario() {
    let mut table: HashTable = setup(10);

    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    assert_eq!(
        table.search("John"),
        Some(&Contact::new("John", "909-876-1234"))
    );

    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");
    assert_eq!(table.hash_function("Amy"), table.hash_function("May"));
    assert_eq!(table.search("Amy").unwrap().number(), "111-222-3333");
    assert_eq!(table.search("May").unwrap().number(), "222-333-1111");

    table.insert("Rebecca", "999-444-9999");
    assert_eq!(
        table.search("Rebecca"),
        Some(&Contact::new("Rebecca", "999-444-9999"))
    );
    assert_eq!(table.count(), 4);

    assert!(table.search("Chris").is_none());
}

#[test]
fn scenario_dump() {
    let mut table: HashTable = setup(10);
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");
    table.insert("Rebecca", "999-444-9999");

    // John = 399, Rebecca = 677, Amy = May = 295
    let expected: &str = "Index 0: Empty\n\
                          Index 1: Empty\n\
                          Index 2: Empty\n\
                          Index 3: Empty\n\
                          Index 4: Empty\n\
                          Index 5: - Amy: 111-222-3333 - May: 222-333-1111\n\
                          Index 6: Empty\n\
                          Index 7: - Rebecca: 999-444-9999\n\
                          Index 8: Empty\n\
                          Index 9: - John: 909-876-1234\n";
    assert_eq!(table.dump(), expected);
    // dumping twice leaves the table untouched
    assert_eq!(table.dump(), expected);
}

#[test]
fn construction_fails_fast() {
    initialize_logger();
    for size in [0, -1, isize::MIN] {
        assert!(matches!(
            HashTable::new(size),
            Err(HashTableError::InvalidConfiguration { size: s }) if s == size
        ));
    }
}

#[test]
fn random_round_trip() {
    let mut table: HashTable = setup(17);
    let mut rng = thread_rng();
    let mut inserted: Vec<(String, String)> = Vec::new();

    for i in 0..500 {
        let len: usize = rng.gen_range(1..10);
        let name: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        let number: String = format!("555-{:04}", i);
        table.insert(&name, &number);
        inserted.retain(|(n, _)| *n != name);
        inserted.push((name, number));
    }

    assert_eq!(table.count(), inserted.len());
    for (name, number) in inserted.iter() {
        let contact: &Contact = table.search(name).expect("inserted contact");
        assert_eq!(contact.name(), name);
        assert_eq!(contact.number(), number);
    }

    let total: usize = (0..table.size()).map(|i| table.chain_len(i)).sum();
    assert_eq!(total, table.count());
}

#[test]
fn every_key_collides_in_a_single_bucket() {
    let mut table: HashTable = setup(1);
    let names: [&str; 6] = ["Amy", "May", "Yam", "Bob", "Rebecca", "John"];
    for (i, name) in names.iter().enumerate() {
        table.insert(name, &i.to_string());
    }
    assert_eq!(table.chain_len(0), names.len());
    for (i, name) in names.iter().enumerate() {
        assert_eq!(table.search(name).unwrap().number(), i.to_string());
    }
    assert!(table.search("ymA").is_none());
}

#[test]
fn contact_display() {
    let contact: Contact = Contact::new("John", "909-876-1234");
    assert_eq!(contact.to_string(), "John: 909-876-1234");
}
