pub mod error {

    use thiserror::Error;

    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum HashTableError {
        #[error("invalid table size {size}: size must be a positive integer")]
        InvalidConfiguration { size: isize },
    }
}

pub mod logger {

    use std::sync::Once;

    use env_logger::Builder;
    use log::LevelFilter;

    static INIT: Once = Once::new();

    pub fn initialize_logger() {
        INIT.call_once_force(|_| {
            let mut builder: Builder = Builder::new();

            builder
                .filter_level(LevelFilter::Info)
                .filter_module("contact_buckets", LevelFilter::Info)
                .format_timestamp_millis()
                .parse_default_env();

            // another logger may already be installed by the host program
            let _ = builder.try_init();
        });
    }
}

pub mod hash_table {

    use std::fmt::{self, Display, Write};

    use log::{debug, trace};

    use crate::error::HashTableError;

    /// One directory entry. The name is fixed at creation; only the number changes.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Contact {
        name: String,
        number: String,
    }

    impl Contact {
        pub fn new(name: &str, number: &str) -> Contact {
            Contact {
                name: name.to_owned(),
                number: number.to_owned(),
            }
        }

        pub fn name(&self) -> &str {
            &self.name
        }

        pub fn number(&self) -> &str {
            &self.number
        }

        pub fn set_number(&mut self, number: &str) {
            self.number.clear();
            self.number.push_str(number);
        }
    }

    impl Display for Contact {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}: {}", self.name, self.number)
        }
    }

    /// A link in a bucket's chain. `next` is an index into the node arena.
    #[derive(Debug, Clone)]
    struct Node {
        key: String,
        value: Contact,
        next: Option<usize>,
    }

    /// Fixed-size table of contacts keyed by name, resolving collisions by separate chaining.
    ///
    /// Nodes live in a single arena and are never removed, so an index handed out by
    /// `insert` stays valid for the lifetime of the table. Each bucket holds the arena
    /// index of its chain head; chains are kept in insertion order.
    #[derive(Debug, Clone)]
    pub struct HashTable {
        size: usize,
        buckets: Vec<Option<usize>>,
        nodes: Vec<Node>,
    }

    impl HashTable {
        /// Builds a table with `size` empty buckets. Zero and negative sizes are rejected
        /// here, before anything can index or divide by them.
        pub fn new(size: isize) -> Result<HashTable, HashTableError> {
            match usize::try_from(size) {
                Ok(size) if size > 0 => Ok(Self::allocate(size)),
                _ => Err(HashTableError::InvalidConfiguration { size }),
            }
        }

        pub fn with_size(size: usize) -> Result<HashTable, HashTableError> {
            if size == 0 {
                return Err(HashTableError::InvalidConfiguration { size: 0 });
            }
            Ok(Self::allocate(size))
        }

        fn allocate(size: usize) -> HashTable {
            debug!("Allocating hash table with {} buckets", size);
            HashTable {
                size,
                buckets: vec![None; size],
                nodes: Vec::new(),
            }
        }

        /// Sums the code points of `key` modulo the table size.
        ///
        /// Anagrams always share a bucket. The sum is reduced as it is accumulated so long
        /// keys cannot overflow; the result equals the full sum taken modulo `size`.
        pub fn hash_function(&self, key: &str) -> usize {
            let mut total: usize = 0;
            for c in key.chars() {
                total = (total + c as usize % self.size) % self.size;
            }
            total
        }

        pub fn size(&self) -> usize {
            self.size
        }

        pub fn count(&self) -> usize {
            self.nodes.len()
        }

        pub fn is_empty(&self) -> bool {
            self.nodes.is_empty()
        }

        pub fn load_factor(&self) -> f64 {
            self.count() as f64 / self.size as f64
        }

        /// Number of entries chained in bucket `index`, or 0 if the index is out of range.
        pub fn chain_len(&self, index: usize) -> usize {
            let mut len: usize = 0;
            let mut cursor: Option<usize> = self.buckets.get(index).copied().flatten();
            while let Some(i) = cursor {
                len += 1;
                cursor = self.nodes[i].next;
            }
            len
        }

        /// Inserts a contact, or overwrites the number of an existing contact with the
        /// same name. New entries are appended to the tail of their bucket's chain.
        pub fn insert(&mut self, key: &str, number: &str) {
            let h: usize = self.hash_function(key);
            let new_index: usize = self.nodes.len();

            let mut current: usize = match self.buckets[h] {
                None => {
                    self.nodes.push(Node {
                        key: key.to_owned(),
                        value: Contact::new(key, number),
                        next: None,
                    });
                    self.buckets[h] = Some(new_index);
                    debug!("Inserted {:?} into empty bucket {}", key, h);
                    return;
                }
                Some(head) => head,
            };

            trace!("Bucket {} occupied, walking chain for {:?}", h, key);
            loop {
                let node: &mut Node = &mut self.nodes[current];
                if node.key == key {
                    node.value.set_number(number);
                    debug!("Updated number for {:?} in bucket {}", key, h);
                    return;
                }
                match node.next {
                    Some(next) => current = next,
                    None => break,
                }
            }

            self.nodes.push(Node {
                key: key.to_owned(),
                value: Contact::new(key, number),
                next: None,
            });
            self.nodes[current].next = Some(new_index);
            debug!("Appended {:?} to chain in bucket {}", key, h);
        }

        fn find(&self, key: &str) -> Option<usize> {
            let mut cursor: Option<usize> = self.buckets[self.hash_function(key)];
            while let Some(i) = cursor {
                let node: &Node = &self.nodes[i];
                if node.key == key {
                    return Some(i);
                }
                cursor = node.next;
            }
            None
        }

        /// Returns the contact stored under `key`, or `None` if no such contact exists.
        pub fn search(&self, key: &str) -> Option<&Contact> {
            self.find(key).map(|i| &self.nodes[i].value)
        }

        pub fn search_mut(&mut self, key: &str) -> Option<&mut Contact> {
            match self.find(key) {
                Some(i) => Some(&mut self.nodes[i].value),
                None => None,
            }
        }

        /// One line per bucket: `Index i: Empty`, or every contact in chain order.
        pub fn dump(&self) -> String {
            let mut out: String = String::new();
            // writing into a String cannot fail
            let _ = self.write_table(&mut out);
            out
        }

        pub fn print_table(&self) {
            print!("{}", self.dump());
        }

        fn write_table<W: Write>(&self, out: &mut W) -> fmt::Result {
            for (i, head) in self.buckets.iter().enumerate() {
                write!(out, "Index {}:", i)?;
                let mut cursor: Option<usize> = *head;
                if cursor.is_none() {
                    write!(out, " Empty")?;
                }
                while let Some(n) = cursor {
                    write!(out, " - {}", self.nodes[n].value)?;
                    cursor = self.nodes[n].next;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }

    impl Display for HashTable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.write_table(f)
        }
    }

}
