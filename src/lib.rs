//! Separate-chaining hash table and a movie quote index built on it.
//!
//! [`HashTable`] keeps a fixed number of buckets, each a chain of key-value
//! pairs in insertion order. It never resizes; its load factor is reported
//! but not acted upon. [`QuoteIndex`] maps movie titles to their quotes on
//! top of the table and remembers the order in which titles were added.
//!
//! The [`loader`] module reads quote files into an index and [`Shell`] runs
//! the interactive command loop used by the `quote-index` binary.

mod bucket;
mod command;
mod error;
mod hash_table;
mod key_value;
pub mod loader;
mod quote_index;
mod shell;
mod utilities;

pub use command::Command;
pub use error::{Error, Result};
pub use hash_table::{DefaultHashBuilder, HashTable, HashTableIterator, DEFAULT_CAPACITY};
pub use quote_index::{QuoteIndex, MAX_LOAD_FACTOR};
pub use shell::Shell;
