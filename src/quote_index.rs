use crate::hash_table::{HashTable, DEFAULT_CAPACITY};

/// Load factor reported as the table's ceiling. Nothing acts on it.
pub const MAX_LOAD_FACTOR: f64 = 0.8;

/// Index from movie titles to their quotes.
///
/// Titles are matched exactly on lookup and case-insensitively on search.
/// Enumeration follows the order in which titles were first added.
#[derive(Clone, Debug)]
pub struct QuoteIndex {
    quotes: HashTable<String, Vec<String>>,
    titles: Vec<String>,
}

impl QuoteIndex {
    /// Creates an empty index backed by a table of default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty index backed by a table with a given number of
    /// buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            quotes: HashTable::with_capacity(capacity),
            titles: Vec::new(),
        }
    }

    /// Appends a quote to a title, registering the title if it is new.
    /// Returns true if the title was new.
    pub fn add_quote(&mut self, title: impl Into<String>, quote: impl Into<String>) -> bool {
        let title = title.into();
        let quote = quote.into();

        if let Some(quotes) = self.quotes.get_mut(&title) {
            quotes.push(quote);

            return false;
        }

        self.titles.push(title.clone());
        self.quotes.put(title, vec![quote])
    }

    /// Returns titles containing a pattern regardless of case, in the order
    /// they were added.
    pub fn find_titles_containing(&self, pattern: &str) -> Vec<&str> {
        let pattern = pattern.to_lowercase();

        self.titles
            .iter()
            .filter(|title| title.to_lowercase().contains(&pattern))
            .map(String::as_str)
            .collect()
    }

    /// Removes every title containing a pattern along with its quotes and
    /// returns the removed titles.
    pub fn delete_titles_containing(&mut self, pattern: &str) -> Vec<String> {
        let matches = self
            .find_titles_containing(pattern)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        for title in &matches {
            self.quotes.remove(title.as_str());
        }

        self.titles.retain(|title| !matches.contains(title));

        matches
    }

    /// Returns the quotes of a title, if the title is known.
    pub fn all_quotes_for(&self, title: &str) -> Option<&[String]> {
        self.quotes.get(title).map(Vec::as_slice)
    }

    /// Returns titles in the order they were added.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    /// Returns titles with their quotes in the order titles were added.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.titles.iter().filter_map(|title| {
            self.quotes
                .get(title.as_str())
                .map(|quotes| (title.as_str(), quotes.as_slice()))
        })
    }

    /// Returns a number of distinct titles.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if no title is stored.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.quotes.capacity()
    }

    pub fn occupied_buckets(&self) -> usize {
        self.quotes.occupied_buckets()
    }

    pub fn load_factor(&self) -> f64 {
        self.quotes.load_factor()
    }

    pub fn max_load_factor(&self) -> f64 {
        MAX_LOAD_FACTOR
    }
}

impl Default for QuoteIndex {
    fn default() -> Self {
        Self::new()
    }
}
