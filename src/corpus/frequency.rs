//! Raw word frequency tables.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, SemnetError};

/// A word→count table for one word category.
///
/// Counts for the same word are summed, so a table may be assembled from
/// several sources.
#[derive(Debug, Clone, Default)]
pub struct FrequencyList {
    counts: AHashMap<String, u64>,
    total: u64,
}

impl FrequencyList {
    /// Create an empty table.
    pub fn new() -> Self {
        FrequencyList::default()
    }

    /// Add a count for a word. Existing counts for the same word are summed.
    pub fn add(&mut self, word: &str, count: u64) {
        *self.counts.entry(word.to_string()).or_insert(0) += count;
        self.total += count;
    }

    /// The count recorded for a word; 0 when absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Whether a word has a recorded count.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Parse a table from whitespace-delimited `word count` lines. Blank
    /// lines are skipped; anything else with more or fewer than two fields,
    /// or a non-numeric count, is an error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = FrequencyList::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let mut parts = trimmed.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(word), Some(count), None) => {
                    let count = count.parse::<u64>().map_err(|_| {
                        SemnetError::frequency(format!(
                            "line {}: invalid count '{count}'",
                            number + 1
                        ))
                    })?;
                    list.add(word, count);
                }
                _ => {
                    return Err(SemnetError::frequency(format!(
                        "line {}: expected 'word count', got '{trimmed}'",
                        number + 1
                    )));
                }
            }
        }
        Ok(list)
    }

    /// Load a table from a `word count` text file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        FrequencyList::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_duplicates_are_summed() {
        let mut list = FrequencyList::new();
        list.add("Apfel", 10);
        list.add("Birne", 4);
        list.add("Apfel", 5);

        assert_eq!(list.count("Apfel"), 15);
        assert_eq!(list.count("Birne"), 4);
        assert_eq!(list.count("Kirsche"), 0);
        assert_eq!(list.len(), 2);
        assert_eq!(list.total(), 19);
    }

    #[test]
    fn test_from_reader() {
        let data = "Apfel 10\nBirne 4\n\nApfel 5\n";
        let list = FrequencyList::from_reader(data.as_bytes()).unwrap();
        assert_eq!(list.count("Apfel"), 15);
        assert_eq!(list.count("Birne"), 4);
    }

    #[test]
    fn test_malformed_lines_rejected() {
        assert!(FrequencyList::from_reader("Apfel".as_bytes()).is_err());
        assert!(FrequencyList::from_reader("Apfel zehn".as_bytes()).is_err());
        assert!(FrequencyList::from_reader("Apfel 1 extra".as_bytes()).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Haus 7").unwrap();
        writeln!(file, "Garten 3").unwrap();
        file.flush().unwrap();

        let list = FrequencyList::load_from_file(file.path()).unwrap();
        assert_eq!(list.count("Haus"), 7);
        assert_eq!(list.count("Garten"), 3);
        assert_eq!(list.total(), 10);
    }
}
