use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default number of aliases a table accepts.
pub const DEFAULT_CAPACITY: usize = 10;

/// Bytes kept from each line of an alias file.
pub const MAX_FIELD_LEN: usize = 24;

#[derive(Debug)]
pub enum AliasError {
    CapacityExceeded(usize),
    Io(PathBuf, std::io::Error),
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::CapacityExceeded(capacity) => {
                write!(f, "alias table is full ({} entries)", capacity)
            }
            AliasError::Io(path, e) => write!(f, "{}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for AliasError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    alias: Box<str>,
    target: Box<str>,
}

impl AliasEntry {
    pub fn new(alias: &str, target: &str) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for AliasEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.alias, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(usize),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Missing,
}

/// Bounded table of alias names to target command names.
///
/// Alias names are unique; several aliases may share a target. Removal
/// swaps the last entry into the freed slot, so listing order is only
/// stable until the next removal.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    capacity: usize,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl AliasTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Points `alias` at `target`.
    ///
    /// An entry already holding `target` is renamed to `alias`; failing
    /// that, an entry already named `alias` is retargeted. Only a brand new
    /// pair grows the table.
    pub fn add_or_replace(&mut self, alias: &str, target: &str) -> Result<(), AliasError> {
        if let Some(index) = self.entries.iter().position(|e| &*e.target == target) {
            self.entries[index].alias = alias.into();
            let shadowed = self
                .entries
                .iter()
                .enumerate()
                .find(|(i, e)| *i != index && &*e.alias == alias)
                .map(|(i, _)| i);
            if let Some(shadowed) = shadowed {
                log::debug!("alias '{}' moved off '{}'", alias, self.entries[shadowed].target);
                self.entries.swap_remove(shadowed);
            }
            return Ok(());
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| &*e.alias == alias) {
            entry.target = target.into();
            return Ok(());
        }

        if self.entries.len() >= self.capacity {
            return Err(AliasError::CapacityExceeded(self.capacity));
        }
        self.entries.push(AliasEntry::new(alias, target));
        Ok(())
    }

    /// Removes `alias` if present. Returns whether anything was removed.
    pub fn remove(&mut self, alias: &str) -> bool {
        match self.entries.iter().position(|e| &*e.alias == alias) {
            Some(index) => {
                self.entries.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|e| &*e.alias == token)
            .map(|e| e.target())
            .unwrap_or(token)
    }

    pub fn save(&self, path: &Path) -> Result<SaveOutcome, AliasError> {
        if self.entries.is_empty() {
            return Ok(SaveOutcome::Empty);
        }

        let io_err = |e| AliasError::Io(path.to_path_buf(), e);
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        for entry in &self.entries {
            writeln!(writer, "{}\n{}", entry.alias, entry.target).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        Ok(SaveOutcome::Saved(self.entries.len()))
    }

    /// Merges the records of an alias file into the table.
    ///
    /// Existing entries are kept. A record that would overflow the table
    /// stops the load; records merged before it stay in place. The count
    /// returned is how many entries the table gained.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome, AliasError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("cannot open alias file {}: {}", path.display(), e);
                return Ok(LoadOutcome::Missing);
            }
        };

        let io_err = |e| AliasError::Io(path.to_path_buf(), e);
        let mut reader = BufReader::new(file);
        let mut added = 0;
        while let Some(alias) = read_field(&mut reader).map_err(io_err)? {
            let Some(target) = read_field(&mut reader).map_err(io_err)? else {
                log::warn!("{}: alias '{}' has no target", path.display(), alias);
                break;
            };

            if alias.is_empty() || target.is_empty() {
                log::warn!("{}: skipping record with an empty field", path.display());
                continue;
            }

            let before = self.entries.len();
            self.add_or_replace(&alias, &target)?;
            if self.entries.len() > before {
                added += 1;
            }
        }

        Ok(LoadOutcome::Loaded(added))
    }
}

/// Reads one line of an alias file, without its line ending, cut to
/// `MAX_FIELD_LEN` bytes. Invalid UTF-8 is replaced rather than rejected.
fn read_field(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }

    line.truncate(MAX_FIELD_LEN);
    // a character split by the cut is dropped whole
    if let Err(e) = std::str::from_utf8(&line) {
        if e.error_len().is_none() {
            line.truncate(e.valid_up_to());
        }
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("myshell_aliases_{}_{}", name, std::process::id()))
    }

    fn pairs(table: &AliasTable) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = table
            .list()
            .iter()
            .map(|e| (e.alias().to_string(), e.target().to_string()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_add_and_resolve() {
        let mut table = AliasTable::default();
        table.add_or_replace("ll", "ls").unwrap();

        assert_eq!(table.resolve("ll"), "ls");
        assert_eq!(table.resolve("ls"), "ls");
        assert_eq!(table.resolve("l"), "l");
    }

    #[test]
    fn test_replace_keyed_by_target() {
        let mut table = AliasTable::default();
        table.add_or_replace("ll", "ls").unwrap();
        table.add_or_replace("dir", "ls").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("dir"), "ls");
        assert_eq!(table.resolve("ll"), "ll");
    }

    #[test]
    fn test_alias_names_stay_unique() {
        let mut table = AliasTable::default();
        table.add_or_replace("a", "ls").unwrap();
        table.add_or_replace("b", "pwd").unwrap();

        // retarget an existing alias name
        table.add_or_replace("a", "date").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("a"), "date");

        // rename the entry for `pwd` to an alias that is already taken
        table.add_or_replace("a", "pwd").unwrap();
        assert_eq!(pairs(&table), vec![("a".to_string(), "pwd".to_string())]);
    }

    #[test]
    fn test_remove_swaps_last_entry() {
        let mut table = AliasTable::default();
        table.add_or_replace("a", "1").unwrap();
        table.add_or_replace("b", "2").unwrap();
        table.add_or_replace("c", "3").unwrap();

        assert!(table.remove("a"));
        let aliases: Vec<&str> = table.list().iter().map(|e| e.alias()).collect();
        assert_eq!(aliases, vec!["c", "b"]);
        assert_eq!(table.resolve("a"), "a");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut table = AliasTable::default();
        table.add_or_replace("a", "1").unwrap();

        assert!(!table.remove("zzz"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut table = AliasTable::new(2);
        table.add_or_replace("a", "1").unwrap();
        table.add_or_replace("b", "2").unwrap();

        assert!(matches!(
            table.add_or_replace("c", "3"),
            Err(AliasError::CapacityExceeded(2))
        ));
        assert_eq!(table.len(), 2);

        // replacing never needs room
        table.add_or_replace("c", "2").unwrap();
        assert_eq!(table.resolve("c"), "2");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_file("round_trip");
        let mut table = AliasTable::default();
        table.add_or_replace("ll", "ls").unwrap();
        table.add_or_replace("where", "pwd").unwrap();
        table.add_or_replace("now", "date").unwrap();
        table.remove("ll");

        assert_eq!(table.save(&path).unwrap(), SaveOutcome::Saved(2));
        assert_eq!(fs::read_to_string(&path).unwrap(), "now\ndate\nwhere\npwd\n");

        let mut loaded = AliasTable::default();
        assert_eq!(loaded.load(&path).unwrap(), LoadOutcome::Loaded(2));
        assert_eq!(pairs(&loaded), pairs(&table));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_save_empty_table_writes_nothing() {
        let path = temp_file("empty");
        let table = AliasTable::default();

        assert_eq!(table.save(&path).unwrap(), SaveOutcome::Empty);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let mut table = AliasTable::default();
        table.add_or_replace("a", "b").unwrap();

        let result = table.save(Path::new("/nonexistent/dir/aliases"));
        assert!(matches!(result, Err(AliasError::Io(_, _))));
    }

    #[test]
    fn test_load_missing_file() {
        let mut table = AliasTable::default();
        let outcome = table.load(Path::new("/nonexistent/aliases")).unwrap();

        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_truncates_long_lines() {
        let path = temp_file("truncate");
        fs::write(&path, "abcdefghijklmnopqrstuvwxyz\nls\r\nshort\naüüüüüüüüüüüüü\n").unwrap();

        let mut table = AliasTable::default();
        assert_eq!(table.load(&path).unwrap(), LoadOutcome::Loaded(2));
        assert_eq!(table.resolve("abcdefghijklmnopqrstuvwx"), "ls");
        // a cut inside a multi-byte character backs off to the boundary
        assert_eq!(table.resolve("short"), "aüüüüüüüüüüü");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_appends_and_rejects_overflow() {
        let path = temp_file("overflow");
        fs::write(&path, "b\n2\nc\n3\nd\n4\n").unwrap();

        let mut table = AliasTable::new(3);
        table.add_or_replace("a", "1").unwrap();

        let result = table.load(&path);
        assert!(matches!(result, Err(AliasError::CapacityExceeded(3))));
        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve("a"), "1");
        assert_eq!(table.resolve("c"), "3");
        assert_eq!(table.resolve("d"), "d");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_keeps_records_after_invalid_bytes() {
        let path = temp_file("invalid_utf8");
        fs::write(&path, b"ll\nls\nx\xff\ndate\nnow\ndate2\n").unwrap();

        let mut table = AliasTable::default();
        assert_eq!(table.load(&path).unwrap(), LoadOutcome::Loaded(3));
        assert_eq!(table.resolve("ll"), "ls");
        assert_eq!(table.resolve("x\u{fffd}"), "date");
        assert_eq!(table.resolve("now"), "date2");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_counts_only_new_entries() {
        let path = temp_file("count");
        fs::write(&path, "ll\nls\nwhere\npwd\nnow\ndate\n").unwrap();

        let mut table = AliasTable::default();
        table.add_or_replace("ll", "ls").unwrap();
        table.add_or_replace("where", "cwd").unwrap();

        assert_eq!(table.load(&path).unwrap(), LoadOutcome::Loaded(1));
        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve("where"), "pwd");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_ignores_dangling_alias() {
        let path = temp_file("dangling");
        fs::write(&path, "ll\nls\norphan\n").unwrap();

        let mut table = AliasTable::default();
        assert_eq!(table.load(&path).unwrap(), LoadOutcome::Loaded(1));
        assert_eq!(table.resolve("orphan"), "orphan");

        fs::remove_file(path).unwrap();
    }
}
