use crate::error::{PhotoRosterError, Result};
use serde::Deserialize;
use std::path::Path;

/// One roster row. Identity for cache lookups is the exact `name` string.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Date", default)]
    pub date: String,

    #[serde(rename = "Journalist or Media Worker", default)]
    pub affiliation: String,
}

/// Read the roster CSV. The roster is the one mandatory input, so a
/// missing or empty file is an error rather than an empty result.
pub fn load_roster(path: &Path) -> Result<Vec<RosterRecord>> {
    if !path.exists() {
        return Err(PhotoRosterError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    if records.is_empty() {
        return Err(PhotoRosterError::EmptyRoster(path.display().to_string()));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_roster() {
        let dir = std::env::temp_dir().join("photo-roster-test-roster");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roster.csv");
        fs::write(
            &path,
            "Name,Date,Journalist or Media Worker\n\
             Maria Ressa,2021-10-08,Rappler\n\
             Jamal K.,2018-10-02,\"The Washington Post, columnist\"\n",
        )
        .unwrap();

        let records = load_roster(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Maria Ressa");
        assert_eq!(records[0].date, "2021-10-08");
        assert_eq!(records[1].affiliation, "The Washington Post, columnist");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_roster_missing_file() {
        let result = load_roster(Path::new("/nonexistent/roster.csv"));
        assert!(matches!(result, Err(PhotoRosterError::FileNotFound(_))));
    }

    #[test]
    fn test_load_roster_header_only_is_empty() {
        let dir = std::env::temp_dir().join("photo-roster-test-roster-empty");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roster.csv");
        fs::write(&path, "Name,Date,Journalist or Media Worker\n").unwrap();

        let result = load_roster(&path);
        assert!(matches!(result, Err(PhotoRosterError::EmptyRoster(_))));

        fs::remove_dir_all(&dir).ok();
    }
}
