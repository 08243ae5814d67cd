//! Fiscal table loading functionality.
//!
//! This module provides the [`TableLoader`] type for loading year-versioned
//! fiscal tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TaxTables;

/// Loads and provides access to fiscal tables.
///
/// The `TableLoader` reads every YAML file from a directory, one file per
/// fiscal year, and provides year-based lookup.
///
/// # Directory Structure
///
/// ```text
/// config/tables/
/// ├── 2024.yaml   # tables effective for reference months in 2024
/// └── 2025.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::TableLoader;
///
/// let loader = TableLoader::load("./config/tables").unwrap();
/// let tables = loader.tables_for_year(2024).unwrap();
/// println!("INSS ceiling: {:?}", tables.inss.ceiling);
/// ```
#[derive(Debug, Clone)]
pub struct TableLoader {
    /// Loaded table sets, sorted ascending by year.
    tables: Vec<TaxTables>,
}

impl TableLoader {
    /// Loads all fiscal table files from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tables directory (e.g., "./config/tables")
    ///
    /// # Returns
    ///
    /// Returns a `TableLoader` on success, or an error if:
    /// - The directory does not exist or contains no YAML files
    ///   (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a required field
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound { path: path_str });
        }

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

            let file_path = entry.path();
            if file_path.extension().is_some_and(|ext| ext == "yaml") {
                let mut table_set = Self::load_yaml::<TaxTables>(&file_path)?;
                // Strategy code relies on ascending bracket order.
                table_set
                    .inss
                    .brackets
                    .sort_by(|a, b| a.upper_limit.cmp(&b.upper_limit));
                table_set.irrf.brackets.sort_by(|a, b| {
                    match (a.upper_limit, b.upper_limit) {
                        (Some(x), Some(y)) => x.cmp(&y),
                        (Some(_), None) => std::cmp::Ordering::Less,
                        (None, Some(_)) => std::cmp::Ordering::Greater,
                        (None, None) => std::cmp::Ordering::Equal,
                    }
                });
                tables.push(table_set);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", path_str),
            });
        }

        tables.sort_by_key(|t| t.year);

        Ok(Self { tables })
    }

    /// Loads and parses a single YAML table file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the table set for the given fiscal year.
    ///
    /// # Errors
    ///
    /// Returns `TablesNotFound` if no file for that year was loaded.
    pub fn tables_for_year(&self, year: i32) -> EngineResult<&TaxTables> {
        self.tables
            .iter()
            .find(|t| t.year == year)
            .ok_or(EngineError::TablesNotFound { year })
    }

    /// Returns the most recent loaded table set.
    pub fn latest(&self) -> &TaxTables {
        // `load` guarantees at least one entry and ascending year order.
        &self.tables[self.tables.len() - 1]
    }

    /// Returns the years for which tables are loaded, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.tables.iter().map(|t| t.year).collect()
    }
}
