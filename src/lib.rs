//! Loads the question-pairs datasets (train / test / test_2) for a
//! configured user into typed in-memory tables.

pub mod app;
pub mod config;
pub mod data;
pub mod error;

pub use config::Config;
pub use data::loader::{load_datasets, load_dir, load_table};
pub use data::model::{CellValue, Column, ColumnType, Datasets, Table};
pub use error::{ConfigError, LoadError};
