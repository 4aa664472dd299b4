//! Data layer: table types and dataset loading.
//!
//! Architecture:
//! ```text
//!   user id ──► Config ──► base directory
//!                               │
//!                               ▼
//!   ┌──────────┐   train.csv, test.csv, test_2.csv
//!   │  loader   │  parse CSV → Table (dtype inference)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Datasets  │  (train, test_1, test_2)
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
