//! Data layer: encodings, table model, and loading.
//!
//! Architecture:
//! ```text
//!  .csv (UTF-8 / UTF-16)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ encoding │  bytes → text
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  delimited text → Table
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Table   │  named columns, typed cells, head() preview
//!   └──────────┘
//! ```

pub mod encoding;
pub mod loader;
pub mod model;
