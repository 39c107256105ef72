//! Static canonical tables. Every table is a `const` slice in declaration
//! order; the ones that need hashing are wrapped in `Lazy` maps built once
//! per process and shared by reference.

pub mod age;
pub mod oceans;
pub mod species;
pub mod time_keywords;
pub mod tokens;

pub use age::*;
pub use oceans::*;
pub use species::*;
pub use time_keywords::*;
pub use tokens::*;
