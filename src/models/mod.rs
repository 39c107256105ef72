pub mod canonical;
pub mod cell;
pub mod record;

pub use canonical::*;
pub use cell::*;
pub use record::*;
