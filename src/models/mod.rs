pub mod record;
pub mod snapshot;
pub mod table;

pub use record::*;
pub use snapshot::*;
pub use table::*;
