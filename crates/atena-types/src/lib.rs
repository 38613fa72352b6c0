pub mod types;

pub use types::{AddressBlock, AtenaRecord, Bucket, COLUMNS};
