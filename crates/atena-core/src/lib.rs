pub mod error;
pub mod record;
pub mod router;
pub mod width;

pub use error::LoadError;
pub use record::{ContactRecord, Slot};
pub use router::CategoryRouter;
