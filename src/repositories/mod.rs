mod flat_file_store;
mod traits;

pub use flat_file_store::{FlatFileStore, DELIMITER, FIELD_COUNT};
pub use traits::ContactStore;
