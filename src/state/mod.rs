mod persistence;
mod session;
mod table;

pub use persistence::{load_config, load_retention_table, load_seed, save_seed};
pub use session::AdjusterSession;
pub use table::RetentionTable;
