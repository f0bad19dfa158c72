mod memory;
mod mysql;

pub use memory::MemorySearchLog;
pub use mysql::MySqlSearchLog;
