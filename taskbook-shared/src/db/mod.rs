/// Database layer for Taskbook
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
/// - `migrations`: Database migration runner
///
/// Models are in the `models` module at crate root level.

pub mod migrations;
pub mod pool;
