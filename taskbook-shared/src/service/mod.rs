/// Business logic for Taskbook
///
/// # Modules
///
/// - `tasks`: Task service enforcing title validation and the per-task
///   ownership rule on top of the row-level model operations

pub mod tasks;
