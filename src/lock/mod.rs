mod lock;
mod manager;

pub use lock::{AcquireOutcome, Lock};
pub use manager::LockManager;
