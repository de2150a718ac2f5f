//! Keyed mutual exclusion across processes, backed by PostgreSQL row locks.
//!
//! Independent processes (possibly on different machines) agree that at most
//! one of them is doing the work associated with a string key at any time.
//! There is no consensus protocol: exclusion is delegated entirely to the
//! database's row-level locking, and "holding the lock" is literally holding
//! an open transaction with an exclusive row lock on the key's record.
//!
//! The backing table is created once by the operator:
//!
//! ```sql
//! CREATE TABLE pglocks (key TEXT PRIMARY KEY);
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use pglock::{AcquireOutcome, Lock, PgPool};
//!
//! let pool = PgPool::connect(&database_url).await?;
//! let mut lock = Lock::new(pool, "job-42");
//!
//! match lock.acquire().await? {
//!     AcquireOutcome::Acquired => {
//!         // exclusive across every process sharing the database
//!         do_the_work().await;
//!         lock.release().await?;
//!     }
//!     AcquireOutcome::Contended => {
//!         // someone else is on it; retry later or skip
//!     }
//! }
//! ```
//!
//! Acquisition never blocks waiting for a contended key: contention is a
//! distinct [`AcquireOutcome::Contended`] result, and any retry or polling
//! strategy belongs to the caller. Locks do not expire on their own; a held
//! lock lasts until [`Lock::release`], the handle is dropped, or the
//! database connection dies.

mod error;
mod lock;

pub use error::LockError;
pub use lock::{AcquireOutcome, Lock, LockManager};

// Re-export the pool type callers hand to `Lock::new`.
pub use sqlx::PgPool;
