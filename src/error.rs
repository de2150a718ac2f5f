use std::error::Error;
use std::fmt;

/// Error type for lock operations.
///
/// Contention is not represented here. A busy key surfaces as
/// [`AcquireOutcome::Contended`](crate::AcquireOutcome::Contended) from
/// `acquire` and as `true` from `is_locked`; this enum covers misuse of a
/// handle and genuine database failures, tagged with the phase that failed.
#[derive(Debug)]
pub enum LockError {
    /// `acquire` was called while this handle already holds its lock.
    AlreadyHeld,
    /// `release` was called while this handle holds nothing.
    NotHeld,
    /// Creating the key's lock record failed.
    CreateRecord(sqlx::Error),
    /// Taking the row lock failed.
    Acquire(sqlx::Error),
    /// The read-only contention probe failed.
    Probe(sqlx::Error),
    /// Rolling back the held transaction failed.
    Release(sqlx::Error),
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::AlreadyHeld => write!(f, "lock transaction already active"),
            LockError::NotHeld => write!(f, "no lock transaction to release"),
            LockError::CreateRecord(e) => write!(f, "create lock record: {}", e),
            LockError::Acquire(e) => write!(f, "lock row: {}", e),
            LockError::Probe(e) => write!(f, "check lock: {}", e),
            LockError::Release(e) => write!(f, "release lock: {}", e),
        }
    }
}

impl Error for LockError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LockError::AlreadyHeld | LockError::NotHeld => None,
            LockError::CreateRecord(e)
            | LockError::Acquire(e)
            | LockError::Probe(e)
            | LockError::Release(e) => Some(e),
        }
    }
}

impl LockError {
    /// Whether this is a local misuse of the handle rather than a database
    /// fault. Misuse errors never touched the database.
    pub fn is_usage(&self) -> bool {
        matches!(self, LockError::AlreadyHeld | LockError::NotHeld)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_phase() {
        let err = LockError::CreateRecord(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("create lock record:"));

        let err = LockError::Acquire(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("lock row:"));

        let err = LockError::Probe(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("check lock:"));

        let err = LockError::Release(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("release lock:"));
    }

    #[test]
    fn usage_errors_have_no_source() {
        assert!(LockError::AlreadyHeld.is_usage());
        assert!(LockError::NotHeld.is_usage());
        assert!(LockError::AlreadyHeld.source().is_none());
        assert!(LockError::NotHeld.source().is_none());
    }

    #[test]
    fn database_errors_keep_their_source() {
        let err = LockError::Acquire(sqlx::Error::PoolClosed);
        assert!(!err.is_usage());
        assert!(err.source().is_some());
    }
}
