//! ID generation and clock utilities.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;

// ============================================================================
// ID Generation
// ============================================================================

/// Length of generated book IDs.
pub const ID_LENGTH: usize = 16;

/// Generate a book ID that does not collide with any existing one.
///
/// Draws `ID_LENGTH` random alphanumeric characters and redraws while the
/// `exists` closure reports a collision.
pub fn generate_id<F>(exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut rng = rand::rng();
    loop {
        let id: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect();
        if !exists(&id) {
            return id;
        }
        tracing::debug!(%id, "Generated ID collided; retrying");
    }
}

// ============================================================================
// Clock
// ============================================================================

/// Source of timestamps for `insertedAt`/`updatedAt`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
