//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with the events schema applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic titles and timestamps derived from the test name
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.title("standup");
//!     let start = builder.time(9);
//! }
//! ```
//!
//! Container-backed tests need a running Docker daemon.

use chrono::{DateTime, Duration, TimeZone, Utc};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Each test gets its own seed so data from concurrently running tests does
/// not collide, while reruns of the same test see identical values.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_event");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique event title
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.title("standup"), "test-7-standup");
    /// ```
    pub fn title(&self, suffix: &str) -> String {
        format!("test-{}-{}", self.seed, suffix)
    }

    /// A whole-second UTC instant `hours` after this builder's base time.
    ///
    /// The base is a seed-dependent day in 2030, so instants from different
    /// builders rarely coincide.
    pub fn time(&self, hours: i64) -> DateTime<Utc> {
        let base = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        base + Duration::days((self.seed % 3650) as i64) + Duration::hours(hours)
    }
}

/// Test assertion helpers
pub mod assertions {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Assert that two UUIDs are equal with a nice error message
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Assert that timestamps never decrease
    pub fn assert_ascending(times: &[DateTime<Utc>], context: &str) {
        for pair in times.windows(2) {
            assert!(
                pair[0] <= pair[1],
                "{}: {} comes before {}",
                context,
                pair[0],
                pair[1]
            );
        }
    }
}
