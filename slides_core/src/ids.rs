//! Object and file identifiers.
//!
//! The Slides API lets callers choose object IDs for the objects a request
//! creates, which allows several dependent requests to go into a single
//! batch. IDs are derived from a clock so they do not collide across calls,
//! and both the clock and the generator are injected so tests can pin them.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Produces object IDs and file names for created objects.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh object ID starting with `prefix`.
    ///
    /// Slides requires 5 to 50 characters from `[a-zA-Z0-9_-:]`, starting
    /// with an alphanumeric or underscore.
    fn object_id(&self, prefix: &str) -> String;

    /// Returns a name for an uploaded file, e.g. `gradient_20240101T120000.png`.
    fn file_name(&self, stem: &str, extension: &str) -> String;
}

/// IDs derived from the clock plus a per-generator sequence number.
///
/// The sequence keeps IDs unique when several are minted within the same
/// clock tick.
pub struct TimestampIds<C: Clock = SystemClock> {
    clock: C,
    sequence: AtomicU64,
}

impl TimestampIds<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimestampIds<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimestampIds<C> {
    pub fn with_clock(clock: C) -> Self {
        TimestampIds {
            clock,
            sequence: AtomicU64::new(0),
        }
    }
}

impl<C: Clock> IdGenerator for TimestampIds<C> {
    fn object_id(&self, prefix: &str) -> String {
        let millis = self.clock.now().timestamp_millis();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        sanitize_object_id(&format!("{}_{}_{}", prefix, millis, seq))
    }

    fn file_name(&self, stem: &str, extension: &str) -> String {
        let stamp = self.clock.now().format("%Y%m%dT%H%M%S");
        format!("{}_{}.{}", stem, stamp, extension)
    }
}

/// Deterministic IDs: `prefix_1`, `prefix_2`, ...
///
/// Intended for tests and dry runs.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn object_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        sanitize_object_id(&format!("{}_{}", prefix, n))
    }

    fn file_name(&self, stem: &str, extension: &str) -> String {
        format!("{}.{}", stem, extension)
    }
}

/// Coerces a candidate into the character set and length Slides accepts.
fn sanitize_object_id(candidate: &str) -> String {
    let mut id: String = candidate
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if id.starts_with(['-', ':']) {
        id.insert(0, '_');
    }
    while id.len() < 5 {
        id.push('_');
    }
    if id.len() > 50 {
        // Keep the tail: it holds the unique part.
        id = format!("_{}", &id[id.len() - 49..]);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed() -> TimestampIds<FixedClock> {
        TimestampIds::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        ))
    }

    #[test]
    fn test_timestamp_ids_are_unique_within_a_tick() {
        let ids = fixed();
        let first = ids.object_id("shape");
        let second = ids.object_id("shape");

        assert!(first.starts_with("shape_1709296200000_"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_timestamp_file_name() {
        assert_eq!(
            fixed().file_name("gradient", "png"),
            "gradient_20240301T123000.png"
        );
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.object_id("table"), "table_1");
        assert_eq!(ids.object_id("table"), "table_2");
        assert_eq!(ids.file_name("gradient", "png"), "gradient.png");
    }

    #[test]
    fn test_sanitize_object_id() {
        assert_eq!(sanitize_object_id("a b"), "a_b__");
        assert_eq!(sanitize_object_id("-abcde"), "_-abcde");
        let long = sanitize_object_id(&"x".repeat(80));
        assert_eq!(long.len(), 50);
        assert!(long.starts_with('_'));
    }
}
