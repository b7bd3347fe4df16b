// Canvas ID Generator - creation-time ids that stay unique within one canvas
// Same shape as a snowflake id: [prefix][millis][sequence], sequence only shown on collision

use chrono::Utc;

/// Issues `{prefix}-{millis}` ids, appending `-{sequence}` when more than one id
/// is issued in the same millisecond. Time never runs backwards for a generator,
/// so an id can never be issued twice.
#[derive(Debug, Default, Clone)]
pub struct CanvasIdGenerator {
    last_millis: i64,
    sequence: u32,
}

impl CanvasIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for `prefix` stamped with the current wall clock.
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.next_id_at(prefix, Utc::now().timestamp_millis())
    }

    pub fn next_id_at(&mut self, prefix: &str, now_millis: i64) -> String {
        let millis = now_millis.max(self.last_millis);

        if millis == self.last_millis && self.sequence > 0 {
            let seq = self.sequence;
            self.sequence += 1;
            format!("{}-{}-{}", prefix, millis, seq)
        } else if millis == self.last_millis {
            self.sequence = 1;
            format!("{}-{}", prefix, millis)
        } else {
            self.last_millis = millis;
            self.sequence = 1;
            format!("{}-{}", prefix, millis)
        }
    }
}
