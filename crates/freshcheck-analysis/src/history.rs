//! Bounded log of recent analysis results.

use std::collections::VecDeque;

use crate::models::AnalysisResult;

/// Maximum number of results kept in the history.
pub const HISTORY_CAPACITY: usize = 5;

/// Most-recent-first log of completed analyses.
///
/// Never holds more than [`HISTORY_CAPACITY`] entries; recording a result
/// into a full log evicts the oldest one.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<AnalysisResult>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Empty log with room for [`HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Put a result at the front. Returns the evicted entry, if any.
    pub fn record(&mut self, result: AnalysisResult) -> Option<AnalysisResult> {
        self.entries.push_front(result);
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Most recent result.
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.front()
    }

    /// Entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&AnalysisResult> {
        self.entries.get(index)
    }

    /// Iterate from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
    }

    /// Number of entries, at most [`HISTORY_CAPACITY`].
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of the entries, most recent first.
    pub fn to_vec(&self) -> Vec<AnalysisResult> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ResponseParser;
    use freshcheck_images::EncodedImage;
    use freshcheck_providers::ModelReply;

    fn result(food: &str) -> AnalysisResult {
        let reply = ModelReply::from_text(format!(
            r#"{{"foodType":"{}","spoilageLevel":"Fresh","confidence":80,"visualIndicators":[],"recommendation":"ok","shelfLife":"3 days","safeToConsume":true}}"#,
            food
        ));
        let image = EncodedImage {
            media_type: "image/png".to_string(),
            data: "AQID".to_string(),
        };
        ResponseParser::parse(&reply, &image).unwrap()
    }

    #[test]
    fn test_record_most_recent_first() {
        let mut log = HistoryLog::new();
        log.record(result("apple"));
        log.record(result("pear"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().food_type(), "pear");
        assert_eq!(log.get(1).unwrap().food_type(), "apple");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = HistoryLog::new();
        for food in ["a", "b", "c", "d", "e"] {
            assert!(log.record(result(food)).is_none());
        }

        let evicted = log.record(result("f")).unwrap();
        assert_eq!(evicted.food_type(), "a");
        assert_eq!(log.len(), HISTORY_CAPACITY);

        let order: Vec<_> = log.iter().map(|r| r.food_type().to_string()).collect();
        assert_eq!(order, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_default_matches_new() {
        let log = HistoryLog::default();
        assert!(log.is_empty());
        assert!(log.entries.capacity() >= HISTORY_CAPACITY);
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.record(result("apple"));
        log.clear();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }
}
