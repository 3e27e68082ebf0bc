//! Visibility trigger
//!
//! Watches a single sentinel element. Whoever owns the viewport reports
//! intersection entries; the trigger decides whether they amount to "the
//! sentinel came into view".

/// One observation of an element against the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Id of the observed element
    pub target: String,
    pub is_intersecting: bool,
    /// Visible fraction of the element, 0.0 to 1.0
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(target: &str) -> Self {
        Self {
            target: target.to_string(),
            is_intersecting: true,
            intersection_ratio: 1.0,
        }
    }

    pub fn hidden(target: &str) -> Self {
        Self {
            target: target.to_string(),
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VisibilityTrigger {
    target: Option<String>,
}

impl VisibilityTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `target`, replacing any previous target
    pub fn observe(&mut self, target: &str) {
        self.target = Some(target.to_string());
    }

    pub fn disconnect(&mut self) {
        self.target = None;
    }

    pub fn is_connected(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// True when any entry shows the observed target actually in view
    pub fn signal(&self, entries: &[IntersectionEntry]) -> bool {
        let Some(target) = self.target.as_deref() else {
            return false;
        };
        entries.iter().any(|entry| {
            entry.target == target && entry.is_intersecting && entry.intersection_ratio > 0.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_trigger_never_signals() {
        let trigger = VisibilityTrigger::new();
        assert!(!trigger.is_connected());
        assert!(!trigger.signal(&[IntersectionEntry::visible("sentinel")]));
    }

    #[test]
    fn signals_on_visible_target() {
        let mut trigger = VisibilityTrigger::new();
        trigger.observe("sentinel");
        assert!(trigger.signal(&[IntersectionEntry::visible("sentinel")]));
    }

    #[test]
    fn ignores_non_intersecting_entries() {
        let mut trigger = VisibilityTrigger::new();
        trigger.observe("sentinel");
        assert!(!trigger.signal(&[IntersectionEntry::hidden("sentinel")]));
    }

    #[test]
    fn ignores_zero_ratio_even_when_flagged_intersecting() {
        let mut trigger = VisibilityTrigger::new();
        trigger.observe("sentinel");
        let edge = IntersectionEntry {
            target: "sentinel".into(),
            is_intersecting: true,
            intersection_ratio: 0.0,
        };
        assert!(!trigger.signal(&[edge]));
    }

    #[test]
    fn ignores_other_targets() {
        let mut trigger = VisibilityTrigger::new();
        trigger.observe("sentinel");
        assert!(!trigger.signal(&[IntersectionEntry::visible("footer")]));
    }

    #[test]
    fn any_matching_entry_is_enough() {
        let mut trigger = VisibilityTrigger::new();
        trigger.observe("sentinel");
        assert!(trigger.signal(&[
            IntersectionEntry::hidden("sentinel"),
            IntersectionEntry::visible("sentinel"),
        ]));
    }

    #[test]
    fn disconnect_then_observe_rearms() {
        let mut trigger = VisibilityTrigger::new();
        trigger.observe("sentinel");
        trigger.disconnect();
        assert!(!trigger.signal(&[IntersectionEntry::visible("sentinel")]));

        trigger.observe("sentinel");
        assert!(trigger.is_connected());
        assert_eq!(trigger.target(), Some("sentinel"));
        assert!(trigger.signal(&[IntersectionEntry::visible("sentinel")]));
    }
}
