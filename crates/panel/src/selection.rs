use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Per-session set of selected area names.
///
/// Serializes as a plain array so it can travel inside every update
/// request and response.
///
/// Ordering contract:
/// - Iteration yields names in ascending lexical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    names: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Inserts `name` into the set.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Removes `name` from the set.
    ///
    /// Returns `true` if the set changed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Flips membership of `name`.
    ///
    /// Returns `true` if `name` is a member afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Interaction signals of one update cycle, as reported by the UI runtime.
///
/// `reset` is true only when the reset control fired this cycle; a click
/// payload is present only when that chart fired this cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleSignals {
    #[serde(default)]
    pub reset: bool,
    /// Category label of the clicked bar.
    #[serde(default)]
    pub bar_click: Option<String>,
    /// Location name of the clicked map region.
    #[serde(default)]
    pub map_click: Option<String>,
}

/// Applies one cycle's signals to the previous selection.
///
/// Order is the contract: reset empties the set before any click is
/// processed, then the bar toggle applies, then the map toggle applies to
/// the already-mutated set. Empty or missing click labels toggle nothing.
pub fn reconcile(previous: &SelectionSet, signals: &CycleSignals) -> SelectionSet {
    let mut next = if signals.reset {
        SelectionSet::new()
    } else {
        previous.clone()
    };

    for clicked in [&signals.bar_click, &signals.map_click] {
        if let Some(name) = clicked.as_deref() {
            if !name.is_empty() {
                next.toggle(name);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::{CycleSignals, SelectionSet, reconcile};

    fn selected(names: &[&str]) -> SelectionSet {
        let mut s = SelectionSet::new();
        for n in names {
            s.insert(*n);
        }
        s
    }

    #[test]
    fn insert_remove_contains_and_len() {
        let mut s = SelectionSet::new();
        assert!(s.is_empty());
        assert!(!s.contains("AREA A"));

        assert!(s.insert("AREA A"));
        assert!(s.contains("AREA A"));
        assert_eq!(s.len(), 1);
        assert!(!s.insert("AREA A"));
        assert_eq!(s.len(), 1);

        assert!(s.remove("AREA A"));
        assert!(!s.contains("AREA A"));
        assert_eq!(s.len(), 0);
        assert!(!s.remove("AREA A"));
    }

    #[test]
    fn iter_is_sorted() {
        let s = selected(&["CACHOEIRA SECA", "APYTEREWA", "TRINCHEIRA BACAJA"]);
        let got: Vec<&str> = s.iter().collect();
        assert_eq!(got, vec!["APYTEREWA", "CACHOEIRA SECA", "TRINCHEIRA BACAJA"]);
    }

    #[test]
    fn double_click_round_trips() {
        let start = selected(&["AREA B"]);
        let click = CycleSignals {
            bar_click: Some("AREA A".to_string()),
            ..CycleSignals::default()
        };
        let after_first = reconcile(&start, &click);
        assert!(after_first.contains("AREA A"));
        let after_second = reconcile(&after_first, &click);
        assert_eq!(after_second, start);
    }

    #[test]
    fn reset_wins_over_prior_state() {
        let start = selected(&["AREA A", "AREA B"]);
        let signals = CycleSignals {
            reset: true,
            bar_click: Some("AREA C".to_string()),
            map_click: None,
        };
        let next = reconcile(&start, &signals);
        let got: Vec<&str> = next.iter().collect();
        assert_eq!(got, vec!["AREA C"]);
    }

    #[test]
    fn bar_applies_before_map_in_one_cycle() {
        let signals = CycleSignals {
            reset: false,
            bar_click: Some("AREA A".to_string()),
            map_click: Some("AREA A".to_string()),
        };
        // Same name from both sources: bar selects, map deselects again.
        let next = reconcile(&SelectionSet::new(), &signals);
        assert!(next.is_empty());
    }

    #[test]
    fn toggle_sequence_across_cycles() {
        let s0 = SelectionSet::new();
        let s1 = reconcile(
            &s0,
            &CycleSignals {
                bar_click: Some("AREA A".to_string()),
                ..CycleSignals::default()
            },
        );
        assert_eq!(s1, selected(&["AREA A"]));

        let s2 = reconcile(
            &s1,
            &CycleSignals {
                map_click: Some("AREA B".to_string()),
                ..CycleSignals::default()
            },
        );
        assert_eq!(s2, selected(&["AREA A", "AREA B"]));

        let s3 = reconcile(
            &s2,
            &CycleSignals {
                bar_click: Some("AREA A".to_string()),
                ..CycleSignals::default()
            },
        );
        assert_eq!(s3, selected(&["AREA B"]));
    }

    #[test]
    fn empty_labels_toggle_nothing() {
        let start = selected(&["AREA A"]);
        let signals = CycleSignals {
            reset: false,
            bar_click: Some(String::new()),
            map_click: None,
        };
        assert_eq!(reconcile(&start, &signals), start);
    }
}
