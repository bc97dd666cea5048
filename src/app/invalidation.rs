//! Bestimmt, welche Segmente nach einem Edit neu berechnet werden müssen.
//!
//! Reine Funktionen ohne Zustand: Segment `i` liegt zwischen Knot `i` und
//! Knot `i + 1`. Eine Änderung an der Eintrittsseite von Knot `k` betrifft
//! Segment `k - 1`, an der Austrittsseite Segment `k`.

use crate::core::ControlSide;

/// Welche angrenzenden Segmente eines Knots sich geändert haben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedSides {
    /// Segment vor dem Knot betroffen
    pub entry: bool,
    /// Segment nach dem Knot betroffen
    pub exit: bool,
}

impl ChangedSides {
    /// Beide Seiten betroffen (Vertex-Verschiebung).
    pub const BOTH: Self = Self {
        entry: true,
        exit: true,
    };

    /// Seiten nach Edit eines einzelnen Steuerpunkts.
    ///
    /// Bei gekoppelten Steuerpunkten ändert sich immer auch die Gegenseite.
    pub fn for_control(side: ControlSide, dependent: bool) -> Self {
        Self {
            entry: side == ControlSide::Entry || dependent,
            exit: side == ControlSide::Exit || dependent,
        }
    }

    /// True wenn die angegebene Seite betroffen ist.
    pub fn includes(&self, side: ControlSide) -> bool {
        match side {
            ControlSide::Entry => self.entry,
            ControlSide::Exit => self.exit,
        }
    }
}

/// Inklusiver Segmentbereich `from..=to`, nie leer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRange {
    pub from: usize,
    pub to: usize,
}

impl SegmentRange {
    /// Alle Segmente einer Kurve mit `segment_count` Segmenten; `None` ohne Segmente.
    pub fn full(segment_count: usize) -> Option<Self> {
        segment_count.checked_sub(1).map(|to| Self { from: 0, to })
    }

    /// Segment-Indizes des Bereichs.
    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.from..=self.to
    }
}

/// Berechnet den betroffenen Segmentbereich für einen Edit an Knot `knot`.
///
/// `from = knot - 1` bei geänderter Eintrittsseite, sonst `knot`;
/// `to = knot` bei geänderter Austrittsseite, sonst `knot - 1`.
/// Das Ergebnis wird auf `[0, segment_count - 1]` geklemmt. Leere oder
/// invertierte Bereiche (z.B. Eintrittsseite von Knot 0) ergeben `None`.
pub fn resolve(knot: usize, changed: ChangedSides, segment_count: usize) -> Option<SegmentRange> {
    let last = segment_count.checked_sub(1)? as i64;
    let k = knot as i64;
    let from = if changed.entry { k - 1 } else { k };
    let to = if changed.exit { k } else { k - 1 };

    let from = from.max(0);
    let to = to.min(last);
    if from > to {
        return None;
    }
    Some(SegmentRange {
        from: from as usize,
        to: to as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_KNOTS: usize = 4;

    #[test]
    fn test_vertex_move_in_the_middle_covers_both_neighbors() {
        assert_eq!(
            resolve(2, ChangedSides::BOTH, FIVE_KNOTS),
            Some(SegmentRange { from: 1, to: 2 })
        );
    }

    #[test]
    fn test_exit_only_at_first_knot() {
        let changed = ChangedSides::for_control(ControlSide::Exit, false);
        assert_eq!(
            resolve(0, changed, FIVE_KNOTS),
            Some(SegmentRange { from: 0, to: 0 })
        );
    }

    #[test]
    fn test_entry_only_at_last_knot() {
        let changed = ChangedSides::for_control(ControlSide::Entry, false);
        assert_eq!(
            resolve(4, changed, FIVE_KNOTS),
            Some(SegmentRange { from: 3, to: 3 })
        );
    }

    #[test]
    fn test_missing_side_at_endpoints_yields_nothing() {
        let entry = ChangedSides::for_control(ControlSide::Entry, false);
        let exit = ChangedSides::for_control(ControlSide::Exit, false);
        assert_eq!(resolve(0, entry, FIVE_KNOTS), None);
        assert_eq!(resolve(4, exit, FIVE_KNOTS), None);
    }

    #[test]
    fn test_vertex_move_clamped_at_boundaries() {
        assert_eq!(
            resolve(0, ChangedSides::BOTH, FIVE_KNOTS),
            Some(SegmentRange { from: 0, to: 0 })
        );
        assert_eq!(
            resolve(4, ChangedSides::BOTH, FIVE_KNOTS),
            Some(SegmentRange { from: 3, to: 3 })
        );
    }

    #[test]
    fn test_dependent_forces_both_sides() {
        let changed = ChangedSides::for_control(ControlSide::Entry, true);
        assert_eq!(changed, ChangedSides::BOTH);
        assert_eq!(
            resolve(2, changed, FIVE_KNOTS),
            Some(SegmentRange { from: 1, to: 2 })
        );
    }

    #[test]
    fn test_no_segments_means_nothing_to_redraw() {
        assert_eq!(resolve(0, ChangedSides::BOTH, 0), None);
        assert_eq!(SegmentRange::full(0), None);
        assert_eq!(SegmentRange::full(3), Some(SegmentRange { from: 0, to: 2 }));
    }

    #[test]
    fn test_trailing_knot_beyond_segments_is_clamped() {
        // Letzter Knot einer Kurve mit 6 Knots; Knot 7 existiert nicht
        assert_eq!(
            resolve(5, ChangedSides::BOTH, 5),
            Some(SegmentRange { from: 4, to: 4 })
        );
        assert_eq!(resolve(7, ChangedSides::BOTH, 5), None);
    }

    #[test]
    fn test_range_iterates_inclusive() {
        let range = SegmentRange { from: 1, to: 3 };
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
