//! Vertex-Typen des Kurvenmodells: Lage, Eintritts-/Austritts-Steuerpunkt, Kopplung.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Seite eines Steuerpunkts relativ zum Vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlSide {
    /// Steuerpunkt, über den die Kurve in den Vertex einläuft
    Entry,
    /// Steuerpunkt, über den die Kurve den Vertex verlässt
    Exit,
}

impl ControlSide {
    /// Beide Seiten in Speicher-Reihenfolge (Entry = 0, Exit = 1).
    pub const BOTH: [ControlSide; 2] = [ControlSide::Entry, ControlSide::Exit];

    /// Index in zweistelligen Speicher-Arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ControlSide::Entry => 0,
            ControlSide::Exit => 1,
        }
    }

    /// Gegenüberliegende Seite.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            ControlSide::Entry => ControlSide::Exit,
            ControlSide::Exit => ControlSide::Entry,
        }
    }
}

/// Ein Kurven-Vertex mit optionalen Steuerpunkten.
///
/// `dependent = true` bedeutet: die beiden Steuerpunkte sind durch eine
/// Stetigkeitsbedingung gekoppelt, das Modell berechnet den einen aus dem anderen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Lage des Vertex
    pub location: Vec2,
    /// Eintritts-Steuerpunkt (absolut)
    pub entry: Option<Vec2>,
    /// Austritts-Steuerpunkt (absolut)
    pub exit: Option<Vec2>,
    /// Steuerpunkte gekoppelt
    pub dependent: bool,
}

impl Vertex {
    /// Vertex ohne Steuerpunkte.
    pub fn new(location: Vec2) -> Self {
        Self {
            location,
            entry: None,
            exit: None,
            dependent: false,
        }
    }

    /// Steuerpunkt der angegebenen Seite.
    #[inline]
    pub fn control(&self, side: ControlSide) -> Option<Vec2> {
        match side {
            ControlSide::Entry => self.entry,
            ControlSide::Exit => self.exit,
        }
    }

    /// Setzt den Steuerpunkt der angegebenen Seite.
    #[inline]
    pub fn set_control(&mut self, side: ControlSide, control: Option<Vec2>) {
        match side {
            ControlSide::Entry => self.entry = control,
            ControlSide::Exit => self.exit = control,
        }
    }

    /// Verschiebt Vertex samt Steuerpunkten; relative Handle-Offsets bleiben erhalten.
    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            location: self.location + delta,
            entry: self.entry.map(|c| c + delta),
            exit: self.exit.map(|c| c + delta),
            dependent: self.dependent,
        }
    }

    /// True wenn alle Koordinaten endlich sind (kein NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.location.is_finite()
            && self.entry.is_none_or(|c| c.is_finite())
            && self.exit.is_none_or(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_index_and_opposite() {
        assert_eq!(ControlSide::Entry.index(), 0);
        assert_eq!(ControlSide::Exit.index(), 1);
        assert_eq!(ControlSide::Entry.opposite(), ControlSide::Exit);
        assert_eq!(ControlSide::Exit.opposite(), ControlSide::Entry);
    }

    #[test]
    fn test_translate_keeps_handle_offsets() {
        let vx = Vertex {
            location: Vec2::new(300.0, 300.0),
            entry: Some(Vec2::new(200.0, 300.0)),
            exit: None,
            dependent: false,
        };
        let moved = vx.translate(Vec2::new(10.0, -10.0));
        assert_eq!(moved.location, Vec2::new(310.0, 290.0));
        assert_eq!(moved.entry, Some(Vec2::new(210.0, 290.0)));
        assert_eq!(moved.exit, None);
        assert_eq!(
            moved.entry.map(|c| c - moved.location),
            vx.entry.map(|c| c - vx.location)
        );
    }

    #[test]
    fn test_non_finite_vertex_detected() {
        let mut vx = Vertex::new(Vec2::new(1.0, 2.0));
        assert!(vx.is_finite());
        vx.exit = Some(Vec2::new(f32::NAN, 0.0));
        assert!(!vx.is_finite());
    }
}
