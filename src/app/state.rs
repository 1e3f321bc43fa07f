// src/app/state.rs
//! Application state definitions

use iced::Size;

use crate::content::NoteId;
use crate::features::{FontLease, Settings};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, typeface lease, window tracking)
    pub core: CoreState,
    /// Journal view state (gate, playback flag, notes panel)
    pub journal: JournalState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    /// Scoped acquisition of the journal typefaces
    pub fonts: FontLease,
    /// Last reported window size, used for the layout breakpoint
    pub window_size: Size,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            fonts: FontLease::new(),
            window_size: Size::new(1180.0, 780.0),
        }
    }
}

/// Journal view state
///
/// The three variables are independent; each is mutated by exactly one
/// message handler and read only by the view.
#[derive(Debug, Default)]
pub struct JournalState {
    pub gate: Gate,
    pub playback: PlaybackFlag,
    pub notes: NotesPanel,
}

/// Lock-screen gate
///
/// `Locked` is the initial state, `Unlocked` the terminal one. There
/// is no way back: re-locking is a deliberate non-feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    #[default]
    Locked,
    Unlocked,
}

impl Gate {
    /// Take the single `Locked -> Unlocked` transition
    pub fn unlock(&mut self) {
        *self = Gate::Unlocked;
    }

    pub fn is_unlocked(self) -> bool {
        matches!(self, Gate::Unlocked)
    }
}

/// Display-only music flag behind the nav toggle
///
/// No audio engine is bound to this; the toggle always flips, never
/// clamps, and its only observable effect is the nav icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackFlag {
    playing: bool,
}

impl PlaybackFlag {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn is_playing(self) -> bool {
        self.playing
    }
}

/// "Things I Never Said" panel state
///
/// At most one note is expanded at any time. Selecting the open note
/// collapses it; selecting another replaces it. The logic holds for a
/// catalog of any length, including zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotesPanel {
    expanded: Option<NoteId>,
}

impl NotesPanel {
    /// Toggle-with-exclusivity selection
    pub fn select(&mut self, id: NoteId) {
        if self.expanded == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    /// Close the open note, if any
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn expanded(&self) -> Option<NoteId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: NoteId) -> bool {
        self.expanded == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HIDDEN_NOTES;

    mod property_gate_one_way {
        use super::*;

        #[test]
        fn starts_locked() {
            assert!(!Gate::default().is_unlocked());
        }

        #[test]
        fn unlock_is_terminal() {
            let mut gate = Gate::default();
            gate.unlock();
            assert!(gate.is_unlocked());

            // No sequence of further unlocks changes anything
            for _ in 0..10 {
                gate.unlock();
                assert!(gate.is_unlocked(), "gate must never return to Locked");
            }
        }
    }

    mod property_toggle_parity {
        use super::*;

        #[test]
        fn starts_muted() {
            assert!(!PlaybackFlag::default().is_playing());
        }

        #[test]
        fn n_flips_from_false_end_true_iff_n_odd() {
            let mut flag = PlaybackFlag::default();
            for n in 1..=20 {
                flag.toggle();
                assert_eq!(
                    flag.is_playing(),
                    n % 2 == 1,
                    "after {} flips the flag must be {}",
                    n,
                    n % 2 == 1
                );
            }
        }
    }

    mod property_notes_exclusion {
        use super::*;

        #[test]
        fn starts_collapsed() {
            assert_eq!(NotesPanel::default().expanded(), None);
        }

        #[test]
        fn at_most_one_note_expanded_under_any_sequence() {
            let mut panel = NotesPanel::default();
            let ids: Vec<_> = HIDDEN_NOTES.iter().map(|n| n.id).collect();

            // Walk an arbitrary-ish selection sequence and check the
            // invariant after every step
            for step in 0..50 {
                panel.select(ids[step % ids.len()]);
                let open: Vec<_> = ids
                    .iter()
                    .copied()
                    .filter(|&id| panel.is_expanded(id))
                    .collect();
                assert!(open.len() <= 1, "more than one note expanded: {:?}", open);
            }
        }

        #[test]
        fn reselecting_collapses() {
            let mut panel = NotesPanel::default();
            panel.select("note-1");
            assert_eq!(panel.expanded(), Some("note-1"));
            panel.select("note-1");
            assert_eq!(panel.expanded(), None, "second select must collapse");
        }

        #[test]
        fn selecting_another_replaces() {
            let mut panel = NotesPanel::default();
            panel.select("note-1");
            panel.select("note-2");
            assert_eq!(
                panel.expanded(),
                Some("note-2"),
                "note-1 must be implicitly closed"
            );
            assert!(!panel.is_expanded("note-1"));
        }

        #[test]
        fn collapse_is_total() {
            let mut panel = NotesPanel::default();
            panel.collapse();
            assert_eq!(panel.expanded(), None);
            panel.select("note-3");
            panel.collapse();
            assert_eq!(panel.expanded(), None);
        }

        #[test]
        fn empty_catalog_is_a_valid_panel() {
            // With no notes there is nothing to select; the panel is
            // simply always collapsed
            let empty: &[crate::content::Note] = &[];
            let panel = NotesPanel::default();
            assert!(empty.iter().all(|n| !panel.is_expanded(n.id)));
            assert_eq!(panel.expanded(), None);
        }
    }
}
