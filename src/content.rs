//! Fixed journal content
//!
//! Everything displayed on the journal page is a compile-time constant.
//! The view iterates over these tables; none of the rendering logic is
//! specialized to a particular entry count.

/// Identifier of a note in [`HIDDEN_NOTES`]
pub type NoteId = &'static str;

/// One expandable entry in the "Things I Never Said" panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: &'static str,
    pub body: &'static str,
}

/// One entry on the "How It Started" timeline
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// One card in the "What I Learned" row
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    pub title: &'static str,
    pub body: &'static str,
}

/// Window and nav-pill title
pub const APP_TITLE: &str = "Quiet Memory";

/// Lock page copy
pub const LOCK_TITLE: &str = "Private Journal";
pub const LOCK_SUBTITLE: &str = "This page is for my heart only.";
pub const LOCK_BUTTON: &str = "Enter";

/// Intro section copy
pub const INTRO_TITLE: &str = "A Quiet Memory";
pub const INTRO_SUBTITLE: &str =
    "A collection of thoughts, moments, and things I never said out loud.";
pub const INTRO_HINT: &str = "Scroll slowly.";

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "The Beginning",
        title: "When we first talked...",
        body: "It wasn't a grand moment. Just a simple conversation that felt \
               like it had been waiting to happen for years. I remember \
               thinking, \"Oh, there you are.\"",
    },
    TimelineEntry {
        period: "The Middle",
        title: "What I admired...",
        body: "The way you looked at the world. You found beauty in things \
               most people walked right past. It made me want to slow down \
               too.",
    },
];

/// "Pieces of Me" handwritten lists
pub const LIKES: &[&str] = &[
    "roses/flowers",
    "Armaan Malik",
    "Long drives",
    "Chanel candles",
    "Spending time with people",
    "Cats (Simba)",
];

pub const SIDE_LIST: &[&str] = &[
    "diy cute stuff",
    "Cold coffee",
    "Food",
    "Taking pictures",
    "Skincare",
];

pub const BOOKS: &[&str] = &[
    "Atomic habits",
    "Mindset",
    "Power",
    "Surrounded by idiots",
];
pub const BOOKS_FOOTER: &str = "top fav books ♡";

pub const POLAROID_TITLE: &str = "Simba";
pub const POLAROID_DATE: &str = "Always watching";

pub const SECRETS_HINT: &str = "Click to read...";

pub const HIDDEN_NOTES: &[Note] = &[
    Note {
        id: "note-1",
        title: "I'm sorry regarding...",
        body: "I realize now that I should have been more patient when you \
               were overwhelmed. I let my own anxiety speak louder than my \
               support for you.",
    },
    Note {
        id: "note-2",
        title: "I wish I had told you...",
        body: "That even on the quiet days, just sitting next to you was \
               enough. I didn't need grand gestures, I just needed your \
               presence.",
    },
    Note {
        id: "note-3",
        title: "Thank you for...",
        body: "Teaching me that it's okay to be vulnerable. You showed me \
               parts of myself I was scared to look at.",
    },
];

pub const LESSONS: &[Lesson] = &[
    Lesson {
        title: "Patience",
        body: "Good things take time. Healing takes even longer. And that is \
               okay.",
    },
    Lesson {
        title: "Space",
        body: "Respecting distance is a form of love. Holding on too tight \
               only pushes away.",
    },
    Lesson {
        title: "Self",
        body: "I found parts of myself I had lost. I'm painting again. I'm \
               reading again.",
    },
];

pub const PROMISES: &[&str] = &[
    "I'd listen better.",
    "I'd be calmer.",
    "No pressure.",
    "Just honesty.",
];
pub const PROMISES_FOOTER: &str = "We grow, we learn, we move forward.";

pub const LETTER_PARAGRAPHS: &[&str] = &[
    "To You,",
    "If you ever read this someday... I hope you're happy. Truly happy. \
     That matters more than anything we went through.",
    "I care. But I also respect your space. And I'm learning to be okay on \
     my own.",
];
pub const LETTER_SIGNOFF: &str = "- Me";
pub const LETTER_FOOTER: &str = "Sent to the universe.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_ids_are_unique() {
        for (i, a) in HIDDEN_NOTES.iter().enumerate() {
            for b in &HIDDEN_NOTES[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate note id {:?}", a.id);
            }
        }
    }

    #[test]
    fn notes_have_content() {
        for note in HIDDEN_NOTES {
            assert!(!note.id.is_empty());
            assert!(!note.title.is_empty());
            assert!(!note.body.is_empty());
        }
    }
}
