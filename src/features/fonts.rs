//! Journal typeface loading
//!
//! The journal page uses two handwriting faces fetched over HTTPS the
//! first time the journal is unlocked. [`FontLease`] owns the
//! document-level acquisition bookkeeping: the fetch is kicked off at
//! most once per lease, and the lease is released exactly once when
//! the owning state is torn down, on every exit path.
//!
//! A failed fetch is non-fatal: the page renders immediately with the
//! system fallback and the failure is only logged.

/// A remote typeface the journal page references by family name
#[derive(Debug, Clone, Copy)]
pub struct FontFace {
    /// Family name as embedded in the font file
    pub family: &'static str,
    /// Fixed download URL
    pub url: &'static str,
}

/// The two journal faces
pub const JOURNAL_FACES: &[FontFace] = &[
    FontFace {
        family: "Patrick Hand",
        url: "https://fonts.gstatic.com/s/patrickhand/v23/LDI1apSQOAYtSuYWp8ZhfYe8UcLLubg58xGL.ttf",
    },
    FontFace {
        family: "Caveat",
        url: "https://fonts.gstatic.com/s/caveat/v18/WnznHAc5bAfYB2QRah7pcpNvOx-pjfJ9SIKjYBxPigs.ttf",
    },
];

/// Scoped acquisition guard for the journal typefaces
///
/// `acquire` reports whether the caller should start the fetch; it
/// answers `true` exactly once for the lifetime of the lease, so
/// repeated unlock attempts or view remounts never duplicate the
/// document-level reference. The lease releases itself on drop.
#[derive(Debug, Default)]
pub struct FontLease {
    acquired: bool,
    released: bool,
}

impl FontLease {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the lease; `true` means the caller owns the fetch
    pub fn acquire(&mut self) -> bool {
        if self.acquired {
            return false;
        }
        self.acquired = true;
        tracing::debug!("journal typeface lease acquired");
        true
    }

    /// Whether the lease has been claimed
    pub fn is_acquired(&self) -> bool {
        self.acquired
    }

    /// Release the lease; idempotent
    pub fn release(&mut self) {
        if self.acquired && !self.released {
            self.released = true;
            tracing::debug!("journal typeface lease released");
        }
    }
}

impl Drop for FontLease {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_succeeds_exactly_once() {
        let mut lease = FontLease::new();
        assert!(lease.acquire(), "first acquire owns the fetch");
        assert!(!lease.acquire(), "second acquire must not refetch");
        assert!(!lease.acquire(), "nor any later one");
        assert!(lease.is_acquired());
    }

    #[test]
    fn release_is_idempotent() {
        let mut lease = FontLease::new();
        lease.acquire();
        lease.release();
        lease.release();
        assert!(lease.is_acquired());
    }

    #[test]
    fn unacquired_lease_drops_cleanly() {
        let lease = FontLease::new();
        drop(lease);
    }

    #[test]
    fn faces_are_well_formed() {
        assert!(!JOURNAL_FACES.is_empty());
        for face in JOURNAL_FACES {
            assert!(!face.family.is_empty());
            assert!(face.url.starts_with("https://"));
        }
    }
}
