//! The head/site correlation key.
//!
//! A tester runs several parts in parallel, one per (head, site) pair.  Part
//! and result records carry both numbers; renderers that group results by
//! part key their state on the pair.

use std::fmt;

/// A test head number together with a site number on that head.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadSite {
    pub head: u8,
    pub site: u8,
}

impl HeadSite {
    #[inline]
    pub fn new(head: u8, site: u8) -> Self {
        Self { head, site }
    }
}

impl fmt::Display for HeadSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.head, self.site)
    }
}
