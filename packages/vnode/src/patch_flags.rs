//! # Patch Flags
//!
//! Compile-time hints telling the diff which parts of a vnode can change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Diff-optimization hints attached to a vnode
///
/// Positive values are bit flags and can be combined. The two negative
/// values are special markers and are never combined with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchFlags(i32);

impl PatchFlags {
    pub const NONE: PatchFlags = PatchFlags(0);
    /// Dynamic text content
    pub const TEXT: PatchFlags = PatchFlags(1);
    /// Dynamic class binding
    pub const CLASS: PatchFlags = PatchFlags(1 << 1);
    /// Dynamic style binding
    pub const STYLE: PatchFlags = PatchFlags(1 << 2);
    /// Dynamic non-class/style props, listed in `dynamic_props`
    pub const PROPS: PatchFlags = PatchFlags(1 << 3);
    /// Props with dynamic keys, always diffed in full
    pub const FULL_PROPS: PatchFlags = PatchFlags(1 << 4);
    pub const HYDRATE_EVENTS: PatchFlags = PatchFlags(1 << 5);
    /// Fragment whose children order never changes
    pub const STABLE_FRAGMENT: PatchFlags = PatchFlags(1 << 6);
    pub const KEYED_FRAGMENT: PatchFlags = PatchFlags(1 << 7);
    pub const UNKEYED_FRAGMENT: PatchFlags = PatchFlags(1 << 8);
    /// Needs patching for non-prop reasons (refs, directives)
    pub const NEED_PATCH: PatchFlags = PatchFlags(1 << 9);
    pub const DYNAMIC_SLOTS: PatchFlags = PatchFlags(1 << 10);
    /// Static, hoisted node; never diffed
    pub const HOISTED: PatchFlags = PatchFlags(-1);
    /// Leave optimized mode and do a full diff
    pub const BAIL: PatchFlags = PatchFlags(-2);

    pub const fn from_bits(bits: i32) -> Self {
        PatchFlags(bits)
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    /// True when every bit of `other` is set in `self`
    ///
    /// Special markers only contain themselves.
    pub const fn contains(self, other: PatchFlags) -> bool {
        if self.0 < 0 || other.0 < 0 {
            return self.0 == other.0;
        }
        self.0 & other.0 == other.0
    }

    /// Whether a block should track the node as a dynamic child
    pub const fn is_dynamic(self) -> bool {
        self.0 > 0
    }

    pub const fn is_hoisted(self) -> bool {
        self.0 == Self::HOISTED.0
    }

    pub const fn is_bail(self) -> bool {
        self.0 == Self::BAIL.0
    }

    const NAMES: [(PatchFlags, &'static str); 11] = [
        (Self::TEXT, "TEXT"),
        (Self::CLASS, "CLASS"),
        (Self::STYLE, "STYLE"),
        (Self::PROPS, "PROPS"),
        (Self::FULL_PROPS, "FULL_PROPS"),
        (Self::HYDRATE_EVENTS, "HYDRATE_EVENTS"),
        (Self::STABLE_FRAGMENT, "STABLE_FRAGMENT"),
        (Self::KEYED_FRAGMENT, "KEYED_FRAGMENT"),
        (Self::UNKEYED_FRAGMENT, "UNKEYED_FRAGMENT"),
        (Self::NEED_PATCH, "NEED_PATCH"),
        (Self::DYNAMIC_SLOTS, "DYNAMIC_SLOTS"),
    ];
}

impl BitOr for PatchFlags {
    type Output = PatchFlags;

    fn bitor(self, rhs: PatchFlags) -> PatchFlags {
        // Markers absorb: combining with HOISTED/BAIL keeps the marker
        if self.0 < 0 {
            return self;
        }
        if rhs.0 < 0 {
            return rhs;
        }
        PatchFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PatchFlags {
    fn bitor_assign(&mut self, rhs: PatchFlags) {
        *self = *self | rhs;
    }
}

impl fmt::Display for PatchFlags {
    /// Renders the flag names the way compiled templates annotate them,
    /// e.g. `TEXT, CLASS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::HOISTED => return write!(f, "HOISTED"),
            Self::BAIL => return write!(f, "BAIL"),
            Self::NONE => return write!(f, "NONE"),
            _ => {}
        }
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", names.join(", "))
    }
}
