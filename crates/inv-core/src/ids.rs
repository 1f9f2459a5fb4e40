//! Slot identifiers for cities and aliens.
//!
//! Both are plain indices into the world's slot vectors.  A slot is never
//! reused after its city or alien is destroyed, so a stale id simply resolves
//! to `None` instead of aliasing a newer entity.

use std::fmt;

/// Generate a typed slot id around a `u32`.
macro_rules! slot_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

slot_id! {
    /// Slot of a city in the world map, assigned in order of first mention.
    pub struct CityId;
}

slot_id! {
    /// Slot of an alien, assigned in seeding order.
    pub struct AlienId;
}

impl AlienId {
    /// Human-readable name: slot 0 is `alien1`, slot 1 is `alien2`, …
    pub fn name(self) -> String {
        format!("alien{}", self.0 + 1)
    }
}
