//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every cross-reference between catalogue entities, graph vertices and graph
//! edges goes through one of these ids.  They are dense (assigned in insertion
//! order from 0), so they index `Vec`s directly and survive a snapshot
//! round-trip unchanged.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

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
    };
}

typed_id! {
    /// Index of a stop in the catalogue.
    pub struct StopId(u32);
}

typed_id! {
    /// Index of a bus route in the catalogue.
    pub struct BusId(u32);
}

typed_id! {
    /// Index of a routing-graph vertex.
    pub struct VertexId(u32);
}

typed_id! {
    /// Index of a directed routing-graph edge.
    pub struct EdgeId(u32);
}

impl StopId {
    /// Vertex a passenger occupies on arriving at this stop.
    #[inline]
    pub fn arrival_vertex(self) -> VertexId {
        VertexId(self.0 * 2)
    }

    /// Vertex a passenger occupies once boarding delay has been paid.
    #[inline]
    pub fn departure_vertex(self) -> VertexId {
        VertexId(self.0 * 2 + 1)
    }
}
