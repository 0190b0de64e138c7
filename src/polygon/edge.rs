use crate::geometry::Shape;

slotmap::new_key_type! {
    /// Unique identifier for an edge in a polygon's edge arena.
    pub struct EdgeId;
}

/// One edge of a polygon boundary ring.
///
/// `prev` and `next` are navigation links into the owning arena, not
/// owning references; each face's edges form a cyclic ring.
#[derive(Debug, Clone)]
pub struct Edge {
    /// The geometric shape of the edge.
    pub shape: Shape,
    pub(crate) prev: EdgeId,
    pub(crate) next: EdgeId,
}

impl Edge {
    /// Id of the preceding edge in the boundary ring.
    #[must_use]
    pub fn prev(&self) -> EdgeId {
        self.prev
    }

    /// Id of the following edge in the boundary ring.
    #[must_use]
    pub fn next(&self) -> EdgeId {
        self.next
    }
}
