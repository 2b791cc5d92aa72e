use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in an [`EditMesh`](super::EditMesh).
    pub struct EdgeId;
}

/// Data associated with a mesh edge.
///
/// An edge joins two vertices and records every face whose boundary runs
/// along it. The mesh keeps `link_faces` current as faces come and go.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// First vertex of the edge.
    pub start: VertexId,
    /// Second vertex of the edge.
    pub end: VertexId,
    /// Faces bordering this edge, in the order they were attached.
    pub link_faces: Vec<FaceId>,
}

impl EdgeData {
    /// Creates an edge between two vertices with no faces attached.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            link_faces: Vec::new(),
        }
    }

    /// Returns `true` if exactly two faces border this edge.
    #[must_use]
    pub fn is_interior(&self) -> bool {
        self.link_faces.len() == 2
    }

    /// Returns `true` if no face borders this edge.
    #[must_use]
    pub fn is_loose(&self) -> bool {
        self.link_faces.is_empty()
    }
}
