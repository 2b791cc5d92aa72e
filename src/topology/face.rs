use super::edge::EdgeId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face in an [`EditMesh`](super::EditMesh).
    pub struct FaceId;
}

/// Data associated with a polygon face.
///
/// `vertices` is the boundary loop; `edges[i]` joins `vertices[i]` and
/// `vertices[(i + 1) % n]`.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Boundary vertices in winding order.
    pub vertices: Vec<VertexId>,
    /// Boundary edges, parallel to `vertices`.
    pub edges: Vec<EdgeId>,
    /// Index into the owning object's material slots.
    pub material_index: u16,
}
