pub mod edge;
pub mod face;
pub mod traits;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use traits::MeshTopology;
pub use vertex::{VertexData, VertexId};

use std::collections::{HashMap, HashSet};

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Editable polygon mesh backed by generational arenas.
///
/// Entities reference each other via typed IDs. Edges are shared between
/// the faces that border them and are created on demand by [`add_face`].
///
/// [`add_face`]: EditMesh::add_face
#[derive(Debug, Default, Clone)]
pub struct EditMesh {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
}

/// Order-independent key for the edge between two vertices.
fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl EditMesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, including loose ones.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterates vertex IDs in storage order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys()
    }

    /// Iterates face IDs in storage order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, point: Point3) -> VertexId {
        self.vertices.insert(VertexData::new(point))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edge operations ---

    /// Returns the edge joining two vertices, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing or both are the same.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, TopologyError> {
        self.vertex(a)?;
        self.vertex(b)?;
        if a == b {
            return Err(TopologyError::InvalidTopology(
                "edge endpoints must differ".into(),
            ));
        }
        Ok(self.ensure_edge(a, b))
    }

    /// Returns the edge joining two vertices, if one exists.
    #[must_use]
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_lookup.get(&edge_key(a, b)).copied()
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    fn ensure_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let key = edge_key(a, b);
        if let Some(&id) = self.edge_lookup.get(&key) {
            return id;
        }
        let id = self.edges.insert(EdgeData::new(a, b));
        self.edge_lookup.insert(key, id);
        id
    }

    // --- Face operations ---

    /// Inserts a polygon bounded by `vertices` and returns its ID.
    ///
    /// Boundary edges are shared with existing faces where the same vertex
    /// pair already has an edge. The new face starts at material index 0.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given, a vertex
    /// repeats, or a vertex is not in the mesh. The mesh is unchanged on error.
    pub fn add_face(&mut self, vertices: &[VertexId]) -> Result<FaceId, TopologyError> {
        if vertices.len() < 3 {
            return Err(TopologyError::InvalidTopology(format!(
                "face needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        let mut seen = HashSet::with_capacity(vertices.len());
        for &v in vertices {
            self.vertex(v)?;
            if !seen.insert(v) {
                return Err(TopologyError::InvalidTopology(
                    "face repeats a vertex".into(),
                ));
            }
        }

        let n = vertices.len();
        let edges: Vec<EdgeId> = (0..n)
            .map(|i| self.ensure_edge(vertices[i], vertices[(i + 1) % n]))
            .collect();

        let face = self.faces.insert(FaceData {
            vertices: vertices.to_vec(),
            edges: edges.clone(),
            material_index: 0,
        });
        for edge in edges {
            if let Some(data) = self.edges.get_mut(edge) {
                data.link_faces.push(face);
            }
        }
        Ok(face)
    }

    /// Removes a face and detaches it from its edges.
    ///
    /// Edges left without faces stay in the mesh as loose edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found in the mesh.
    pub fn remove_face(&mut self, id: FaceId) -> Result<FaceData, TopologyError> {
        let data = self
            .faces
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))?;
        for &edge in &data.edges {
            if let Some(edge) = self.edges.get_mut(edge) {
                edge.link_faces.retain(|&f| f != id);
            }
        }
        Ok(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// Rewriting `vertices` or `edges` through this handle does not update
    /// the edges' `link_faces`; [`MeshTopology::ensure_ready`] reports the
    /// resulting inconsistencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }
}

impl MeshTopology for EditMesh {
    type FaceId = FaceId;
    type EdgeId = EdgeId;

    fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys()
    }

    fn edges_of(&self, face: FaceId) -> impl Iterator<Item = EdgeId> + '_ {
        self.faces
            .get(face)
            .into_iter()
            .flat_map(|data| data.edges.iter().copied())
    }

    fn link_faces(&self, edge: EdgeId) -> &[FaceId] {
        self.edges
            .get(edge)
            .map_or(&[], |data| data.link_faces.as_slice())
    }

    fn material_index(&self, face: FaceId) -> Option<u16> {
        self.faces.get(face).map(|data| data.material_index)
    }

    fn set_material_index(&mut self, face: FaceId, index: u16) -> Result<(), TopologyError> {
        self.face_mut(face)?.material_index = index;
        Ok(())
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn ensure_ready(&self) -> Result<(), TopologyError> {
        for (face_id, face) in &self.faces {
            if face.edges.len() != face.vertices.len() {
                return Err(TopologyError::InvalidMeshHandle(
                    "face edge loop does not match its vertex loop".into(),
                ));
            }
            for &edge_id in &face.edges {
                let edge = self.edges.get(edge_id).ok_or_else(|| {
                    TopologyError::InvalidMeshHandle("face references a missing edge".into())
                })?;
                if !edge.link_faces.contains(&face_id) {
                    return Err(TopologyError::InvalidMeshHandle(
                        "edge does not link back to its face".into(),
                    ));
                }
            }
        }
        for edge in self.edges.values() {
            if edge.link_faces.iter().any(|&f| !self.faces.contains_key(f)) {
                return Err(TopologyError::InvalidMeshHandle(
                    "edge links a missing face".into(),
                ));
            }
        }
        Ok(())
    }
}
