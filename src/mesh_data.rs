use std::collections::HashMap;

use crate::error::TopologyError;
use crate::math::Point3;
use crate::topology::{EditMesh, VertexId};

/// A named entry in an object's material list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialSlot {
    /// Display name of the material.
    pub name: String,
}

impl MaterialSlot {
    /// Creates a material slot.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Stored polygon mesh, as kept on an object between edits.
///
/// Polygons index into `positions`; `material_indices[i]` belongs to
/// `polygons[i]`.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Polygon vertex loops.
    pub polygons: Vec<Vec<u32>>,
    /// Material index of each polygon.
    pub material_indices: Vec<u16>,
    /// Material slots available to the polygons.
    pub materials: Vec<MaterialSlot>,
}

impl MeshData {
    /// Creates empty mesh data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a polygon with material index 0 and returns its index.
    pub fn add_polygon(&mut self, vertices: Vec<u32>) -> usize {
        self.polygons.push(vertices);
        self.material_indices.push(0);
        self.polygons.len() - 1
    }

    /// Number of polygons.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Builds an editable copy of this mesh.
    ///
    /// Faces are created in polygon order, so the n-th face of the result
    /// corresponds to `polygons[n]`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidMeshHandle`] if a polygon indexes a
    /// missing vertex or the material index list does not match the polygon
    /// list, and [`TopologyError::InvalidTopology`] for degenerate polygons.
    pub fn to_edit_mesh(&self) -> Result<EditMesh, TopologyError> {
        if self.material_indices.len() != self.polygons.len() {
            return Err(TopologyError::InvalidMeshHandle(format!(
                "{} material indices for {} polygons",
                self.material_indices.len(),
                self.polygons.len()
            )));
        }

        let mut mesh = EditMesh::new();
        let vertices: Vec<VertexId> = self
            .positions
            .iter()
            .map(|&point| mesh.add_vertex(point))
            .collect();

        for (polygon, &material) in self.polygons.iter().zip(&self.material_indices) {
            let corners = polygon
                .iter()
                .map(|&i| {
                    vertices.get(i as usize).copied().ok_or_else(|| {
                        TopologyError::InvalidMeshHandle(format!(
                            "polygon references vertex {i} of {}",
                            vertices.len()
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let face = mesh.add_face(&corners)?;
            mesh.face_mut(face)?.material_index = material;
        }
        Ok(mesh)
    }

    /// Replaces positions, polygons and material indices with the contents of
    /// `mesh`. Material slots are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a face references a vertex missing from `mesh` or
    /// the mesh has more vertices than a `u32` can index.
    pub fn store_edit_mesh(&mut self, mesh: &EditMesh) -> Result<(), TopologyError> {
        let mut index_of: HashMap<VertexId, u32> = HashMap::with_capacity(mesh.vertex_count());
        let mut positions = Vec::with_capacity(mesh.vertex_count());
        for id in mesh.vertex_ids() {
            let index = u32::try_from(positions.len()).map_err(|_| {
                TopologyError::InvalidTopology("too many vertices to store".into())
            })?;
            positions.push(mesh.vertex(id)?.point);
            index_of.insert(id, index);
        }

        let mut polygons = Vec::with_capacity(mesh.face_count());
        let mut material_indices = Vec::with_capacity(mesh.face_count());
        for id in mesh.face_ids() {
            let face = mesh.face(id)?;
            let polygon = face
                .vertices
                .iter()
                .map(|v| {
                    index_of
                        .get(v)
                        .copied()
                        .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            polygons.push(polygon);
            material_indices.push(face.material_index);
        }

        self.positions = positions;
        self.polygons = polygons;
        self.material_indices = material_indices;
        Ok(())
    }
}
