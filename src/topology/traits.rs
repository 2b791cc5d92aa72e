use std::fmt::Debug;
use std::hash::Hash;

use crate::error::TopologyError;

/// Read access to face/edge connectivity plus write access to per-face
/// material indices.
///
/// The island engine and the materializer only talk to a mesh through this
/// trait, so each host representation implements it once.
pub trait MeshTopology {
    /// Face identifier.
    type FaceId: Copy + Eq + Hash + Debug;
    /// Edge identifier.
    type EdgeId: Copy + Debug;

    /// Iterates all faces in storage order.
    fn faces(&self) -> impl Iterator<Item = Self::FaceId> + '_;

    /// Iterates the boundary edges of `face`. Unknown faces yield nothing.
    fn edges_of(&self, face: Self::FaceId) -> impl Iterator<Item = Self::EdgeId> + '_;

    /// Returns the faces bordering `edge`. Unknown edges border nothing.
    fn link_faces(&self, edge: Self::EdgeId) -> &[Self::FaceId];

    /// Returns the material index of `face`, or `None` if the face is unknown.
    fn material_index(&self, face: Self::FaceId) -> Option<u16>;

    /// Sets the material index of `face`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not part of the mesh.
    fn set_material_index(&mut self, face: Self::FaceId, index: u16)
        -> Result<(), TopologyError>;

    /// Number of faces in the mesh.
    fn face_count(&self) -> usize {
        self.faces().count()
    }

    /// Checks that the mesh can be traversed.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidMeshHandle`] if the mesh references
    /// entities it does not contain.
    fn ensure_ready(&self) -> Result<(), TopologyError> {
        Ok(())
    }
}
