use crate::error::TopologyError;
use crate::mesh_data::MeshData;
use crate::topology::EditMesh;

/// Whether an object rests as stored data or is being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectMode {
    /// Geometry lives in the stored [`MeshData`].
    #[default]
    Object,
    /// Geometry lives in a live [`EditMesh`] until edit mode ends.
    Edit,
}

/// A named mesh object owning its stored geometry and, while in edit mode,
/// an editable copy of it.
#[derive(Debug, Clone)]
pub struct MeshObject {
    name: String,
    data: MeshData,
    edit_mesh: Option<EditMesh>,
    mode: ObjectMode,
}

impl MeshObject {
    /// Creates an object in object mode.
    #[must_use]
    pub fn new(name: impl Into<String>, data: MeshData) -> Self {
        Self {
            name: name.into(),
            data,
            edit_mesh: None,
            mode: ObjectMode::Object,
        }
    }

    /// Object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ObjectMode {
        self.mode
    }

    /// Stored geometry. Stale while in edit mode.
    #[must_use]
    pub fn data(&self) -> &MeshData {
        &self.data
    }

    /// Mutable stored geometry.
    pub fn data_mut(&mut self) -> &mut MeshData {
        &mut self.data
    }

    /// Number of material slots on the stored geometry.
    #[must_use]
    pub fn material_slot_count(&self) -> usize {
        self.data.materials.len()
    }

    /// The live editable mesh, present only in edit mode.
    #[must_use]
    pub fn edit_mesh(&self) -> Option<&EditMesh> {
        self.edit_mesh.as_ref()
    }

    /// Mutable access to the live editable mesh.
    pub fn edit_mesh_mut(&mut self) -> Option<&mut EditMesh> {
        self.edit_mesh.as_mut()
    }

    /// Detaches the live editable mesh without leaving edit mode.
    pub fn take_edit_mesh(&mut self) -> Option<EditMesh> {
        self.edit_mesh.take()
    }

    /// Loads the stored geometry into a live editable mesh.
    ///
    /// Does nothing if the object is already in edit mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored geometry cannot be loaded.
    pub fn enter_edit_mode(&mut self) -> Result<(), TopologyError> {
        if self.mode == ObjectMode::Edit {
            return Ok(());
        }
        self.edit_mesh = Some(self.data.to_edit_mesh()?);
        self.mode = ObjectMode::Edit;
        Ok(())
    }

    /// Writes the live editable mesh back to the stored geometry and drops it.
    ///
    /// Does nothing if the object is in object mode. On error the object
    /// stays in edit mode with its editable mesh intact.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidMeshHandle`] if the editable mesh has
    /// been detached, or an error if it cannot be stored.
    pub fn exit_edit_mode(&mut self) -> Result<(), TopologyError> {
        if self.mode == ObjectMode::Object {
            return Ok(());
        }
        let mesh = self.edit_mesh.as_ref().ok_or_else(|| {
            TopologyError::InvalidMeshHandle(format!("{} has no edit mesh", self.name))
        })?;
        self.data.store_edit_mesh(mesh)?;
        self.edit_mesh = None;
        self.mode = ObjectMode::Object;
        Ok(())
    }
}
