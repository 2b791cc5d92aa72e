use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::{Result, TopologyError};
use crate::materialize::{partition_and_colorize, Assignment};
use crate::object::{MeshObject, ObjectMode};

/// Gives every loose part of an object's mesh a random material slot.
///
/// In object mode the stored geometry is loaded into an editable copy,
/// processed and stored again. In edit mode the live editable mesh is
/// processed in place and committed when edit mode ends.
#[derive(Debug, Clone, Default)]
pub struct RandomizeIslandMaterials {
    seed: Option<u64>,
}

/// Outcome of a [`RandomizeIslandMaterials`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Mode the object was processed in.
    pub mode: ObjectMode,
    /// Number of islands found.
    pub islands: usize,
    /// Number of faces that received a material.
    pub faces: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "random island materials applied: {} islands, {} faces",
            self.islands, self.faces
        )
    }
}

impl RandomizeIslandMaterials {
    /// Creates the operation with an unseeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws materials from a generator seeded with `seed`, making runs
    /// repeatable.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Executes the operation on `object`.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::EmptyMaterialSet`] if the object has no
    /// material slots and [`TopologyError::InvalidMeshHandle`] if its mesh
    /// cannot be traversed. The object is unchanged on error.
    ///
    /// [`MaterialError::EmptyMaterialSet`]: crate::error::MaterialError::EmptyMaterialSet
    pub fn execute(&self, object: &mut MeshObject) -> Result<Report> {
        let assignment = match self.seed {
            Some(seed) => Self::apply(object, &mut StdRng::seed_from_u64(seed))?,
            None => Self::apply(object, &mut rand::rng())?,
        };

        let report = Report {
            mode: object.mode(),
            islands: assignment.island_count(),
            faces: assignment.face_count(),
        };
        info!(
            object = object.name(),
            islands = report.islands,
            faces = report.faces,
            "{report}"
        );
        Ok(report)
    }

    fn apply<R: Rng + ?Sized>(object: &mut MeshObject, rng: &mut R) -> Result<Assignment> {
        let slots = object.material_slot_count();
        match object.mode() {
            ObjectMode::Object => {
                let mut mesh = object.data().to_edit_mesh()?;
                let assignment = partition_and_colorize(&mut mesh, slots, rng)?;
                object.data_mut().store_edit_mesh(&mesh)?;
                Ok(assignment)
            }
            ObjectMode::Edit => {
                let name = object.name().to_owned();
                let mesh = object.edit_mesh_mut().ok_or_else(|| {
                    TopologyError::InvalidMeshHandle(format!("{name} has no edit mesh"))
                })?;
                partition_and_colorize(mesh, slots, rng)
            }
        }
    }
}
