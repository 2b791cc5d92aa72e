use rand::Rng;
use tracing::debug;

use crate::error::{MaterialError, Result};
use crate::islands::{find_islands, Island};
use crate::topology::MeshTopology;

/// Material indices drawn for a set of islands, in island order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    draws: Vec<u16>,
    face_count: usize,
}

impl Assignment {
    /// Material index given to each island.
    #[must_use]
    pub fn draws(&self) -> &[u16] {
        &self.draws
    }

    /// Material index given to the island at `island`.
    #[must_use]
    pub fn material_of(&self, island: usize) -> Option<u16> {
        self.draws.get(island).copied()
    }

    /// Number of islands that received a material.
    #[must_use]
    pub fn island_count(&self) -> usize {
        self.draws.len()
    }

    /// Number of faces written.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_count
    }
}

/// Largest valid material index for `slot_count` slots.
fn max_material_index(slot_count: usize) -> std::result::Result<u16, MaterialError> {
    let last = slot_count
        .checked_sub(1)
        .ok_or(MaterialError::EmptyMaterialSet)?;
    u16::try_from(last).map_err(|_| MaterialError::TooManySlots {
        count: slot_count,
        max: usize::from(u16::MAX) + 1,
    })
}

/// Gives every island one material index drawn uniformly from
/// `0..slot_count` and writes it to all of the island's faces.
///
/// All draws happen before the first write.
///
/// # Errors
///
/// Returns [`MaterialError::EmptyMaterialSet`] if `slot_count` is zero and
/// [`MaterialError::TooManySlots`] if it exceeds the 16-bit index range; the
/// mesh is untouched in both cases. Fails with a topology error if an island
/// names a face the mesh does not contain.
pub fn materialize_islands<M, R>(
    mesh: &mut M,
    islands: &[Island<M::FaceId>],
    slot_count: usize,
    rng: &mut R,
) -> Result<Assignment>
where
    M: MeshTopology,
    R: Rng + ?Sized,
{
    let max_index = max_material_index(slot_count)?;
    let draws: Vec<u16> = islands
        .iter()
        .map(|_| rng.random_range(0..=max_index))
        .collect();

    let mut face_count = 0;
    for (island, &index) in islands.iter().zip(&draws) {
        for &face in island.faces() {
            mesh.set_material_index(face, index)?;
        }
        face_count += island.len();
    }

    debug!(
        islands = draws.len(),
        faces = face_count,
        slots = slot_count,
        "assigned island materials"
    );
    Ok(Assignment { draws, face_count })
}

/// Finds the islands of `mesh` and gives each a random material slot.
///
/// # Errors
///
/// Returns [`TopologyError::InvalidMeshHandle`] if the mesh is not ready for
/// traversal and [`MaterialError::EmptyMaterialSet`] if there are no slots.
/// The mesh is left unmodified on error.
///
/// [`TopologyError::InvalidMeshHandle`]: crate::error::TopologyError::InvalidMeshHandle
pub fn partition_and_colorize<M, R>(
    mesh: &mut M,
    slot_count: usize,
    rng: &mut R,
) -> Result<Assignment>
where
    M: MeshTopology,
    R: Rng + ?Sized,
{
    mesh.ensure_ready()?;
    max_material_index(slot_count)?;
    let islands = find_islands(mesh);
    materialize_islands(mesh, &islands, slot_count, rng)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{InsulaError, TopologyError};
    use crate::islands::IslandMap;
    use crate::test_support::{disjoint_pair, init_tracing, p, quad_strip, shared_edge_pair};
    use crate::topology::EditMesh;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn scattered_triangles(count: usize) -> EditMesh {
        let mut mesh = EditMesh::new();
        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let x = 3.0 * i as f64;
            let a = mesh.add_vertex(p(x, 0.0, 0.0));
            let b = mesh.add_vertex(p(x + 1.0, 0.0, 0.0));
            let c = mesh.add_vertex(p(x, 1.0, 0.0));
            mesh.add_face(&[a, b, c]).unwrap();
        }
        mesh
    }

    #[test]
    fn connected_pair_shares_one_index() {
        init_tracing();
        let (mut mesh, [lower, upper]) = shared_edge_pair();
        let mut rng = StdRng::seed_from_u64(1);

        let assignment = partition_and_colorize(&mut mesh, 3, &mut rng).unwrap();
        assert_eq!(assignment.island_count(), 1);
        assert_eq!(assignment.face_count(), 2);

        let index = mesh.material_index(lower).unwrap();
        assert!(index < 3);
        assert_eq!(mesh.material_index(upper), Some(index));
        assert_eq!(assignment.material_of(0), Some(index));
    }

    #[test]
    fn single_slot_gives_zero_everywhere() {
        let (mut mesh, faces) = disjoint_pair();
        for face in faces {
            mesh.set_material_index(face, 9).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(2);

        let assignment = partition_and_colorize(&mut mesh, 1, &mut rng).unwrap();
        assert_eq!(assignment.draws(), &[0, 0]);
        for face in faces {
            assert_eq!(mesh.material_index(face), Some(0));
        }
    }

    #[test]
    fn zero_slots_leave_mesh_untouched() {
        let (mut mesh, faces) = shared_edge_pair();
        mesh.set_material_index(faces[0], 4).unwrap();
        mesh.set_material_index(faces[1], 5).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let err = partition_and_colorize(&mut mesh, 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            InsulaError::Material(MaterialError::EmptyMaterialSet)
        ));
        assert_eq!(mesh.material_index(faces[0]), Some(4));
        assert_eq!(mesh.material_index(faces[1]), Some(5));
    }

    #[test]
    fn zero_slots_rejected_before_any_write() {
        let (mut mesh, faces) = disjoint_pair();
        let islands = find_islands(&mesh);
        mesh.set_material_index(faces[1], 2).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let err = materialize_islands(&mut mesh, &islands, 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            InsulaError::Material(MaterialError::EmptyMaterialSet)
        ));
        assert_eq!(mesh.material_index(faces[0]), Some(0));
        assert_eq!(mesh.material_index(faces[1]), Some(2));
    }

    #[test]
    fn empty_mesh_succeeds_with_no_draws() {
        let mut mesh = EditMesh::new();
        let mut rng = StdRng::seed_from_u64(5);
        let assignment = partition_and_colorize(&mut mesh, 3, &mut rng).unwrap();
        assert_eq!(assignment.island_count(), 0);
        assert_eq!(assignment.face_count(), 0);
    }

    #[test]
    fn slot_count_must_fit_face_index() {
        let (mut mesh, _) = disjoint_pair();
        let mut rng = StdRng::seed_from_u64(6);

        let err = partition_and_colorize(&mut mesh, 70_000, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            InsulaError::Material(MaterialError::TooManySlots { count: 70_000, .. })
        ));
        assert!(partition_and_colorize(&mut mesh, 65_536, &mut rng).is_ok());
    }

    #[test]
    fn every_face_of_an_island_matches() {
        let mut mesh = quad_strip(12);
        let mut rng = StdRng::seed_from_u64(7);

        let islands = find_islands(&mesh);
        let assignment = materialize_islands(&mut mesh, &islands, 6, &mut rng).unwrap();
        let index = assignment.material_of(0).unwrap();
        assert!(index < 6);
        for face in islands[0].faces() {
            assert_eq!(mesh.material_index(*face), Some(index));
        }
    }

    #[test]
    fn draws_stay_in_range_and_cover_slots() {
        let mut mesh = scattered_triangles(200);
        let mut rng = StdRng::seed_from_u64(8);

        let assignment = partition_and_colorize(&mut mesh, 4, &mut rng).unwrap();
        assert_eq!(assignment.island_count(), 200);
        let used: HashSet<u16> = assignment.draws().iter().copied().collect();
        assert_eq!(used, HashSet::from([0, 1, 2, 3]));

        let map = IslandMap::new(&find_islands(&mesh));
        for face in mesh.faces() {
            let island = map.island_of(face).unwrap();
            assert_eq!(mesh.material_index(face), assignment.material_of(island));
        }
    }

    #[test]
    fn same_seed_same_colors() {
        let mut first = scattered_triangles(30);
        let mut second = first.clone();

        let a = partition_and_colorize(&mut first, 5, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = partition_and_colorize(&mut second, 5, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_mesh_is_rejected() {
        let (mut mesh, [lower, upper]) = shared_edge_pair();
        let foreign = mesh.face(upper).unwrap().edges[2];
        mesh.remove_face(upper).unwrap();
        mesh.face_mut(lower).unwrap().edges[0] = foreign;
        let mut rng = StdRng::seed_from_u64(12);

        let err = partition_and_colorize(&mut mesh, 2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            InsulaError::Topology(TopologyError::InvalidMeshHandle(_))
        ));
    }
}
