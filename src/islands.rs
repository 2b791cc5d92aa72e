use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;

use crate::topology::MeshTopology;

/// A maximal set of faces connected through interior edges.
///
/// Faces are stored in the order the flood fill first reached them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Island<F> {
    faces: Vec<F>,
}

impl<F: Copy + Eq> Island<F> {
    /// Member faces in discovery order.
    #[must_use]
    pub fn faces(&self) -> &[F] {
        &self.faces
    }

    /// Number of member faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always `false` for islands produced by [`find_islands`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns `true` if `face` belongs to this island.
    #[must_use]
    pub fn contains(&self, face: F) -> bool {
        self.faces.contains(&face)
    }
}

/// Partitions the faces of `mesh` into islands.
///
/// Two faces are adjacent when they share an edge bordered by exactly two
/// faces; edges with any other number of faces never connect anything.
/// Islands are returned in the storage order of their first face, so the
/// result is deterministic for a given mesh.
pub fn find_islands<M: MeshTopology>(mesh: &M) -> Vec<Island<M::FaceId>> {
    let mut visited: HashSet<M::FaceId> = HashSet::with_capacity(mesh.face_count());
    let mut stack = Vec::new();
    let mut islands = Vec::new();

    for seed in mesh.faces() {
        if !visited.insert(seed) {
            continue;
        }
        stack.push(seed);
        let mut faces = Vec::new();

        while let Some(face) = stack.pop() {
            faces.push(face);
            for edge in mesh.edges_of(face) {
                let linked = mesh.link_faces(edge);
                if linked.len() != 2 {
                    continue;
                }
                for &neighbor in linked {
                    if visited.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        islands.push(Island { faces });
    }

    debug!(
        faces = visited.len(),
        islands = islands.len(),
        "partitioned mesh into islands"
    );
    islands
}

/// Face-to-island lookup built from the output of [`find_islands`].
#[derive(Debug, Clone)]
pub struct IslandMap<F> {
    lookup: HashMap<F, usize>,
    island_count: usize,
}

impl<F: Copy + Eq + Hash> IslandMap<F> {
    /// Indexes every face of `islands` by the position of its island.
    #[must_use]
    pub fn new(islands: &[Island<F>]) -> Self {
        let lookup = islands
            .iter()
            .enumerate()
            .flat_map(|(index, island)| island.faces.iter().map(move |&face| (face, index)))
            .collect();
        Self {
            lookup,
            island_count: islands.len(),
        }
    }

    /// Index of the island containing `face`.
    #[must_use]
    pub fn island_of(&self, face: F) -> Option<usize> {
        self.lookup.get(&face).copied()
    }

    /// Returns `true` if both faces are known and share an island.
    #[must_use]
    pub fn same_island(&self, a: F, b: F) -> bool {
        matches!((self.island_of(a), self.island_of(b)), (Some(x), Some(y)) if x == y)
    }

    /// Number of islands indexed.
    #[must_use]
    pub fn island_count(&self) -> usize {
        self.island_count
    }

    /// Number of faces indexed.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.lookup.len()
    }
}
