//! Splits a polygon mesh into islands of connected faces and gives every
//! island one randomly chosen material slot.
//!
//! Two faces belong to the same island when a chain of interior edges (edges
//! bordered by exactly two faces) links them. The core is generic over the
//! [`topology::MeshTopology`] capability; [`topology::EditMesh`] and
//! [`mesh_data::MeshData`] are the editable and persisted representations a
//! [`object::MeshObject`] switches between.

pub mod error;
pub mod islands;
pub mod materialize;
pub mod math;
pub mod mesh_data;
pub mod object;
pub mod operations;
pub mod topology;

pub use error::{InsulaError, MaterialError, Result, TopologyError};
pub use islands::{find_islands, Island, IslandMap};
pub use materialize::{materialize_islands, partition_and_colorize, Assignment};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use crate::math::Point3;
    use crate::topology::{EditMesh, FaceId, VertexId};

    /// Routes `tracing` output to the test harness; `RUST_LOG` selects the level.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    pub fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn triangle(mesh: &mut EditMesh, a: Point3, b: Point3, c: Point3) -> FaceId {
        let a = mesh.add_vertex(a);
        let b = mesh.add_vertex(b);
        let c = mesh.add_vertex(c);
        mesh.add_face(&[a, b, c]).unwrap()
    }

    /// Two triangles sharing the diagonal of a unit square.
    pub fn shared_edge_pair() -> (EditMesh, [FaceId; 2]) {
        let mut mesh = EditMesh::new();
        let a = mesh.add_vertex(p(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(p(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(p(1.0, 1.0, 0.0));
        let d = mesh.add_vertex(p(0.0, 1.0, 0.0));
        let lower = mesh.add_face(&[a, b, c]).unwrap();
        let upper = mesh.add_face(&[a, c, d]).unwrap();
        (mesh, [lower, upper])
    }

    /// Two triangles that share no vertex or edge.
    pub fn disjoint_pair() -> (EditMesh, [FaceId; 2]) {
        let mut mesh = EditMesh::new();
        let first = triangle(
            &mut mesh,
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
        );
        let second = triangle(
            &mut mesh,
            p(5.0, 0.0, 0.0),
            p(6.0, 0.0, 0.0),
            p(5.0, 1.0, 0.0),
        );
        (mesh, [first, second])
    }

    /// Four quads forming the open sides of a square tube.
    pub fn quad_ring() -> (EditMesh, [FaceId; 4]) {
        let mut mesh = EditMesh::new();
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let bottom: Vec<VertexId> = corners
            .iter()
            .map(|&(x, y)| mesh.add_vertex(p(x, y, 0.0)))
            .collect();
        let top: Vec<VertexId> = corners
            .iter()
            .map(|&(x, y)| mesh.add_vertex(p(x, y, 1.0)))
            .collect();
        let mut faces = [FaceId::default(); 4];
        for (i, face) in faces.iter_mut().enumerate() {
            let j = (i + 1) % 4;
            *face = mesh.add_face(&[bottom[i], bottom[j], top[j], top[i]]).unwrap();
        }
        (mesh, faces)
    }

    /// Three triangles hinged on a single edge.
    pub fn fin() -> (EditMesh, [FaceId; 3]) {
        let mut mesh = EditMesh::new();
        let a = mesh.add_vertex(p(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(p(0.0, 0.0, 1.0));
        let tips = [p(1.0, 0.0, 0.5), p(-1.0, 0.0, 0.5), p(0.0, 1.0, 0.5)];
        let mut faces = [FaceId::default(); 3];
        for (face, tip) in faces.iter_mut().zip(tips) {
            let c = mesh.add_vertex(tip);
            *face = mesh.add_face(&[a, b, c]).unwrap();
        }
        (mesh, faces)
    }

    /// A row of `len` quads, each sharing an edge with the next.
    pub fn quad_strip(len: usize) -> EditMesh {
        let mut mesh = EditMesh::new();
        let mut prev = (
            mesh.add_vertex(p(0.0, 0.0, 0.0)),
            mesh.add_vertex(p(0.0, 1.0, 0.0)),
        );
        for i in 1..=len {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            let next = (
                mesh.add_vertex(p(x, 0.0, 0.0)),
                mesh.add_vertex(p(x, 1.0, 0.0)),
            );
            mesh.add_face(&[prev.0, next.0, next.1, prev.1]).unwrap();
            prev = next;
        }
        mesh
    }
}
