mod randomize_materials;

pub use randomize_materials::{RandomizeIslandMaterials, Report};
