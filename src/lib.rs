pub mod error;
pub mod geometry;
pub mod objects;
pub mod resources;
pub mod vulkan;

pub use error::{Attribute, ErrorPolicy, ObjError, ObjResult};
pub use geometry::{Point3, Point4};
pub use objects::{ArrayBuilder, MeshFormat, ObjMesh, Object, VertexStream};
pub use resources::{AssetDirectory, ResourceProvider};
