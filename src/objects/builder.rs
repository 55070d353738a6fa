use crate::error::{ObjError, ObjResult};
use crate::geometry::Point4;
use crate::objects::mesh::{MeshFormat, ObjMesh};
use crate::vulkan::BufferSink;

/// Expands a mesh's index lists against the document pools.
pub struct ArrayBuilder<'a> {
    vertices: &'a [Point4],
    normals: &'a [Point4],
}

impl<'a> ArrayBuilder<'a> {
    pub fn new(vertices: &'a [Point4], normals: &'a [Point4]) -> Self {
        return ArrayBuilder { vertices, normals };
    }

    fn lookup(pool: &[Point4], index: usize, what: &str) -> ObjResult<Point4> {
        return pool.get(index).copied().ok_or_else(|| {
            ObjError::malformed(format!(
                "{} index {} past the end of a pool of {}",
                what,
                index,
                pool.len()
            ))
        });
    }

    /// VERTEX emits one point per face vertex; VERTEX_NORMAL emits the
    /// position immediately followed by its normal.
    pub fn build(&self, mesh: &ObjMesh, format: MeshFormat) -> ObjResult<VertexStream> {
        let mut points = Vec::new();

        match format {
            MeshFormat::Vertex => {
                points.reserve(mesh.index_count);

                for i in 0..mesh.index_count {
                    let index = ArrayBuilder::index_at(&mesh.vertex_indices, i, "vertex")?;
                    points.push(ArrayBuilder::lookup(self.vertices, index, "vertex")?);
                }
            }

            MeshFormat::VertexNormal => {
                points.reserve(mesh.index_count * 2);

                for i in 0..mesh.index_count {
                    let v_index = ArrayBuilder::index_at(&mesh.vertex_indices, i, "vertex")?;
                    let n_index = ArrayBuilder::index_at(&mesh.normal_indices, i, "normal")?;

                    points.push(ArrayBuilder::lookup(self.vertices, v_index, "vertex")?);
                    points.push(ArrayBuilder::lookup(self.normals, n_index, "normal")?);
                }
            }

            MeshFormat::VertexTexture | MeshFormat::VertexTextureNormal => {
                return Err(ObjError::UnsupportedFormat(format));
            }
        }

        return Ok(VertexStream { format, points });
    }

    fn index_at(indices: &[usize], i: usize, what: &str) -> ObjResult<usize> {
        return indices.get(i).copied().ok_or_else(|| {
            ObjError::malformed(format!(
                "mesh has {} {} indices, expected at least {}",
                indices.len(),
                what,
                i + 1
            ))
        });
    }
}

/// Built, upload-ready vertex data.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStream {
    pub format: MeshFormat,
    pub points: Vec<Point4>,
}

impl VertexStream {
    pub fn points_per_vertex(&self) -> usize {
        match self.format {
            MeshFormat::Vertex => 1,
            MeshFormat::VertexTexture => 2,
            MeshFormat::VertexNormal => 2,
            MeshFormat::VertexTextureNormal => 3,
        }
    }

    pub fn vertex_count(&self) -> usize {
        return self.points.len() / self.points_per_vertex();
    }

    pub fn byte_len(&self) -> u64 {
        return (std::mem::size_of::<Point4>() * self.points.len()) as u64;
    }

    pub fn as_bytes(&self) -> &[u8] {
        return bytemuck::cast_slice(&self.points);
    }

    pub fn upload<S: BufferSink>(&self, sink: &S) -> ObjResult<S::Buffer> {
        log::debug!(
            "uploading {} points ({} bytes)",
            self.points.len(),
            self.byte_len()
        );

        return sink.upload(&self.points, self.byte_len());
    }
}
