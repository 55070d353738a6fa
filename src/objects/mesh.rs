#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Vertex,
    VertexTexture,
    VertexTextureNormal,
    VertexNormal,
}

impl MeshFormat {
    pub fn infer(has_texcoords: bool, has_normals: bool) -> MeshFormat {
        match (has_texcoords, has_normals) {
            (false, false) => MeshFormat::Vertex,
            (true, false) => MeshFormat::VertexTexture,
            (true, true) => MeshFormat::VertexTextureNormal,
            (false, true) => MeshFormat::VertexNormal,
        }
    }

    pub fn has_texcoords(&self) -> bool {
        return matches!(
            self,
            MeshFormat::VertexTexture | MeshFormat::VertexTextureNormal
        );
    }

    pub fn has_normals(&self) -> bool {
        return matches!(
            self,
            MeshFormat::VertexNormal | MeshFormat::VertexTextureNormal
        );
    }
}

/// One `usemtl` block. Indices are zero-based into the document pools.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    pub material: String,
    pub vertex_indices: Vec<usize>,
    pub texcoord_indices: Vec<usize>,
    pub normal_indices: Vec<usize>,
    pub index_count: usize,
}

impl ObjMesh {
    pub fn new() -> Self {
        return ObjMesh::default();
    }

    pub fn has_texcoords(&self) -> bool {
        return !self.texcoord_indices.is_empty();
    }

    pub fn has_normals(&self) -> bool {
        return !self.normal_indices.is_empty();
    }

    pub fn format(&self) -> MeshFormat {
        return MeshFormat::infer(self.has_texcoords(), self.has_normals());
    }

    pub fn is_empty(&self) -> bool {
        return self.vertex_indices.is_empty();
    }

    pub(crate) fn push_vertex_normal(&mut self, vertex: usize, normal: usize) {
        self.vertex_indices.push(vertex);
        self.normal_indices.push(normal);
    }

    pub(crate) fn finalize(&mut self) {
        self.index_count = self.vertex_indices.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_covers_every_combination() {
        assert_eq!(MeshFormat::infer(false, false), MeshFormat::Vertex);
        assert_eq!(MeshFormat::infer(true, false), MeshFormat::VertexTexture);
        assert_eq!(MeshFormat::infer(true, true), MeshFormat::VertexTextureNormal);
        assert_eq!(MeshFormat::infer(false, true), MeshFormat::VertexNormal);

        for format in [
            MeshFormat::Vertex,
            MeshFormat::VertexTexture,
            MeshFormat::VertexTextureNormal,
            MeshFormat::VertexNormal,
        ] {
            assert_eq!(
                MeshFormat::infer(format.has_texcoords(), format.has_normals()),
                format
            );
        }
    }

    #[test]
    fn flags_follow_index_lists() {
        let mut mesh = ObjMesh::new();
        assert!(!mesh.has_normals());
        assert!(!mesh.has_texcoords());
        assert_eq!(mesh.format(), MeshFormat::Vertex);

        mesh.push_vertex_normal(3, 1);
        assert!(mesh.has_normals());
        assert_eq!(mesh.format(), MeshFormat::VertexNormal);

        mesh.texcoord_indices.push(0);
        assert_eq!(mesh.format(), MeshFormat::VertexTextureNormal);
    }

    #[test]
    fn finalize_caches_vertex_count() {
        let mut mesh = ObjMesh::new();
        mesh.push_vertex_normal(0, 0);
        mesh.push_vertex_normal(1, 0);
        assert_eq!(mesh.index_count, 0);

        mesh.finalize();
        assert_eq!(mesh.index_count, 2);
    }
}
