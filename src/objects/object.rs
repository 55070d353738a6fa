use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Attribute, ErrorPolicy, ObjError, ObjResult};
use crate::geometry::Point4;
use crate::objects::builder::{ArrayBuilder, VertexStream};
use crate::objects::mesh::{MeshFormat, ObjMesh};
use crate::objects::scanner::Scanner;
use crate::resources::ResourceProvider;

const NORMAL_HEADER: &str = "vn";
const VERTEX_HEADER: &str = "v ";
const FACE_HEADER: &str = "f ";
const NEW_MATERIAL_HEADER: &str = "usemtl";

static NEW_MESH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"usemtl (\w+)").expect("valid usemtl regex"));
static VERTEX_NORMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)//(\d+)").expect("valid face regex"));

/// A parsed OBJ document: shared position/normal pools and one mesh per
/// `usemtl` block. Immutable once `parse` returns.
#[derive(Debug, Clone)]
pub struct Object {
    pub vertices: Vec<Point4>,
    pub normals: Vec<Point4>,
    pub meshes: Vec<ObjMesh>,
    /// Inferred from the first mesh only, then applied to the whole document.
    pub format: MeshFormat,
}

impl Object {
    pub fn load(
        provider: &dyn ResourceProvider,
        name: &str,
        policy: ErrorPolicy,
    ) -> ObjResult<Object> {
        let result = provider
            .read_to_string(name)
            .and_then(|text| Object::parse(&text));

        if let Ok(object) = &result {
            log::info!(
                "loaded `{}`: {} vertices, {} normals, {} meshes, {:?}",
                name,
                object.vertices.len(),
                object.normals.len(),
                object.meshes.len(),
                object.format
            );
        }

        return policy.apply(result);
    }

    pub fn parse(text: &str) -> ObjResult<Object> {
        let mut vertices = Vec::new();
        let mut normals = Vec::new();
        let mut meshes: Vec<ObjMesh> = Vec::new();

        for (row, line) in text.split('\n').enumerate() {
            let line_number = row + 1;

            if line.starts_with(NORMAL_HEADER) {
                log::trace!("line {}: normal", line_number);
                let [x, y, z] = Scanner::new(line).triple();
                normals.push(Point4::direction(x, y, z));
            }

            if line.starts_with(VERTEX_HEADER) {
                log::trace!("line {}: vertex", line_number);
                let [x, y, z] = Scanner::new(line).triple();
                vertices.push(Point4::position(x, y, z));
            }

            if line.starts_with(FACE_HEADER) {
                log::trace!("line {}: face", line_number);
                Object::read_face(line, line_number, meshes.last_mut())?;
            }

            if line.starts_with(NEW_MATERIAL_HEADER) {
                log::trace!("line {}: new material", line_number);
                meshes.push(Object::read_new_mesh(line));
            }
        }

        let first = match meshes.first() {
            Some(mesh) => mesh,
            None => {
                return Err(ObjError::malformed(
                    "document declares no `usemtl`, so it has no mesh",
                ));
            }
        };
        let format = first.format();

        for mesh in meshes.iter_mut() {
            mesh.finalize();
        }

        let object = Object {
            vertices,
            normals,
            meshes,
            format,
        };
        object.validate()?;

        return Ok(object);
    }

    fn read_new_mesh(line: &str) -> ObjMesh {
        let mut mesh = ObjMesh::new();

        if let Some(captures) = NEW_MESH_REGEX.captures(line) {
            mesh.material = captures[1].to_string();
            log::debug!("material `{}`", mesh.material);
        }

        return mesh;
    }

    fn read_face(line: &str, line_number: usize, mesh: Option<&mut ObjMesh>) -> ObjResult<()> {
        let mut mesh = mesh;

        for captures in VERTEX_NORMAL_REGEX.captures_iter(line) {
            let vertex = Object::source_index(&captures[1], line_number)?;
            let normal = Object::source_index(&captures[2], line_number)?;

            let current = mesh.as_deref_mut().ok_or_else(|| {
                ObjError::malformed(format!(
                    "line {}: face before any `usemtl` has no mesh to join",
                    line_number
                ))
            })?;

            // Zero wraps to usize::MAX and is rejected by `validate` once the
            // pool sizes are final.
            current.push_vertex_normal(vertex.wrapping_sub(1), normal.wrapping_sub(1));
        }

        return Ok(());
    }

    fn source_index(token: &str, line_number: usize) -> ObjResult<usize> {
        return token.parse::<usize>().map_err(|_| ObjError::UnparsableIndex {
            line: line_number,
            token: token.to_string(),
        });
    }

    fn validate(&self) -> ObjResult<()> {
        for (mesh_index, mesh) in self.meshes.iter().enumerate() {
            let pools = [
                (Attribute::Vertex, &mesh.vertex_indices, self.vertices.len()),
                (Attribute::Normal, &mesh.normal_indices, self.normals.len()),
            ];

            for (attribute, indices, available) in pools {
                if let Some(&index) = indices.iter().find(|&&i| i >= available) {
                    return Err(ObjError::IndexOutOfRange {
                        mesh: mesh_index,
                        attribute,
                        index: index.wrapping_add(1),
                        available,
                    });
                }
            }
        }

        return Ok(());
    }

    pub fn mesh_by_material(&self, material: &str) -> Option<&ObjMesh> {
        return self.meshes.iter().find(|mesh| mesh.material == material);
    }

    fn builder(&self) -> ArrayBuilder<'_> {
        return ArrayBuilder::new(&self.vertices, &self.normals);
    }

    /// Interleaved stream of the first mesh, labelled with the document
    /// format.
    pub fn array_data(&self) -> ObjResult<VertexStream> {
        let first = self.meshes.first().ok_or(ObjError::MeshNotFound {
            index: 0,
            count: 0,
        })?;

        return self.builder().build(first, self.format);
    }

    /// Interleaved stream of any mesh, using that mesh's own format.
    pub fn array_data_for(&self, index: usize) -> ObjResult<VertexStream> {
        let mesh = self.meshes.get(index).ok_or(ObjError::MeshNotFound {
            index,
            count: self.meshes.len(),
        })?;

        return self.builder().build(mesh, mesh.format());
    }
}
