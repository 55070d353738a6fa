use ash::vk;

use crate::error::{ObjError, ObjResult};
use crate::geometry::Point4;
use crate::objects::MeshFormat;

/// How a built `VertexStream` is read by a vertex shader: one binding,
/// position at location 0 and, for lit meshes, the normal at location 1.
pub struct VertexLayout {
    pub binding: vk::VertexInputBindingDescription,
    pub attributes: Vec<vk::VertexInputAttributeDescription>,
}

impl VertexLayout {
    pub fn for_format(format: MeshFormat) -> ObjResult<VertexLayout> {
        let point_size = std::mem::size_of::<Point4>() as u32;

        let position_attribute = vk::VertexInputAttributeDescription {
            binding: 0,
            location: 0,
            format: vk::Format::R32G32B32A32_SFLOAT,
            offset: 0,
        };

        let attributes = match format {
            MeshFormat::Vertex => vec![position_attribute],

            MeshFormat::VertexNormal => {
                let normal_attribute = vk::VertexInputAttributeDescription {
                    binding: 0,
                    location: 1,
                    format: vk::Format::R32G32B32A32_SFLOAT,
                    offset: point_size,
                };

                vec![position_attribute, normal_attribute]
            }

            MeshFormat::VertexTexture | MeshFormat::VertexTextureNormal => {
                return Err(ObjError::UnsupportedFormat(format));
            }
        };

        let binding = vk::VertexInputBindingDescription {
            binding: 0,
            stride: point_size * attributes.len() as u32,
            input_rate: vk::VertexInputRate::VERTEX,
        };

        return Ok(VertexLayout {
            binding,
            attributes,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_only_layout() {
        let layout = VertexLayout::for_format(MeshFormat::Vertex).unwrap();

        assert_eq!(layout.binding.stride, 16);
        assert_eq!(layout.binding.input_rate, vk::VertexInputRate::VERTEX);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].offset, 0);
    }

    #[test]
    fn interleaved_position_normal_layout() {
        let layout = VertexLayout::for_format(MeshFormat::VertexNormal).unwrap();

        assert_eq!(layout.binding.stride, 32);
        assert_eq!(layout.attributes[1].location, 1);
        assert_eq!(layout.attributes[1].offset, 16);
        assert_eq!(
            layout.attributes[1].format,
            vk::Format::R32G32B32A32_SFLOAT
        );
    }

    #[test]
    fn textured_layouts_are_unsupported() {
        assert!(matches!(
            VertexLayout::for_format(MeshFormat::VertexTextureNormal),
            Err(ObjError::UnsupportedFormat(MeshFormat::VertexTextureNormal))
        ));
    }
}
