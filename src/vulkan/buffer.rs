use ash::{vk, Device, Instance};

use crate::error::{ObjError, ObjResult};
use crate::geometry::Point4;

/// Receives built vertex data and turns it into a GPU-visible buffer.
/// `size` is always `size_of::<Point4>() * data.len()`.
pub trait BufferSink {
    type Buffer;

    fn upload(&self, data: &[Point4], size: u64) -> ObjResult<Self::Buffer>;
}

pub struct VkBuffer {
    device: Device,
    pub inner: vk::Buffer,
    pub size: vk::DeviceSize,
    pub memory: vk::DeviceMemory,
}

impl Drop for VkBuffer {
    fn drop(&mut self) {
        unsafe {
            self.device.destroy_buffer(self.inner, None);
            self.device.free_memory(self.memory, None);
        }
    }
}

/// Uploads through a host-visible staging buffer into a device-local
/// vertex buffer. The handles are borrowed from the host renderer.
pub struct VkVertexUploader {
    pub instance: Instance,
    pub physical_device: vk::PhysicalDevice,
    pub device: Device,
    pub queue: vk::Queue,
    pub command_pool: vk::CommandPool,
}

impl BufferSink for VkVertexUploader {
    type Buffer = VkBuffer;

    fn upload(&self, data: &[Point4], size: u64) -> ObjResult<VkBuffer> {
        if size == 0 {
            return Err(ObjError::upload("cannot create an empty vertex buffer"));
        }

        let staging_properties =
            vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_COHERENT;
        let (staging_buffer, staging_memory) = self.create_buffer(
            size,
            vk::BufferUsageFlags::TRANSFER_SRC,
            staging_properties,
        )?;

        let result = self
            .fill(staging_memory, data, size)
            .and_then(|_| {
                self.create_buffer(
                    size,
                    vk::BufferUsageFlags::TRANSFER_DST | vk::BufferUsageFlags::VERTEX_BUFFER,
                    vk::MemoryPropertyFlags::DEVICE_LOCAL,
                )
            })
            .and_then(|(inner, memory)| {
                let buffer = VkBuffer {
                    device: self.device.clone(),
                    inner,
                    size,
                    memory,
                };
                self.copy_buffer(staging_buffer, buffer.inner, size)?;

                Ok(buffer)
            });

        unsafe {
            self.device.destroy_buffer(staging_buffer, None);
            self.device.free_memory(staging_memory, None);
        }

        return result;
    }
}

impl VkVertexUploader {
    fn fill(&self, memory: vk::DeviceMemory, data: &[Point4], size: u64) -> ObjResult<()> {
        let bytes: &[u8] = bytemuck::cast_slice(data);

        let data_ptr = unsafe {
            self.device
                .map_memory(memory, 0, size, vk::MemoryMapFlags::empty())
                .map_err(|e| ObjError::upload(format!("Failed to map memory: {}", e)))?
        };

        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), data_ptr as *mut u8, bytes.len());
            self.device.unmap_memory(memory);
        }

        return Ok(());
    }

    fn create_buffer(
        &self,
        size: vk::DeviceSize,
        usage: vk::BufferUsageFlags,
        properties: vk::MemoryPropertyFlags,
    ) -> ObjResult<(vk::Buffer, vk::DeviceMemory)> {
        let create_info = vk::BufferCreateInfo {
            s_type: vk::StructureType::BUFFER_CREATE_INFO,
            size,
            usage,
            sharing_mode: vk::SharingMode::EXCLUSIVE,
            ..Default::default()
        };

        let buffer = unsafe {
            self.device
                .create_buffer(&create_info, None)
                .map_err(|e| ObjError::upload(format!("Failed to create buffer: {}", e)))?
        };

        let memory_requirements = unsafe { self.device.get_buffer_memory_requirements(buffer) };

        let memory_type_index =
            match self.find_memory_type(memory_requirements.memory_type_bits, properties) {
                Ok(index) => index,
                Err(e) => {
                    unsafe { self.device.destroy_buffer(buffer, None) };
                    return Err(e);
                }
            };

        let allocate_info = vk::MemoryAllocateInfo {
            s_type: vk::StructureType::MEMORY_ALLOCATE_INFO,
            allocation_size: memory_requirements.size,
            memory_type_index,
            ..Default::default()
        };

        let memory = match unsafe { self.device.allocate_memory(&allocate_info, None) } {
            Ok(memory) => memory,
            Err(e) => {
                unsafe { self.device.destroy_buffer(buffer, None) };
                return Err(ObjError::upload(format!("Failed to allocate memory: {}", e)));
            }
        };

        if let Err(e) = unsafe { self.device.bind_buffer_memory(buffer, memory, 0) } {
            unsafe {
                self.device.destroy_buffer(buffer, None);
                self.device.free_memory(memory, None);
            }
            return Err(ObjError::upload(format!("Failed to bind memory: {}", e)));
        }

        return Ok((buffer, memory));
    }

    fn copy_buffer(&self, src: vk::Buffer, dst: vk::Buffer, size: vk::DeviceSize) -> ObjResult<()> {
        let allocate_info = vk::CommandBufferAllocateInfo {
            s_type: vk::StructureType::COMMAND_BUFFER_ALLOCATE_INFO,
            level: vk::CommandBufferLevel::PRIMARY,
            command_pool: self.command_pool,
            command_buffer_count: 1,
            ..Default::default()
        };

        let command_buffer = unsafe {
            self.device
                .allocate_command_buffers(&allocate_info)
                .map_err(|e| ObjError::upload(format!("Failed to allocate command buffer: {}", e)))?
                .remove(0)
        };

        let begin_info = vk::CommandBufferBeginInfo {
            s_type: vk::StructureType::COMMAND_BUFFER_BEGIN_INFO,
            flags: vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT,
            ..Default::default()
        };

        let copy_region = vk::BufferCopy {
            src_offset: 0,
            dst_offset: 0,
            size,
        };

        let submit_info = vk::SubmitInfo {
            s_type: vk::StructureType::SUBMIT_INFO,
            command_buffer_count: 1,
            p_command_buffers: &command_buffer,
            ..Default::default()
        };

        let result = unsafe {
            self.device
                .begin_command_buffer(command_buffer, &begin_info)
                .and_then(|_| {
                    self.device
                        .cmd_copy_buffer(command_buffer, src, dst, &[copy_region]);
                    self.device.end_command_buffer(command_buffer)
                })
                .and_then(|_| {
                    self.device
                        .queue_submit(self.queue, &[submit_info], vk::Fence::null())
                })
                .and_then(|_| self.device.queue_wait_idle(self.queue))
        };

        unsafe {
            self.device
                .free_command_buffers(self.command_pool, &[command_buffer]);
        }

        return result.map_err(|e| ObjError::upload(format!("Failed to copy buffer: {}", e)));
    }

    fn find_memory_type(
        &self,
        type_filter: u32,
        properties: vk::MemoryPropertyFlags,
    ) -> ObjResult<u32> {
        let memory_properties = unsafe {
            self.instance
                .get_physical_device_memory_properties(self.physical_device)
        };

        for index in 0..memory_properties.memory_type_count {
            if (type_filter & (1 << index) != 0)
                && ((memory_properties.memory_types[index as usize].property_flags & properties)
                    == properties)
            {
                return Ok(index);
            }
        }

        return Err(ObjError::upload("Failed to find suitable memory type"));
    }
}
