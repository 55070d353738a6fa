use bytemuck::{Pod, Zeroable};
use lineal::Vector;

#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        return Point3 { x, y, z };
    }
}

/// Homogeneous point, laid out as four tightly packed `f32`s so a slice of
/// them can be copied straight into a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Point4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Point4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        return Point4 { x, y, z, w };
    }

    /// Position, w = 1.
    pub fn position(x: f32, y: f32, z: f32) -> Self {
        return Point4::new(x, y, z, 1.0);
    }

    /// Direction, w = 0 so translations leave it untouched.
    pub fn direction(x: f32, y: f32, z: f32) -> Self {
        return Point4::new(x, y, z, 0.0);
    }

    pub fn xyz(&self) -> Point3 {
        return Point3::new(self.x, self.y, self.z);
    }
}

impl Default for Point4 {
    fn default() -> Self {
        return Point4::position(0.0, 0.0, 0.0);
    }
}

impl From<Point3> for Point4 {
    fn from(p: Point3) -> Self {
        return Point4::position(p.x, p.y, p.z);
    }
}

impl From<Point3> for Vector<f32, 3> {
    fn from(p: Point3) -> Self {
        return Vector::new([p.x, p.y, p.z]);
    }
}

impl From<Point4> for Vector<f32, 4> {
    fn from(p: Point4) -> Self {
        return Vector::new([p.x, p.y, p.z, p.w]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Point3::default(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(Point4::default(), Point4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn position_and_direction_set_w() {
        assert_eq!(Point4::position(1.0, 2.0, 3.0).w, 1.0);
        assert_eq!(Point4::direction(1.0, 2.0, 3.0).w, 0.0);
        assert_eq!(Point4::from(Point3::new(4.0, 5.0, 6.0)), Point4::position(4.0, 5.0, 6.0));
    }

    #[test]
    fn point4_is_sixteen_packed_bytes() {
        assert_eq!(std::mem::size_of::<Point4>(), 16);
        assert_eq!(std::mem::size_of::<Point3>(), 12);

        let points = [Point4::new(1.0, 2.0, 3.0, 4.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&points);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[12..16], &4.0f32.to_ne_bytes());
    }

    #[test]
    fn converts_into_lineal_vectors() {
        let _v3: Vector<f32, 3> = Point3::new(1.0, 2.0, 3.0).into();
        let _v4: Vector<f32, 4> = Point4::direction(0.0, 1.0, 0.0).into();
    }
}
