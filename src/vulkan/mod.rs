mod buffer;
mod vertex;

pub use buffer::*;
pub use vertex::*;
