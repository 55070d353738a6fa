mod builder;
mod mesh;
mod object;
mod scanner;

pub use builder::*;
pub use mesh::*;
pub use object::*;
pub use scanner::*;
