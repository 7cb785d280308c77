pub use input::*;
pub use render::*;
pub use session::*;

mod input;
mod render;
mod session;
