pub mod assets;
pub mod canvas;
pub mod frame_loop;

pub use assets::{AssetLoader, Sprites};
pub use canvas::CanvasSurface;
pub use frame_loop::FrameLoop;
