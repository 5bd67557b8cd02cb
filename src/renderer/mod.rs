//! Rendering module
//!
//! Backend-agnostic: builds draw commands and packs sprite instances. No GPU
//! or window code lives here.

pub mod draw_list;
pub mod instance;

pub use draw_list::{DrawCommand, TextureId, build_frame, colors};
pub use instance::{SpriteInstance, instances};
