pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod canvas;
pub use self::canvas::{BlendMode, Canvas};

pub mod color;
pub use self::color::Rgba;

pub mod config;
pub use self::config::RendererConfig;

pub mod error;
pub use self::error::SurfaceError;

pub mod frame_buffer;
pub use self::frame_buffer::FrameBuffer;

pub mod renderer;
pub use self::renderer::Renderer;

pub mod presenter;
pub use self::presenter::GlPresenter;

pub mod tools;
pub use self::tools::show_opengl_context_info;

pub mod types;
pub use self::types::QuadVertex;
