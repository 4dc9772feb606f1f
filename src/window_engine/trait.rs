use anyhow::Result;
use imgui_glfw_rs::glfw;

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

pub struct ImguiSystem {
    pub context: imgui::Context,
    pub glfw: imgui_glfw_rs::ImguiGLFW,
}

/// Taille logique de la zone de dessin et facteur d'échelle vers le framebuffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl SurfaceMetrics {
    /// `dpr` = largeur framebuffer / largeur fenêtre ; 1 si la fenêtre est réduite.
    pub fn from_sizes(window: (i32, i32), framebuffer: (i32, i32)) -> Self {
        let (width, height) = window;
        let dpr = if width > 0 && framebuffer.0 > 0 {
            framebuffer.0 as f32 / width as f32
        } else {
            1.0
        };
        Self {
            width: width.max(0) as f32,
            height: height.max(0) as f32,
            dpr,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

pub trait WindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self>
    where
        Self: Sized;

    fn poll_events(&mut self);
    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    /// Taille logique (coordonnées écran de la souris).
    fn get_size(&self) -> (i32, i32);
    /// Taille en pixels physiques du framebuffer.
    fn get_framebuffer_size(&self) -> (i32, i32);
    fn get_events(&self) -> &WindowEvents;
    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem;

    // Helper method to get both window and imgui system for rendering
    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem);

    fn surface_metrics(&self) -> SurfaceMetrics {
        SurfaceMetrics::from_sizes(self.get_size(), self.get_framebuffer_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidpi_framebuffer_gives_dpr_2() {
        let m = SurfaceMetrics::from_sizes((1024, 800), (2048, 1600));
        assert_eq!(m.width, 1024.0);
        assert_eq!(m.height, 800.0);
        assert_eq!(m.dpr, 2.0);
        assert!(!m.is_empty());
    }

    #[test]
    fn minimized_window_keeps_dpr_1() {
        let m = SurfaceMetrics::from_sizes((0, 0), (0, 0));
        assert_eq!(m.dpr, 1.0);
        assert!(m.is_empty());
    }
}
