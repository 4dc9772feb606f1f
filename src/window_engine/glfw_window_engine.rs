use super::r#trait::{ImguiSystem, WindowEngine, WindowEvents};
use anyhow::{anyhow, Result};
use glfw::Context;
use imgui::Context as ImContext;
use imgui_glfw_rs::glfw;
use imgui_glfw_rs::ImguiGLFW;
use log::info;

use crate::renderer_engine::tools::show_opengl_context_info;

/// Plus petite fenêtre où les panneaux joueurs/chat restent lisibles.
const MIN_WINDOW_SIZE: (u32, u32) = (480, 360);

/// Fenêtre GLFW (contexte OpenGL 3.3 core) + overlay imgui de la salle.
pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    imgui_system: ImguiSystem,
}

fn create_window(
    glfw: &mut glfw::Glfw,
    width: i32,
    height: i32,
    title: &str,
) -> Result<(glfw::PWindow, WindowEvents)> {
    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
        glfw::OpenGlProfileHint::Core,
    ));

    let width = (width.max(1) as u32).max(MIN_WINDOW_SIZE.0);
    let height = (height.max(1) as u32).max(MIN_WINDOW_SIZE.1);
    glfw.create_window(width, height, title, glfw::WindowMode::Windowed)
        .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW ({} x {})", width, height))
}

/// Événements utiles à la salle : pointeur (appui, déplacement, sortie),
/// clavier pour le chat, redimensionnement et focus.
fn enable_room_polling(window: &mut glfw::PWindow) {
    window.set_key_polling(true);
    window.set_char_polling(true);
    window.set_framebuffer_size_polling(true);
    window.set_cursor_pos_polling(true);
    window.set_cursor_enter_polling(true);
    window.set_mouse_button_polling(true);
    window.set_scroll_polling(true);
    window.set_focus_polling(true);
}

fn create_overlay_context(window: &mut glfw::PWindow) -> Result<ImguiSystem> {
    let mut context = ImContext::create();
    // pas de imgui.ini : la disposition des panneaux est fixée par l'overlay
    context.set_ini_filename(None);
    context.style_mut().use_dark_colors();
    let glfw = ImguiGLFW::new(&mut context, window)?;
    Ok(ImguiSystem { context, glfw })
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| anyhow!("Impossible d'initialiser GLFW"))?;

        let (mut window, events) = create_window(&mut glfw, width, height, title)?;
        window.make_current();
        window.set_size_limits(
            Some(MIN_WINDOW_SIZE.0),
            Some(MIN_WINDOW_SIZE.1),
            None,
            None,
        );
        enable_room_polling(&mut window);
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        gl::load_with(|s| {
            window
                .get_proc_address(s)
                .map_or(std::ptr::null(), |f| f as *const _)
        });
        unsafe {
            show_opengl_context_info();
        }

        let imgui_system = create_overlay_context(&mut window)?;

        let (fb_width, fb_height) = window.get_framebuffer_size();
        info!(
            "✅ Window '{}' ready: framebuffer {} x {}",
            title, fb_width, fb_height
        );

        Ok(Self {
            glfw,
            window,
            events,
            imgui_system,
        })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    fn get_framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn get_events(&self) -> &WindowEvents {
        &self.events
    }

    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem {
        &mut self.imgui_system
    }

    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem) {
        (&mut self.window, &mut self.imgui_system)
    }
}
