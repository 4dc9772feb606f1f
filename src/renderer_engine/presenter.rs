use log::{debug, info};

use crate::cstr;
use crate::renderer_engine::{
    frame_buffer::FrameBuffer, tools::compile_shader_program, types::QuadVertex,
};

/// Présente la surface CPU dans la fenêtre : upload texture + quad plein écran.
pub struct GlPresenter {
    vao: u32,
    vbo: u32,
    texture: u32,
    shader_program: u32,
    loc_texture: i32,
    texture_size: (u32, u32),
    upload: Vec<u8>,
}

impl GlPresenter {
    /// # Safety
    /// Un contexte OpenGL 3.3 doit être actif sur le thread appelant.
    pub unsafe fn new() -> anyhow::Result<Self> {
        let (vertex_src, fragment_src) = Self::src_shaders();
        let shader_program = compile_shader_program(vertex_src, fragment_src)?;
        let loc_texture = gl::GetUniformLocation(shader_program, cstr!("uFrame"));

        let (mut vao, mut vbo, mut texture) = (0u32, 0u32, 0u32);
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        let vertices: &[u8] = bytemuck::cast_slice(&QuadVertex::FULLSCREEN);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            vertices.len() as isize,
            vertices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        QuadVertex::setup_vertex_attribs();
        gl::BindVertexArray(0);

        gl::GenTextures(1, &mut texture);
        gl::BindTexture(gl::TEXTURE_2D, texture);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);
        gl::BindTexture(gl::TEXTURE_2D, 0);

        info!("🎮 GlPresenter ready (program {}, texture {})", shader_program, texture);

        Ok(Self {
            vao,
            vbo,
            texture,
            shader_program,
            loc_texture,
            texture_size: (0, 0),
            upload: Vec::new(),
        })
    }

    fn src_shaders() -> (&'static str, &'static str) {
        let vertex_src = r#"
        #version 330 core
        layout(location = 0) in vec2 aPos;
        layout(location = 1) in vec2 aUv;
        out vec2 vUv;

        void main() {
            vUv = aUv;
            gl_Position = vec4(aPos, 0.0, 1.0);
        }
        "#;

        let fragment_src = r#"
        #version 330 core
        in vec2 vUv;
        out vec4 FragColor;
        uniform sampler2D uFrame;

        void main() {
            FragColor = vec4(texture(uFrame, vUv).rgb, 1.0);
        }
        "#;
        (vertex_src, fragment_src)
    }

    /// Upload la surface (composée sur `background`) et la dessine sur tout le viewport.
    ///
    /// # Safety
    /// Le contexte OpenGL qui a créé ce presenter doit être actif.
    pub unsafe fn present(
        &mut self,
        surface: &FrameBuffer,
        background: [u8; 3],
        viewport: (i32, i32),
    ) {
        let (w, h) = surface.physical_size();
        self.upload = surface.to_rgba8(background);

        gl::BindTexture(gl::TEXTURE_2D, self.texture);
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
        if self.texture_size != (w, h) {
            debug!("GlPresenter texture resized to {}x{}", w, h);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as i32,
                w as i32,
                h as i32,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                self.upload.as_ptr() as *const _,
            );
            self.texture_size = (w, h);
        } else {
            gl::TexSubImage2D(
                gl::TEXTURE_2D,
                0,
                0,
                0,
                w as i32,
                h as i32,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                self.upload.as_ptr() as *const _,
            );
        }

        gl::Viewport(0, 0, viewport.0, viewport.1);
        gl::Disable(gl::BLEND);
        gl::UseProgram(self.shader_program);
        gl::ActiveTexture(gl::TEXTURE0);
        gl::Uniform1i(self.loc_texture, 0);
        gl::BindVertexArray(self.vao);
        gl::DrawArrays(gl::TRIANGLES, 0, QuadVertex::FULLSCREEN.len() as i32);
        gl::BindVertexArray(0);
        gl::BindTexture(gl::TEXTURE_2D, 0);
    }

    /// Efface la fenêtre avec la couleur de fond (aucune surface disponible).
    ///
    /// # Safety
    /// Le contexte OpenGL doit être actif.
    pub unsafe fn clear(&self, background: [u8; 3]) {
        gl::ClearColor(
            background[0] as f32 / 255.0,
            background[1] as f32 / 255.0,
            background[2] as f32 / 255.0,
            1.0,
        );
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }

    pub fn close(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.texture);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteProgram(self.shader_program);
        }
        self.texture = 0;
        self.vbo = 0;
        self.vao = 0;
        self.shader_program = 0;
        debug!("GlPresenter closed");
    }
}
