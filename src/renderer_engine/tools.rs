use gl::types::*;
use log::{debug, info, warn};
use std::ffi::{CStr, CString};
use std::ptr;

#[macro_export]
macro_rules! cstr {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const i8
    };
}

/// Affiche les informations OpenGL / GPU du contexte actuel
/// # Safety
///
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    let get = |name: GLenum| {
        let raw = gl::GetString(name);
        if raw.is_null() {
            return "Unknown".to_string();
        }
        CStr::from_ptr(raw as *const i8)
            .to_str()
            .unwrap_or("Unknown")
            .to_string()
    };

    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", get(gl::VENDOR));
    info!("  Renderer : {}", get(gl::RENDERER));
    info!("  OpenGL   : {}", get(gl::VERSION));
    info!("  GLSL     : {}", get(gl::SHADING_LANGUAGE_VERSION));

    let mut max_texture = 0;
    gl::GetIntegerv(gl::MAX_TEXTURE_SIZE, &mut max_texture);
    debug!("  GL_MAX_TEXTURE_SIZE = {}", max_texture);

    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

/// Compile et lie un programme à partir des sources vertex / fragment.
///
/// # Safety
/// Interagit directement avec des pointeurs OpenGL ; un contexte doit être actif.
pub unsafe fn compile_shader_program(vertex_src: &str, fragment_src: &str) -> anyhow::Result<u32> {
    let vs = compile_shader(vertex_src, gl::VERTEX_SHADER)?;
    let fs = match compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(e) => {
            gl::DeleteShader(vs);
            return Err(e);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);
    gl::DeleteShader(vs);
    gl::DeleteShader(fs);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteProgram(program);
        anyhow::bail!(
            "Shader link failed:\n{}",
            String::from_utf8_lossy(&buf).trim_matches(char::from(0))
        );
    }
    Ok(program)
}

unsafe fn compile_shader(src: &str, ty: GLenum) -> anyhow::Result<u32> {
    let shader = gl::CreateShader(ty);
    let c_str = CString::new(src)?;
    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteShader(shader);

        let log_cow = String::from_utf8_lossy(&buf);
        let log = log_cow.trim_matches(char::from(0));
        let mut msg = format!("❌ Shader compilation failed:\n{}", log);
        if let Some(line) = parse_glsl_error_line(log) {
            msg.push_str(&format_glsl_error_context(src, line));
        }
        anyhow::bail!(msg);
    }
    Ok(shader)
}

/// Essaie d’extraire le numéro de ligne de l’erreur GLSL
/// Supporte plusieurs formats :
/// - "0:12(105): ..." (Mesa / Intel)
/// - "0(12) : error ..." (NVIDIA)
/// - "ERROR: 0:12: ..." (AMD)
fn parse_glsl_error_line(log: &str) -> Option<usize> {
    let first = log.lines().find(|l| !l.trim().is_empty())?;
    let body = first.trim().trim_start_matches("ERROR:").trim_start();

    let digits = |s: &str| -> Option<usize> {
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        s[..end].parse().ok()
    };

    // "<src>:<line>..." ou "<src>(<line>)..."
    let src_end = body.find(|c: char| !c.is_ascii_digit())?;
    let rest = &body[src_end..];
    match rest.chars().next()? {
        ':' | '(' => digits(&rest[1..]),
        _ => None,
    }
}

/// Formate un extrait du code GLSL autour de la ligne fautive
fn format_glsl_error_context(src: &str, line_number: usize) -> String {
    let lines: Vec<&str> = src.lines().collect();
    let mut output = String::new();
    if lines.is_empty() || line_number == 0 {
        return output;
    }

    let context_range = 2;
    output.push_str(&format!("\n🔍 Error context (line {}):\n", line_number));

    let start = line_number.saturating_sub(1 + context_range).min(lines.len());
    let end = (line_number + context_range).min(lines.len());
    for (i, line) in lines[start..end].iter().enumerate() {
        let current = start + i + 1;
        let marker = if current == line_number { '>' } else { ' ' };
        output.push_str(&format!("{} {:>3} | {}\n", marker, current, line));
    }
    output
}
