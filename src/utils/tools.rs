use log::info;

/// Version d'une dépendance, injectée à la compilation par `build.rs`.
pub fn dependency_version(name: &str) -> &'static str {
    let version = match name {
        "gl" => option_env!("GL"),
        "glfw" => option_env!("GLFW"),
        "cpal" => option_env!("CPAL"),
        "imgui" => option_env!("IMGUI"),
        _ => None,
    };
    version.filter(|v| !v.is_empty()).unwrap_or("Unknown")
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    for name in ["gl", "glfw", "cpal", "imgui"] {
        info!("  {:<5} version: {}", name.to_uppercase(), dependency_version(name));
    }
}
