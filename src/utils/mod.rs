pub mod timer;
pub mod tools;

pub use self::timer::RepeatTimer;
pub use self::tools::show_rust_core_dependencies;
