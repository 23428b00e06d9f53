pub mod ambient;
pub mod animation;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod detector;
pub mod error;
pub mod landmarks;
pub mod layout;
pub mod resolver;
pub mod rig;
pub mod session;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::*;
pub use classifier::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use detector::*;
pub use error::*;
pub use landmarks::*;
pub use resolver::*;
pub use rig::*;
pub use session::*;
