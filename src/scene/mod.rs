pub mod assembly;
pub mod presenter;

pub use assembly::{MeshData, RocketAssembly};
pub use presenter::{Hud, LogView, NullHud, NullLogView, NullPresenter, ScenePresenter};
