//! Errors raised while setting up the animator and its render surface.
//!
//! The per-frame loop itself never fails; everything here happens before the first
//! frame is drawn.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[cfg(not(target_arch = "wasm32"))]
    #[error("render surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[cfg(target_arch = "wasm32")]
    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
