use thiserror::Error;

/// Everything that can stop the game from starting.
///
/// The simulation step itself never fails; all of these come from setup
/// (window, GPU, sprites, config).
#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("render surface is not usable: {0}")]
    UnsupportedSurface(&'static str),

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("sprite '{0}' not found in sprite folder")]
    MissingSprite(String),

    #[error("sprite '{name}' is wider ({width}px) than the atlas ({max_width}px)")]
    SpriteTooWide { name: String, width: u32, max_width: u32 },

    #[error("failed to decode image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
