use thiserror::Error;

/// Failures that end the desktop client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid game configuration: {0}")]
    Config(#[from] game_core::ConfigError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("software surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("could not start game thread: {0}")]
    Io(#[from] std::io::Error),

    #[error("game thread panicked")]
    GameThread,
}
