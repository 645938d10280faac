// One error type for the whole app.
// Every variant states *where* things went wrong.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// The requested depth needs more segments than the layout can hold
    #[error("Depth {depth} needs {required} segments but the layout holds only {capacity}")]
    CapacityExceeded {
        depth: u32,
        required: usize,
        capacity: usize,
    },

    /// Command line / environment values that cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a PNG snapshot failed
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}
