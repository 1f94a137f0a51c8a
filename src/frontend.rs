use cgolview::{Frame, Input, PauseMode, Viewport};

/// A drawing surface plus the input source attached to it
pub trait Frontend {
    /// Pixel size of the surface and the side of one cell on it
    fn viewport(&self) -> Viewport;

    /// The pause behaviour this frontend can deliver when `requested` is asked for
    fn supported_pause_mode(&self, requested: PauseMode) -> PauseMode {
        requested
    }

    /// Appends every input that arrived since the last call, without blocking
    fn poll_inputs(&mut self, inputs: &mut Vec<Input>) -> anyhow::Result<()>;

    fn present(&mut self, frame: &Frame) -> anyhow::Result<()>;
}
