mod basis;
mod positions;
mod renderer;

pub use basis::BasisPanel;
pub use positions::PositionBars;
pub use renderer::ChartRenderer;
