mod health;
mod position;
mod snapshot;
mod strategy;
mod trade;

pub use health::Health;
pub use position::{Position, PositionSide};
pub use snapshot::BasisSnapshot;
pub use strategy::{NewStrategy, Strategy};
pub use trade::Trade;
