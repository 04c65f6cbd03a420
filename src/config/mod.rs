mod api;
mod refresh;
mod form;
mod layout;

pub use api::*;
pub use refresh::*;
pub use form::*;
pub use layout::*;
