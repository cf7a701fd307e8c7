pub mod animation;
pub mod constants;
pub mod drag;
pub mod geometry;
pub mod illustration;
pub mod microwave;
pub mod panel;
pub mod phase;
pub mod projection;
pub mod scene;
pub mod state;

pub use animation::*;
pub use drag::*;
pub use geometry::*;
pub use illustration::*;
pub use microwave::*;
pub use panel::*;
pub use phase::*;
pub use projection::*;
pub use scene::*;
pub use state::*;
