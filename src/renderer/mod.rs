mod components;
mod declarations;
mod object;
mod renderer;
mod renders;
mod traits;

pub use components::*;
pub use renderer::*;
pub use renders::*;
pub use traits::*;
