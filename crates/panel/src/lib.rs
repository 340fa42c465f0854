pub mod cycle;
pub mod export;
pub mod rank;
pub mod selection;
pub mod variant;
pub mod view;

pub use cycle::*;
pub use export::*;
pub use rank::*;
pub use selection::*;
pub use variant::*;
pub use view::*;
