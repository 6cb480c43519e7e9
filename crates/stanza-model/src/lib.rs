pub mod poem;
pub mod slug;

pub use poem::*;
pub use slug::poet_slug;
