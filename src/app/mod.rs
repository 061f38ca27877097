pub mod render;
pub mod session;

pub use render::cart_summary;
pub use session::CartSession;
