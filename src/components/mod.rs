pub mod app;
pub mod hero;

pub use app::App;
pub use hero::Hero;
