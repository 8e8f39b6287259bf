pub mod action;
pub mod articles;
pub mod console;
pub mod reducer;
pub mod state;

pub use action::{Action, Effect};
pub use articles::{Articles, DashboardStats};
pub use reducer::{reduce, Transition};
pub use state::{AppState, CategoryView, Screen};
