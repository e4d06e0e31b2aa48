pub mod coin;
pub mod portfolio;
pub mod user;

pub use coin::*;
pub use portfolio::*;
pub use user::*;
