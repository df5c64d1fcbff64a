pub mod admin;
pub mod enter;
pub mod pick_winner;
pub mod query;
pub mod withdraw;

pub use admin::*;
pub use enter::*;
pub use pick_winner::*;
pub use query::*;
pub use withdraw::*;
