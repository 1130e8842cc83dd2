mod check;
mod info;
mod new;

pub use check::{check, CheckArgs};
pub use info::{info, InfoArgs};
pub use new::{new, NewArgs};
