//! Command implementations

mod config_cmd;
mod label;
mod login;
mod logout;
mod profile;
mod records;
mod verify;

pub use config_cmd::config_cmd;
pub use label::label;
pub use login::{login, refresh};
pub use logout::logout;
pub use profile::profile;
pub use records::records;
pub use verify::verify;
