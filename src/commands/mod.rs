pub mod check;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

pub use check::handle_check;
pub use config::handle_config;
pub use generate::{handle_generate, GenerateArgs};
pub use init::handle_init;
pub use list::handle_list;
