//! Command implementations

mod config;
mod init;
mod status;
pub(crate) mod sync;

pub use config::execute as config;
pub use init::execute as init;
pub use status::execute as status;
pub use sync::execute as sync;
