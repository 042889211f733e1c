pub mod rm;

pub use rm::cmd_rm;
