pub mod heroes;
pub mod logging;
pub mod serve;
