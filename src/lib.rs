pub mod cliopt;
pub mod error;
pub mod export;
pub mod model;
pub mod output;
pub mod runner;
pub mod utils;
