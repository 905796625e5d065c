pub mod cli;
pub mod multiply;
pub mod util;
