pub mod types;
pub mod date;
pub mod parser;
pub mod command;

pub use types::*;
pub use parser::parse_line_porcelain;
pub use command::BlameParser;
