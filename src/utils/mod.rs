pub mod parser;

pub use parser::parse_price_card;
