mod keyword_table;
mod lexer_config;
mod msdl_lexer;
mod test;
mod token_data;

pub use keyword_table::KeywordTable;
pub use lexer_config::LexerConfig;
pub use msdl_lexer::MsdlLexer;
pub use token_data::{MsdlToken, MsdlTokenValue};

fn is_name_start(ch: char) -> bool {
    ch.is_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch.is_alphanumeric()
}
