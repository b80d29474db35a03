mod msdl_duration_kind;
mod msdl_keyword_kind;
mod msdl_keywords_language;
mod msdl_token_kind;
mod token_kind_set;

pub use msdl_duration_kind::MsdlDurationKind;
pub use msdl_keyword_kind::MsdlKeywordKind;
pub use msdl_keywords_language::{MsdlCommentStyle, MsdlKeywordsLanguage};
pub use msdl_token_kind::MsdlTokenKind;
pub use token_kind_set::MsdlTokenKindSet;
