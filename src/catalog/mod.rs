//! Catalog loading and lookup.
//!
//! This is the library core: the TS data model (`message`), the document
//! reader (`ts`), plural-form selection (`plurals`), the lookup index
//! (`translator`), file discovery (`scan`), and the shared command context
//! (`context`).

pub mod context;
pub mod message;
pub mod plurals;
pub mod scan;
pub mod translator;
pub mod ts;

pub use context::CheckContext;
pub use message::{
    Catalog, Location, Message, MessageKey, Translation, TranslationState, TranslationText,
    TsContext,
};
pub use plurals::PluralRule;
pub use translator::Translator;
