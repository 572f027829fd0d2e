// Content Store: the fixed universe of retrievable text, assembled once at startup.
// Nothing here touches the network; the embedding index consumes `Corpus` afterwards.

pub mod corpus;
pub mod roster;

pub use corpus::{build_corpus, Corpus};
pub use roster::load_roster;
