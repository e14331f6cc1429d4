/// Number lexicon.
///
/// Parses scalar literals written with `K`/`M`/`B` magnitude suffixes or a
/// trailing `%`, and formats values back with the largest fitting suffix.
/// Both directions are pure and stateless.
pub mod num;
