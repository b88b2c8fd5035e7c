//! Test payload utilities.
use fake::faker::lorem::raw::Word;
use fake::locales::EN;
use fake::Fake;

/// Creates a random word payload.
pub fn word() -> String {
    Word(EN).fake()
}

/// Creates a random weight payload.
pub fn weight() -> u32 {
    (0u32..100).fake()
}
