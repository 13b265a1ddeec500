/// Represents all errors that can occur during tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token was found and skipped.
    #[error("Error on line {line}: Illegal character {character:?}.")]
    IllegalCharacter {
        /// The skipped character.
        character: char,
        /// The source line where the character appeared.
        line:      usize,
    },
}
