/// MaskGenerator is a strategy trait for highlighting one lexeme against another.
/// Each implementation handles one lexeme type and decides which characters of
/// the target lexeme count as different from the source lexeme.
pub trait MaskGenerator: Send + Sync {
    /// Build the mask for `target` compared against `source`.
    ///
    /// - `target`: the expected lexeme; the mask has one entry per character of it.
    /// - `source`: the actual lexeme it is compared against.
    ///
    /// `true` entries mark characters that should be flagged.
    fn generate(&self, target: &str, source: &str) -> Vec<bool>;
}
