/// Miscellaneous parser utilities.
///
/// Identifier and type-name consumption shared by the declaration, statement and expression chunks.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self, msg: &str) -> Result<Ident, CompileError> {
        if self.peek().is_identifier() {
            Ok(self.advance().value.clone())
        } else {
            Err(self.error(msg))
        }
    }

    /// Consume a type-capable token and return its text.
    ///
    /// Types are recorded by name only; nothing checks that they exist.
    fn type_name(&mut self, msg: &str) -> Result<Ident, CompileError> {
        if self.peek().is_type_capable() {
            Ok(self.advance().value.clone())
        } else {
            Err(self.error(msg))
        }
    }
}
