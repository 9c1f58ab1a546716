//! Configuration of the Backlang projection.
//!
//! [`ProjectionOptions`] controls the few behaviors of the formatters that are not fixed by the
//! surface syntax: whether method bodies are decoded, how the free-function container is
//! recognized and whether character literals are escaped.

use crate::metadata::builders::FREE_FUNCTIONS_CONTAINER;

/// Options of the Backlang projection.
///
/// # Examples
///
/// ```rust
/// use backscope::ProjectionOptions;
///
/// let options = ProjectionOptions::new()
///     .with_free_function_container(Some("Globals"))
///     .with_escaped_char_literals(true);
///
/// assert!(options.is_free_function_container_name("Globals"));
/// assert!(!options.is_free_function_container_name("FreeFunctions"));
/// assert!(options.decode_bodies);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Walk the opcode stream of every method body (default: true).
    ///
    /// The body block is emitted either way.
    pub decode_bodies: bool,

    /// Type name that marks the free-function container in addition to the explicit flag
    /// on the declaration (default: `Some("FreeFunctions")`).
    pub free_function_container: Option<String>,

    /// Escape quotes, backslashes and control characters in character literals
    /// (default: false, characters are written verbatim).
    pub escape_char_literals: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            decode_bodies: true,
            free_function_container: Some(FREE_FUNCTIONS_CONTAINER.to_string()),
            escape_char_literals: false,
        }
    }
}

impl ProjectionOptions {
    /// Create options with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable decoding of method bodies
    #[must_use]
    pub fn with_body_decoding(mut self, enable: bool) -> Self {
        self.decode_bodies = enable;
        self
    }

    /// Set the free-function container name; `None` leaves only the explicit flag
    #[must_use]
    pub fn with_free_function_container(mut self, name: Option<&str>) -> Self {
        self.free_function_container = name.map(str::to_string);
        self
    }

    /// Enable or disable escaping of character literals
    #[must_use]
    pub fn with_escaped_char_literals(mut self, enable: bool) -> Self {
        self.escape_char_literals = enable;
        self
    }

    /// Returns `true` if `name` is the configured free-function container name
    #[must_use]
    pub fn is_free_function_container_name(&self, name: &str) -> bool {
        self.free_function_container.as_deref() == Some(name)
    }
}
