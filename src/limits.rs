//! Resource limits applied while parsing.

/// The default maximum nesting depth (e.g., `[[[]]]`) to prevent stack overflows.
pub const DEFAULT_MAX_DEPTH: usize = 128;
/// The default maximum input size (16 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Bounds on the work a single parse may do.
///
/// The parser recurses once per nested array or object, so `max_depth`
/// also bounds stack usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of arrays and objects.
    pub max_depth: usize,
    /// Maximum input length in bytes.
    pub max_input_size: usize,
}

impl Limits {
    /// Limits that never reject an input.
    ///
    /// Deeply nested documents can then exhaust the call stack.
    pub const fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_input_size: usize::MAX,
        }
    }

    /// Returns a copy with a different nesting limit.
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Returns a copy with a different input size limit.
    pub const fn with_max_input_size(self, max_input_size: usize) -> Self {
        Self {
            max_input_size,
            ..self
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_depth, 128);
        assert_eq!(limits.max_input_size, 16 * 1024 * 1024);
    }

    #[test]
    fn test_builders() {
        let limits = Limits::default().with_max_depth(4).with_max_input_size(64);
        assert_eq!(limits.max_depth, 4);
        assert_eq!(limits.max_input_size, 64);
        assert!(Limits::unbounded().max_depth > limits.max_depth);
    }
}
