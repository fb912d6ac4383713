//! Availability probe for external ecosystem tools.

/// Answers whether an executable is resolvable on the search path.
pub trait ToolProbe {
    fn is_available(&self, tool: &str) -> bool;
}

/// Probe backed by a real PATH lookup.
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn is_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }
}

/// Probe with a fixed answer, for tests.
#[cfg(test)]
pub struct FixedProbe(pub bool);

#[cfg(test)]
impl ToolProbe for FixedProbe {
    fn is_available(&self, _tool: &str) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_probe_finds_common_tool() {
        // sh is present on any unix-like test machine
        assert!(PathProbe.is_available("sh"));
    }

    #[test]
    fn test_path_probe_rejects_missing_tool() {
        assert!(!PathProbe.is_available("definitely-not-a-real-tool-42"));
    }
}
