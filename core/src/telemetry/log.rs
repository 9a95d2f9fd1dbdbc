use log::{debug, info, warn};

/// Thin handle over the `log` facade bound to one component target, so
/// `RUST_LOG=ewcore::catalog=debug` selects a single component.
#[derive(Debug, Clone, Copy)]
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn debug(&self, message: &str) {
        debug!(target: self.target, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!(target: self.target, "{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("ewcore")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_the_crate() {
        assert_eq!(LogManager::default().target(), "ewcore");
        assert_eq!(LogManager::new("ewcore::pattern").target(), "ewcore::pattern");
    }
}
