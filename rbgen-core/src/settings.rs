//! Generation settings.

use serde::{Deserialize, Serialize};

/// Settings read once per render.
///
/// Settings are passed explicitly to the renderer. Callers that render
/// from several threads with different settings simply hold one value per
/// thread; nothing here is global.
///
/// ```
/// use rbgen_core::Settings;
///
/// let mut settings = Settings::default();
/// assert!(settings.frozen_string_literal());
///
/// settings.set_frozen_string_literal(false);
/// assert!(!settings.frozen_string_literal());
///
/// settings.reset();
/// assert_eq!(settings, Settings::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Emit `# frozen_string_literal: true` at the top of every file.
    pub frozen_string_literal: bool,
}

impl Settings {
    /// Whether the default `frozen_string_literal` directive is emitted.
    pub fn frozen_string_literal(&self) -> bool {
        self.frozen_string_literal
    }

    /// Enable or disable the default `frozen_string_literal` directive.
    pub fn set_frozen_string_literal(&mut self, enabled: bool) -> &mut Self {
        self.frozen_string_literal = enabled;
        self
    }

    /// Builder-style variant of [`Settings::set_frozen_string_literal`].
    pub fn with_frozen_string_literal(mut self, enabled: bool) -> Self {
        self.frozen_string_literal = enabled;
        self
    }

    /// Restore every setting to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frozen_string_literal: true,
        }
    }
}
