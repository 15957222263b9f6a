//! Appearance variants (light, dark, high contrast).

use super::contents::AppearanceTag;
use crate::bail;
use crate::error::Result;

/// Appearance flags for a single definition.
///
/// `dark` implies `any`: a definition with a dark variant always also
/// provides the unqualified slot. That relationship is computed by
/// [`Appearance::effective_any`] instead of being stored by the setter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Appearance {
    any: bool,
    light: bool,
    dark: bool,
    high_contrast: bool,
}

impl Appearance {
    /// Creates an appearance set with no flags.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any(&mut self) -> &mut Self {
        self.any = true;
        self
    }

    pub fn light(&mut self) -> &mut Self {
        self.light = true;
        self
    }

    pub fn dark(&mut self) -> &mut Self {
        self.dark = true;
        self
    }

    pub fn high_contrast(&mut self) -> &mut Self {
        self.high_contrast = true;
        self
    }

    /// Enables a flag by manifest token (`any`, `light`, `dark`, `high-contrast`).
    pub fn enable(&mut self, token: &str) -> Result<&mut Self> {
        match token {
            "any" => self.any(),
            "light" => self.light(),
            "dark" => self.dark(),
            "high-contrast" | "contrast" => self.high_contrast(),
            other => bail!("unknown appearance {:?}", other),
        };
        Ok(self)
    }

    /// Whether this definition occupies the unqualified appearance slot.
    pub fn effective_any(&self) -> bool {
        self.any || self.dark
    }

    /// Expands the flags into appearance groups.
    ///
    /// The unqualified group always comes first, followed by dark, light and
    /// high contrast, then the high contrast combinations with dark and light.
    pub fn build(&self) -> Vec<Vec<AppearanceTag>> {
        let mut groups = vec![Vec::new()];

        if self.dark {
            groups.push(vec![AppearanceTag::luminosity("dark")]);
        }
        if self.light {
            groups.push(vec![AppearanceTag::luminosity("light")]);
        }
        if self.high_contrast {
            groups.push(vec![AppearanceTag::high_contrast()]);
            if self.dark {
                groups.push(vec![
                    AppearanceTag::luminosity("dark"),
                    AppearanceTag::high_contrast(),
                ]);
            }
            if self.light {
                groups.push(vec![
                    AppearanceTag::luminosity("light"),
                    AppearanceTag::high_contrast(),
                ]);
            }
        }

        groups
    }

    /// Appearance categories set in both definitions.
    pub fn intersects(&self, other: &Appearance) -> Vec<&'static str> {
        [
            (self.effective_any() && other.effective_any(), "Any"),
            (self.light && other.light, "Light"),
            (self.dark && other.dark, "Dark"),
            (self.high_contrast && other.high_contrast, "HighContrast"),
        ]
        .into_iter()
        .filter_map(|(shared, name)| shared.then_some(name))
        .collect()
    }
}
