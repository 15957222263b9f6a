use crate::bail;
use crate::error::Result;

/// Display gamut qualifier shared by every definition of a set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gamut {
    /// No gamut qualifier.
    #[default]
    Any,
    /// One variant for display-P3 and one for sRGB.
    SrgbAndDisplayP3,
}

impl Gamut {
    /// Values written to `display-gamut`, in output order.
    pub fn values(self) -> &'static [&'static str] {
        match self {
            Gamut::Any => &[],
            Gamut::SrgbAndDisplayP3 => &["display-P3", "sRGB"],
        }
    }

    /// Parses a manifest token (`any` or `srgb-and-display-p3`).
    pub fn from_token(token: &str) -> Result<Self> {
        Ok(match token {
            "any" => Gamut::Any,
            "srgb-and-display-p3" | "display-p3" => Gamut::SrgbAndDisplayP3,
            other => bail!("unknown gamut {:?}", other),
        })
    }
}
