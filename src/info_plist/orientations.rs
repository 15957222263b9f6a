use crate::bail;
use crate::error::Result;
use plist::Value;

/// Interface orientation supported at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    LandscapeLeft,
    LandscapeRight,
    UpsideDown,
}

impl Orientation {
    pub fn value(self) -> &'static str {
        match self {
            Orientation::Portrait => "UIInterfaceOrientationPortrait",
            Orientation::LandscapeLeft => "UIInterfaceOrientationLandscapeLeft",
            Orientation::LandscapeRight => "UIInterfaceOrientationLandscapeRight",
            Orientation::UpsideDown => "UIInterfaceOrientationUpsideDown",
        }
    }

    pub fn from_token(token: &str) -> Result<Self> {
        Ok(match token {
            "portrait" => Orientation::Portrait,
            "landscape-left" => Orientation::LandscapeLeft,
            "landscape-right" => Orientation::LandscapeRight,
            "upside-down" => Orientation::UpsideDown,
            other => bail!("unknown orientation '{}'", other),
        })
    }
}

/// Ordered, duplicate-free list of orientations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Orientations(Vec<Orientation>);

impl Orientations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, orientation: Orientation) -> &mut Self {
        if !self.0.contains(&orientation) {
            self.0.push(orientation);
        }
        self
    }

    pub fn portrait(&mut self) -> &mut Self {
        self.add(Orientation::Portrait)
    }

    pub fn landscape_left(&mut self) -> &mut Self {
        self.add(Orientation::LandscapeLeft)
    }

    pub fn landscape_right(&mut self) -> &mut Self {
        self.add(Orientation::LandscapeRight)
    }

    pub fn upside_down(&mut self) -> &mut Self {
        self.add(Orientation::UpsideDown)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn build(&self) -> Value {
        Value::Array(self.0.iter().map(|o| Value::from(o.value())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_ignored() {
        let mut orientations = Orientations::new();
        orientations.portrait().landscape_left().portrait();

        let built = orientations.build();
        let values: Vec<&str> = built
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_string)
            .collect();
        assert_eq!(
            values,
            vec![
                "UIInterfaceOrientationPortrait",
                "UIInterfaceOrientationLandscapeLeft"
            ]
        );
    }

    #[test]
    fn test_from_token() {
        assert_eq!(
            Orientation::from_token("upside-down").unwrap(),
            Orientation::UpsideDown
        );
        assert!(Orientation::from_token("sideways").is_err());
    }
}
