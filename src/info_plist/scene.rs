//! Scene manifest (`UIApplicationSceneManifest`).

use crate::error::{Error, Result};
use plist::{Dictionary, Value};

/// Scene-based life-cycle configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneManifest {
    multiple_windows: bool,
    application: Option<SceneConfiguration>,
    external_display: Option<SceneConfiguration>,
}

impl SceneManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the app supports two or more scenes at once.
    pub fn multiple_windows(&mut self, value: bool) -> &mut Self {
        self.multiple_windows = value;
        self
    }

    /// Scenes shown on the device's main screen.
    pub fn application(&mut self) -> &mut SceneConfiguration {
        self.application.get_or_insert_with(SceneConfiguration::default)
    }

    /// Scenes shown on an externally connected display.
    pub fn external_display(&mut self) -> &mut SceneConfiguration {
        self.external_display
            .get_or_insert_with(SceneConfiguration::default)
    }

    pub fn validate(&self) -> Result<()> {
        let application = self.application.as_ref().ok_or_else(|| {
            Error::MissingProperty("SceneManifest.Application (UISceneConfigurations)".into())
        })?;
        application.validate()?;

        if let Some(external) = &self.external_display {
            external.validate()?;
        }
        Ok(())
    }

    pub(crate) fn build(&self) -> Value {
        let mut configurations = Dictionary::new();
        if let Some(application) = &self.application {
            configurations.insert(
                "UIWindowSceneSessionRoleApplication".into(),
                application.build(),
            );
        }
        if let Some(external) = &self.external_display {
            configurations.insert(
                "UIWindowSceneSessionRoleExternalDisplay".into(),
                external.build(),
            );
        }

        let mut dict = Dictionary::new();
        dict.insert(
            "UIApplicationSupportsMultipleScenes".into(),
            self.multiple_windows.into(),
        );
        dict.insert(
            "UISceneConfigurations".into(),
            Value::Dictionary(configurations),
        );
        Value::Dictionary(dict)
    }
}

/// Objects and storyboard UIKit uses to create one scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneConfiguration {
    name: String,
    class_name: Option<String>,
    delegate_class_name: Option<String>,
    storyboard: Option<String>,
}

impl SceneConfiguration {
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn class_name(&mut self, class_name: impl Into<String>) -> &mut Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn delegate_class_name(&mut self, class_name: impl Into<String>) -> &mut Self {
        self.delegate_class_name = Some(class_name.into());
        self
    }

    pub fn storyboard(&mut self, storyboard: impl Into<String>) -> &mut Self {
        self.storyboard = Some(storyboard.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingProperty(
                "SceneConfiguration.Name (UISceneConfigurationName)".into(),
            ));
        }
        Ok(())
    }

    fn build(&self) -> Value {
        let mut dict = Dictionary::new();
        dict.insert("UISceneConfigurationName".into(), self.name.clone().into());

        let optional = [
            ("UISceneClassName", &self.class_name),
            ("UISceneDelegateClassName", &self.delegate_class_name),
            ("UISceneStoryboardFile", &self.storyboard),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
                dict.insert(key.into(), value.clone().into());
            }
        }

        Value::Dictionary(dict)
    }
}
