//! Reader preference boundary
//!
//! View-mode and accessibility flags belong to the host, not to the
//! pagination core. The core defines the persisted shape and the store
//! capability; a browser host typically backs it with localStorage.

use serde::{Deserialize, Serialize};

/// Top-level presentation of the diary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Notebook,
    List,
    Calendar,
}

/// User preferences that should survive a reload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderPreferences {
    pub view_mode: ViewMode,
    pub reduce_motion: bool,
    pub high_contrast: bool,
}

/// Abstract preference persistence backend
pub trait PreferenceStore {
    type Error;

    fn load(&mut self) -> Result<Option<ReaderPreferences>, Self::Error>;
    fn save(&mut self, preferences: &ReaderPreferences) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        saved: Option<ReaderPreferences>,
    }

    impl PreferenceStore for MemoryStore {
        type Error = std::convert::Infallible;

        fn load(&mut self) -> Result<Option<ReaderPreferences>, Self::Error> {
            Ok(self.saved)
        }

        fn save(&mut self, preferences: &ReaderPreferences) -> Result<(), Self::Error> {
            self.saved = Some(*preferences);
            Ok(())
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), None);

        let preferences = ReaderPreferences {
            view_mode: ViewMode::Calendar,
            reduce_motion: true,
            high_contrast: false,
        };
        store.save(&preferences).unwrap();
        assert_eq!(store.load().unwrap(), Some(preferences));
    }

    #[test]
    fn test_wire_shape() {
        let preferences = ReaderPreferences::default();
        let json = serde_json::to_string(&preferences).unwrap();
        assert_eq!(
            json,
            r#"{"viewMode":"notebook","reduceMotion":false,"highContrast":false}"#
        );
    }
}
