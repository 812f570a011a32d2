use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::profile::model::UserInfo;

/// Storage for the onboarding profile. Real apps back this with their own
/// key-value store; the tracker only ever reads through this trait.
pub trait Preferences: Send + Sync {
    fn load_user_info(&self) -> UserInfo;
    fn save_user_info(&self, info: UserInfo);
    fn should_show_onboarding(&self) -> bool;
    fn set_should_show_onboarding(&self, show: bool);
}

#[derive(Debug)]
struct Stored {
    user_info: UserInfo,
    show_onboarding: bool,
}

#[derive(Debug)]
pub struct InMemoryPreferences {
    inner: RwLock<Stored>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::with_user_info(UserInfo::default())
    }

    pub fn with_user_info(user_info: UserInfo) -> Self {
        Self {
            inner: RwLock::new(Stored {
                user_info,
                show_onboarding: true,
            }),
        }
    }

    // Values are plain data, so a poisoned lock still holds a usable state.
    fn read(&self) -> RwLockReadGuard<'_, Stored> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Stored> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl Preferences for InMemoryPreferences {
    fn load_user_info(&self) -> UserInfo {
        self.read().user_info.clone()
    }

    fn save_user_info(&self, info: UserInfo) {
        info!(
            gender = info.gender.name(),
            goal = info.goal_type.name(),
            "user info saved"
        );
        self.write().user_info = info;
    }

    fn should_show_onboarding(&self) -> bool {
        self.read().show_onboarding
    }

    fn set_should_show_onboarding(&self, show: bool) {
        self.write().show_onboarding = show;
    }
}
