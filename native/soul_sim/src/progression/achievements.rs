//! Path: native/soul_sim/src/progression/achievements.rs
//! Summary: 実績の解除状態と永続化（JSON 配列 [{id, unlocked}]）

use super::store::KeyValueStore;
use crate::error::StoreError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use soul_core::achievement::{AchievementId, ACHIEVEMENTS};

/// 永続化レコード 1 件分
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UnlockRecord {
    pub id:       String,
    pub unlocked: bool,
}

pub struct AchievementTracker {
    unlocked: FxHashSet<AchievementId>,
    store:    Box<dyn KeyValueStore>,
    key:      String,
}

impl AchievementTracker {
    /// ストアから解除状態を読み込む。読めなければ未解除から始める。
    pub fn load(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        let unlocked = match read_unlocked(store.as_ref(), key) {
            Ok(set) => set,
            Err(e) => {
                log::warn!("achievements: failed to load `{key}`, starting fresh: {e}");
                FxHashSet::default()
            }
        };
        log::debug!("achievements: {} unlocked from storage", unlocked.len());
        Self { unlocked, store, key: key.to_string() }
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// 未解除なら解除して保存し true。解除済みなら何もせず false。
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if !self.unlocked.insert(id) {
            return false;
        }
        if let Err(e) = self.persist() {
            log::error!("achievements: failed to save `{}`: {e}", self.key);
        }
        true
    }

    /// カタログ順の全レコード
    pub fn records(&self) -> Vec<UnlockRecord> {
        ACHIEVEMENTS
            .iter()
            .map(|d| UnlockRecord {
                id:       d.id.key().to_string(),
                unlocked: self.is_unlocked(d.id),
            })
            .collect()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.records())?;
        self.store.set(&self.key, &json)
    }
}

fn read_unlocked(store: &dyn KeyValueStore, key: &str) -> Result<FxHashSet<AchievementId>, StoreError> {
    let Some(json) = store.get(key)? else {
        return Ok(FxHashSet::default());
    };
    let records: Vec<UnlockRecord> = serde_json::from_str(&json)?;
    Ok(records
        .iter()
        .filter(|r| r.unlocked)
        .filter_map(|r| {
            let id = AchievementId::from_key(&r.id);
            if id.is_none() {
                log::warn!("achievements: ignoring unknown id `{}`", r.id);
            }
            id
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ACHIEVEMENT_STORAGE_KEY;
    use crate::progression::store::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                key:    key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            self.get(key).map(|_| ())
        }
    }

    #[test]
    fn loads_previous_unlocks() {
        let json = r#"[{"id":"firstKill","unlocked":true},{"id":"kill10","unlocked":false}]"#;
        let store = MemoryStore::with_value(ACHIEVEMENT_STORAGE_KEY, json);
        let tracker = AchievementTracker::load(Box::new(store), ACHIEVEMENT_STORAGE_KEY);
        assert!(tracker.is_unlocked(AchievementId::FirstKill));
        assert!(!tracker.is_unlocked(AchievementId::Kill10));
    }

    #[test]
    fn corrupt_json_means_no_unlocks() {
        let store = MemoryStore::with_value(ACHIEVEMENT_STORAGE_KEY, "{oops");
        let tracker = AchievementTracker::load(Box::new(store), ACHIEVEMENT_STORAGE_KEY);
        assert_eq!(tracker.unlocked_count(), 0);
    }

    #[test]
    fn unreadable_store_means_no_unlocks_and_unlock_still_works() {
        let mut tracker = AchievementTracker::load(Box::new(BrokenStore), ACHIEVEMENT_STORAGE_KEY);
        assert_eq!(tracker.unlocked_count(), 0);
        assert!(tracker.unlock(AchievementId::Kill50));
        assert!(tracker.is_unlocked(AchievementId::Kill50));
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut tracker =
            AchievementTracker::load(Box::new(MemoryStore::new()), ACHIEVEMENT_STORAGE_KEY);
        assert!(tracker.unlock(AchievementId::FirstKill));
        assert!(!tracker.unlock(AchievementId::FirstKill));
        assert_eq!(tracker.unlocked_count(), 1);
    }

    #[test]
    fn records_cover_whole_catalog() {
        let mut tracker =
            AchievementTracker::load(Box::new(MemoryStore::new()), ACHIEVEMENT_STORAGE_KEY);
        tracker.unlock(AchievementId::AllElements);
        let records = tracker.records();
        assert_eq!(records.len(), ACHIEVEMENTS.len());
        assert!(records.iter().any(|r| r.id == "allElements" && r.unlocked));
        assert!(records.iter().any(|r| r.id == "firstKill" && !r.unlocked));
    }
}
