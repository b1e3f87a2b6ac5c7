//! Path: native/soul_sim/src/world/scheduler.rs
//! Summary: 遅延アクションのキュー（fire_at, action）。tick ごとに期限到来分を取り出す。

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScheduledAction {
    /// 一時武器の解除（トークンが一致するときだけ有効）
    RevertTemporaryWeapon { token: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    entries: Vec<(f64, ScheduledAction)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, fire_at_ms: f64, action: ScheduledAction) {
        self.entries.push((fire_at_ms, action));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `now_ms` までに期限が来たアクションを予約時刻順に取り出す
    pub fn take_due(&mut self, now_ms: f64) -> Vec<ScheduledAction> {
        let mut due: Vec<(f64, ScheduledAction)> = Vec::new();
        self.entries.retain(|&(at, action)| {
            if at <= now_ms {
                due.push((at, action));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, action)| action).collect()
    }

    /// セッション終了時に未実行の予約を破棄する
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_actions_come_out_in_time_order() {
        let mut s = Scheduler::new();
        s.schedule(500.0, ScheduledAction::RevertTemporaryWeapon { token: 2 });
        s.schedule(100.0, ScheduledAction::RevertTemporaryWeapon { token: 1 });
        s.schedule(900.0, ScheduledAction::RevertTemporaryWeapon { token: 3 });
        let due = s.take_due(600.0);
        assert_eq!(
            due,
            vec![
                ScheduledAction::RevertTemporaryWeapon { token: 1 },
                ScheduledAction::RevertTemporaryWeapon { token: 2 },
            ]
        );
        assert_eq!(s.len(), 1);
        assert!(s.take_due(899.0).is_empty());
    }
}
