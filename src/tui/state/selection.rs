//! 通用选择状态

use ratatui::widgets::ListState;

/// 可选择列表通用行为
pub trait Selectable {
    /// 总选项数
    fn count(&self) -> usize;
    /// 获取列表状态引用
    fn list_state(&self) -> &ListState;
    /// 获取列表状态可变引用
    fn list_state_mut(&mut self) -> &mut ListState;

    /// 选择下一个（循环）
    fn next(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let next = self.list_state().selected().map_or(0, |i| (i + 1) % count);
        self.list_state_mut().select(Some(next));
    }

    /// 选择上一个（循环）
    fn prev(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let prev = match self.list_state().selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.list_state_mut().select(Some(prev));
    }

    /// 获取当前选中索引
    fn selected(&self) -> Option<usize> {
        self.list_state()
            .selected()
            .filter(|&i| i < self.count())
    }
}

/// 列表选择状态
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    /// Ratatui 列表状态
    pub list_state: ListState,
    /// 总选项数
    count: usize,
}

impl SelectionState {
    /// 创建选择状态，非空时选中第一项
    pub fn with_count(count: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select((count > 0).then_some(0));
        Self { list_state, count }
    }

    /// 更新选项数并校准选中项
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        let index = match self.list_state.selected() {
            _ if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => Some(0),
        };
        self.list_state.select(index);
    }
}

impl Selectable for SelectionState {
    fn count(&self) -> usize {
        self.count
    }

    fn list_state(&self) -> &ListState {
        &self.list_state
    }

    fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut state = SelectionState::with_count(3);
        state.prev();
        assert_eq!(state.selected(), Some(2));
        state.next();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let mut state = SelectionState::with_count(0);
        state.next();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_set_count_clamps() {
        let mut state = SelectionState::with_count(5);
        state.prev();
        state.set_count(2);
        assert_eq!(state.selected(), Some(1));
        state.set_count(0);
        assert_eq!(state.selected(), None);
    }
}
