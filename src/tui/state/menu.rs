//! 菜单相关状态

use crate::tui::state::selection::SelectionState;

/// 屏幕枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 主菜单
    #[default]
    MainMenu,
    /// 配置向导
    Wizard,
    /// 退出确认
    Exit,
}

/// 菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// 新建启动配置
    NewConfig,
    /// 打开已保存配置
    OpenConfig,
    /// 退出
    Exit,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::NewConfig, MenuItem::OpenConfig, MenuItem::Exit];

impl MenuItem {
    /// 获取显示文本
    pub fn label(&self) -> String {
        match self {
            MenuItem::NewConfig => rust_i18n::t!("menu_option_new_config").to_string(),
            MenuItem::OpenConfig => rust_i18n::t!("menu_option_open_config").to_string(),
            MenuItem::Exit => rust_i18n::t!("menu_option_exit").to_string(),
        }
    }

    /// 迭代所有菜单项
    pub fn iter() -> std::array::IntoIter<MenuItem, 3> {
        MENU_ITEMS.into_iter()
    }

    /// 根据索引获取菜单项
    pub fn from_index(index: usize) -> Option<MenuItem> {
        MENU_ITEMS.get(index).copied()
    }

    /// 菜单项数量
    pub fn count() -> usize {
        MENU_ITEMS.len()
    }
}

/// 菜单状态
pub type MenuState = SelectionState;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Selectable;

    #[test]
    fn test_menu_selection_maps_to_items() {
        let mut menu = MenuState::with_count(MenuItem::count());
        assert_eq!(menu.selected().and_then(MenuItem::from_index), Some(MenuItem::NewConfig));

        menu.prev();
        assert_eq!(menu.selected().and_then(MenuItem::from_index), Some(MenuItem::Exit));
    }
}
