//! 输入状态

use unicode_width::UnicodeWidthStr;

/// 单行文本输入，光标以字符为单位
#[derive(Debug, Default, Clone)]
pub struct InputState {
    chars: Vec<char>,
    cursor: usize,
}

impl InputState {
    /// 使用初始值创建，光标在行尾
    pub fn with_value(value: &str) -> Self {
        let chars: Vec<char> = value.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    /// 清空输入
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// 插入字符
    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// 删除光标前字符
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    /// 删除光标后字符
    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// 当前值
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// 以光标为界拆分
    pub fn split_at_cursor(&self) -> (String, String) {
        (
            self.chars[..self.cursor].iter().collect(),
            self.chars[self.cursor..].iter().collect(),
        )
    }

    /// 光标可视位置（按显示宽度）
    pub fn visual_cursor(&self) -> usize {
        self.split_at_cursor().0.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_in_the_middle() {
        let mut input = InputState::with_value("lb");
        input.move_left();
        input.insert_char('a');
        assert_eq!(input.value(), "lab");

        input.move_to_start();
        input.delete();
        assert_eq!(input.value(), "ab");
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_wide_characters() {
        let mut input = InputState::with_value("实验室");
        input.backspace();
        assert_eq!(input.value(), "实验");
        assert_eq!(input.visual_cursor(), 4);

        input.move_left();
        let (left, right) = input.split_at_cursor();
        assert_eq!(left, "实");
        assert_eq!(right, "验");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = InputState::default();
        input.move_left();
        input.move_right();
        input.insert_char('x');
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("x".to_string(), String::new()));
        input.clear();
        assert_eq!(input.value(), "");
    }
}
