//! 汇总显示模块
//!
//! TUI 退出后在终端打印所选启动配置。

use crate::config::LaunchConfig;
use crate::tui::labels::field_label;
use crate::tui::screens::config_wizard::summary_rows;
use rust_i18n::t;
use std::path::Path;

/// 摘要行（标签, 值）
pub fn summary_lines(selection: &LaunchConfig) -> Vec<(String, String)> {
    summary_rows(selection)
        .into_iter()
        .map(|(field, value)| (field_label(field).into_owned(), value))
        .collect()
}

/// 显示启动配置摘要
pub fn display_summary(selection: &LaunchConfig, saved_to: Option<&Path>) {
    println!("\n{}", "═".repeat(60));
    println!("{:^60}", t!("configuration_summary"));
    println!("{}", "═".repeat(60));

    let lines = summary_lines(selection);
    let width = lines
        .iter()
        .map(|(label, _)| unicode_width::UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    println!();
    for (label, value) in &lines {
        let pad = width.saturating_sub(unicode_width::UnicodeWidthStr::width(label.as_str()));
        println!("  {}{} : {}", label, " ".repeat(pad), value);
    }

    if let Some(path) = saved_to {
        println!("\n  {} {}", t!("config_saved_to"), path.display());
    }

    println!("\n{}", "═".repeat(60));
}

/// 是否运行交互模式（无参数时启用）
pub fn should_run_interactive() -> bool {
    let args: Vec<String> = std::env::args().collect();
    args.len() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines_cover_every_field() {
        let lines = summary_lines(&LaunchConfig::default());
        assert_eq!(lines.len(), crate::form::FieldName::all().len());
        assert!(lines.iter().any(|(_, value)| value == "CPU"));
        assert!(lines.iter().any(|(_, value)| value == "Linux"));
    }
}
