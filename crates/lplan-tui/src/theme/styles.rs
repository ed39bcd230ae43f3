//! Semantic style builders

use lplan_core::NoticeLevel;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn required_marker() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// "Black on Cyan" - focused button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn input(focused: bool) -> Style {
    let bg = if focused {
        palette::INPUT_FOCUSED_BG
    } else {
        palette::INPUT_BG
    };
    Style::default().fg(palette::TEXT_PRIMARY).bg(bg)
}

// --- Plan styles ---
pub fn section_title() -> Style {
    Style::default()
        .fg(palette::SECTION_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn bullet() -> Style {
    Style::default().fg(palette::BULLET)
}

pub fn label() -> Style {
    Style::default()
        .fg(palette::LABEL)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Border color for a notice of the given level
pub fn notice_border(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Error => Style::default().fg(palette::STATUS_RED),
        NoticeLevel::Warning => Style::default().fg(palette::STATUS_YELLOW),
        NoticeLevel::Info => Style::default().fg(palette::STATUS_BLUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_input_background_follows_focus() {
        assert_eq!(input(true).bg, Some(palette::INPUT_FOCUSED_BG));
        assert_eq!(input(false).bg, Some(palette::INPUT_BG));
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_error_notice_border_is_red() {
        assert_eq!(
            notice_border(NoticeLevel::Error).fg,
            Some(palette::STATUS_RED)
        );
    }
}
