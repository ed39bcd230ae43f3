//! Main render/view function (View in TEA pattern)


use lplan_app::state::{AppState, Focus, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Only the plan view's scroll bounds are written back to the state.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(&state.settings.endpoint.url)
            .loading(state.loading, state.spinner_frame),
        areas.header,
    );

    frame.render_widget(widgets::LessonForm::new(state), areas.form);

    match &state.result {
        Some(doc) => {
            let plan = widgets::PlanView::new(doc).focused(state.focus == Focus::Results);
            frame.render_stateful_widget(plan, areas.plan, &mut state.plan_view);
        }
        None => frame.render_widget(
            widgets::PlanPlaceholder::new(state.loading, state.spinner_frame),
            areas.plan,
        ),
    }

    frame.render_widget(widgets::KeyHints::new(state), areas.footer);

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Notice => {
            if let Some(notice) = &state.notice {
                frame.render_widget(widgets::NoticeDialog::new(notice), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog_state) = &state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
    }
}
