//! Application state (Model in TEA pattern)

use lplan_core::{FormField, FormValues, LessonPlanResponse, Notice};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::plan_view_state::PlanViewState;

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Generate with AI";
/// Submit button label while a request is in flight
pub const SUBMIT_LABEL_LOADING: &str = "Generating plan...";

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Form and plan panel
    #[default]
    Normal,

    /// Blocking notice dialog; must be dismissed before anything else
    Notice,

    /// Quit confirmation dialog
    ConfirmDialog,
}

/// Element of the screen that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    SubmitButton,
    /// Generated plan panel; only reachable while a result is shown
    Results,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FormField::Topic)
    }
}

impl Focus {
    /// Focus cycle in tab order
    pub fn order(has_result: bool) -> Vec<Focus> {
        let mut order: Vec<Focus> = FormField::ALL.into_iter().map(Focus::Field).collect();
        order.push(Focus::SubmitButton);
        if has_result {
            order.push(Focus::Results);
        }
        order
    }

    pub fn next(self, has_result: bool) -> Focus {
        let order = Focus::order(has_result);
        match order.iter().position(|f| *f == self) {
            Some(i) => order[(i + 1) % order.len()],
            None => Focus::default(),
        }
    }

    pub fn previous(self, has_result: bool) -> Focus {
        let order = Focus::order(has_result);
        match order.iter().position(|f| *f == self) {
            Some(i) => order[(i + order.len() - 1) % order.len()],
            None => Focus::default(),
        }
    }

    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::Field(field) => Some(field),
            _ => None,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Current text of the five form fields
    pub form: FormValues,
    pub focus: Focus,

    /// A generation request is in flight
    pub loading: bool,

    /// Last successful generation result
    pub result: Option<LessonPlanResponse>,

    /// Set when a submit was blocked by missing required fields
    pub validation_hint: Option<String>,

    /// Notice currently shown in the modal dialog
    pub notice: Option<Notice>,

    pub confirm_dialog_state: Option<ConfirmDialogState>,

    pub plan_view: PlanViewState,

    /// Animation frame for the loading indicator
    pub spinner_frame: usize,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            form: FormValues::new(),
            focus: Focus::default(),
            loading: false,
            result: None,
            validation_hint: None,
            notice: None,
            confirm_dialog_state: None,
            plan_view: PlanViewState::new(),
            spinner_frame: 0,
            settings,
        }
    }

    /// Start from prefilled form values
    pub fn with_form(mut self, form: FormValues) -> Self {
        self.form = form;
        self
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Label of the submit control for the current loading state
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Quit, or ask first when a request is still in flight
    pub fn request_quit(&mut self) {
        if self.loading && self.settings.behavior.confirm_quit {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_while_generating());
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.ui_mode = UiMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        if self.ui_mode == UiMode::Notice {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn tick(&mut self) {
        if self.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
