//! Command-line arguments

use std::path::Path;

use clap::Parser;
use lplan_app::config::{load_settings, Settings};
use lplan_core::{FormField, FormValues};

use crate::headless::OutputFormat;

/// Lesson Planner - generate lesson plans from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "lplan", version)]
#[command(about = "A terminal front-end for an AI-assisted lesson-plan generator", long_about = None)]
pub struct Args {
    /// Generation endpoint URL (overrides .lplan/config.toml)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Submit once and print the plan instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    /// Theme and content of the lesson
    #[arg(long)]
    pub topic: Option<String>,

    /// Target audience, e.g. "6th grade"
    #[arg(long)]
    pub audience: Option<String>,

    /// Lesson duration, e.g. "50 minutes"
    #[arg(long)]
    pub duration: Option<String>,

    #[arg(long)]
    pub objectives: Option<String>,

    #[arg(long)]
    pub materials: Option<String>,

    /// Print the raw response document as JSON (headless only)
    #[arg(long, requires = "headless")]
    pub json: bool,

    /// Write a default .lplan/config.toml and exit
    #[arg(long, conflicts_with = "headless")]
    pub init: bool,
}

impl Args {
    fn field_arg(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::Topic => self.topic.as_ref(),
            FormField::Audience => self.audience.as_ref(),
            FormField::Duration => self.duration.as_ref(),
            FormField::Objectives => self.objectives.as_ref(),
            FormField::Materials => self.materials.as_ref(),
        }
    }

    /// Form prefilled from the field flags; absent flags leave a field empty
    pub fn form_values(&self) -> FormValues {
        let mut form = FormValues::new();
        for field in FormField::ALL {
            if let Some(value) = self.field_arg(field) {
                form.set(field, value.clone());
            }
        }
        form
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Settings from `base`'s config file with the `--endpoint` override applied
    pub fn resolve_settings(&self, base: &Path) -> Settings {
        let mut settings = load_settings(base);
        if let Some(url) = &self.endpoint {
            settings.endpoint.url = url.clone();
        }
        settings
    }
}
