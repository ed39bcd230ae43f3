//! Lesson plan layout
//!
//! [`render_plan`] is the pure mapping from a (possibly partial) response
//! document to the seven sections shown to the user. Both the TUI panel and
//! the headless text output are built from the resulting [`RenderedPlan`].

use std::fmt;

use crate::plan::{LessonPlan, LessonPlanResponse, LessonStep};

/// Separator used to join activities, assessment types and criteria
pub const LIST_SEPARATOR: &str = ", ";

/// The seven sections of a rendered plan, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Skills,
    LessonObjectives,
    Methodology,
    RequiredMaterials,
    LessonStructure,
    Assessment,
    FurtherReading,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Skills,
        SectionKind::LessonObjectives,
        SectionKind::Methodology,
        SectionKind::RequiredMaterials,
        SectionKind::LessonStructure,
        SectionKind::Assessment,
        SectionKind::FurtherReading,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Skills => "BNCC Skills",
            SectionKind::LessonObjectives => "Lesson Objectives",
            SectionKind::Methodology => "Methodology",
            SectionKind::RequiredMaterials => "Required Materials",
            SectionKind::LessonStructure => "Lesson Structure",
            SectionKind::Assessment => "Assessment",
            SectionKind::FurtherReading => "Further Reading",
        }
    }
}

/// One renderable element of a section body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Free text paragraph
    Paragraph(String),
    /// `Label: value` line
    Labeled { label: &'static str, value: String },
    /// Bulleted list item
    Bullet(String),
    /// Bulleted lesson step, `name (time): a1, a2`
    Step {
        name: String,
        time: String,
        activities: Vec<String>,
    },
}

impl Block {
    /// Plain-text form of the block (without bullet marker)
    pub fn text(&self) -> String {
        match self {
            Block::Paragraph(text) | Block::Bullet(text) => text.clone(),
            Block::Labeled { label, value } => format!("{label}: {value}"),
            Block::Step {
                name,
                time,
                activities,
            } => step_line(name, time, activities),
        }
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, Block::Bullet(_) | Block::Step { .. })
    }
}

/// Format a lesson step as `name (time): activity1, activity2`
pub fn step_line(name: &str, time: &str, activities: &[String]) -> String {
    if activities.is_empty() {
        format!("{name} ({time}):")
    } else {
        format!("{name} ({time}): {}", activities.join(LIST_SEPARATOR))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A laid-out lesson plan: always seven sections, possibly with empty bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPlan {
    pub sections: Vec<Section>,
}

impl RenderedPlan {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Sections whose body has at least one block
    pub fn populated(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_empty())
    }
}

/// Lay out a response document into its seven sections
pub fn render_plan(doc: &LessonPlanResponse) -> RenderedPlan {
    layout(&LessonPlan::normalize(doc))
}

/// Lay out an already-normalized plan
pub fn layout(plan: &LessonPlan) -> RenderedPlan {
    let sections = SectionKind::ALL
        .into_iter()
        .map(|kind| Section {
            kind,
            blocks: section_blocks(plan, kind),
        })
        .collect();
    RenderedPlan { sections }
}

fn bullets(items: &[String]) -> Vec<Block> {
    items.iter().cloned().map(Block::Bullet).collect()
}

fn labeled_if_present(label: &'static str, value: String) -> Option<Block> {
    (!value.is_empty()).then_some(Block::Labeled { label, value })
}

fn step_block(step: &LessonStep) -> Block {
    Block::Step {
        name: step.name.clone(),
        time: step.time.clone(),
        activities: step.activities.clone(),
    }
}

fn section_blocks(plan: &LessonPlan, kind: SectionKind) -> Vec<Block> {
    match kind {
        SectionKind::Skills => bullets(&plan.skills),
        SectionKind::LessonObjectives => bullets(&plan.lesson_objectives),
        SectionKind::Methodology => {
            let methodology = &plan.methodology;
            let mut blocks = Vec::new();
            if !methodology.justification.is_empty() {
                blocks.push(Block::Paragraph(methodology.justification.clone()));
            }
            blocks.extend(bullets(&methodology.suggested_methods));
            blocks
        }
        SectionKind::RequiredMaterials => bullets(&plan.required_materials),
        SectionKind::LessonStructure => {
            let structure = &plan.lesson_structure;
            labeled_if_present("Total time", structure.total_time.clone())
                .into_iter()
                .chain(structure.steps.iter().map(step_block))
                .collect()
        }
        SectionKind::Assessment => {
            let assessment = &plan.assessment;
            [
                labeled_if_present("Types", assessment.types.join(LIST_SEPARATOR)),
                labeled_if_present("Criteria", assessment.criteria.join(LIST_SEPARATOR)),
            ]
            .into_iter()
            .flatten()
            .collect()
        }
        SectionKind::FurtherReading => bullets(&plan.further_reading),
    }
}

impl fmt::Display for RenderedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title())?;
            for block in &section.blocks {
                if block.is_bullet() {
                    writeln!(f, "  - {}", block.text())?;
                } else {
                    writeln!(f, "  {}", block.text())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> LessonPlanResponse {
        LessonPlanResponse::from_value(value).unwrap()
    }

    #[test]
    fn test_skills_only_populates_one_section() {
        let rendered = render_plan(&doc(json!({"habilidades_bncc": ["A", "B"]})));

        let skills = rendered.section(SectionKind::Skills).unwrap();
        assert_eq!(
            skills.blocks,
            vec![Block::Bullet("A".into()), Block::Bullet("B".into())]
        );
        let populated: Vec<_> = rendered.populated().map(|s| s.kind).collect();
        assert_eq!(populated, vec![SectionKind::Skills]);
    }

    #[test]
    fn test_empty_document_has_seven_empty_sections() {
        let rendered = render_plan(&doc(json!({})));

        let kinds: Vec<_> = rendered.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
        assert!(rendered.sections.iter().all(Section::is_empty));
    }

    #[test]
    fn test_step_line_format() {
        let rendered = render_plan(&doc(json!({
            "estrutura_aula": {
                "etapas": [{"nome": "Intro", "tempo": "5min", "atividades": ["Discussão", "Leitura"]}]
            }
        })));
        let structure = rendered.section(SectionKind::LessonStructure).unwrap();
        assert_eq!(structure.blocks.len(), 1);
        assert_eq!(structure.blocks[0].text(), "Intro (5min): Discussão, Leitura");
    }

    #[test]
    fn test_step_without_activities_has_no_trailing_space() {
        assert_eq!(step_line("Wrap-up", "10min", &[]), "Wrap-up (10min):");
    }

    #[test]
    fn test_step_line_keeps_activity_text_verbatim() {
        let activities = vec!["Leitura ".to_string(), "Debate  ".to_string()];
        assert_eq!(
            step_line("Intro", "5min", &activities),
            "Intro (5min): Leitura , Debate  "
        );
    }

    #[test]
    fn test_total_time_precedes_steps() {
        let rendered = render_plan(&doc(json!({
            "estrutura_aula": {
                "tempo_total": "50 min",
                "etapas": [
                    {"nome": "Intro", "tempo": "5min", "atividades": ["Discussão"]},
                    {"nome": "Prática", "tempo": "40min", "atividades": ["Exercícios"]}
                ]
            }
        })));
        let texts: Vec<_> = rendered
            .section(SectionKind::LessonStructure)
            .unwrap()
            .blocks
            .iter()
            .map(Block::text)
            .collect();
        assert_eq!(
            texts,
            vec![
                "Total time: 50 min",
                "Intro (5min): Discussão",
                "Prática (40min): Exercícios"
            ]
        );
    }

    #[test]
    fn test_methodology_paragraph_then_methods() {
        let rendered = render_plan(&doc(json!({
            "metodologia": {
                "justificativa": "Students learn by doing",
                "metodologias_sugeridas": ["Estudo de caso", "Painel"]
            }
        })));
        assert_eq!(
            rendered.section(SectionKind::Methodology).unwrap().blocks,
            vec![
                Block::Paragraph("Students learn by doing".into()),
                Block::Bullet("Estudo de caso".into()),
                Block::Bullet("Painel".into()),
            ]
        );
    }

    #[test]
    fn test_assessment_lines_are_joined() {
        let rendered = render_plan(&doc(json!({
            "avaliacao": {"tipos": ["Formativa", "Somativa"], "criterios": ["Clareza"]}
        })));
        let texts: Vec<_> = rendered
            .section(SectionKind::Assessment)
            .unwrap()
            .blocks
            .iter()
            .map(Block::text)
            .collect();
        assert_eq!(texts, vec!["Types: Formativa, Somativa", "Criteria: Clareza"]);
    }

    #[test]
    fn test_assessment_with_only_criteria() {
        let rendered = render_plan(&doc(json!({"avaliacao": {"criterios": ["Clareza"]}})));
        let section = rendered.section(SectionKind::Assessment).unwrap();
        assert_eq!(
            section.blocks,
            vec![Block::Labeled {
                label: "Criteria",
                value: "Clareza".into()
            }]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let rendered = render_plan(&doc(json!({"para_saber_mais": ["z", "a", "m"]})));
        let texts: Vec<_> = rendered
            .section(SectionKind::FurtherReading)
            .unwrap()
            .blocks
            .iter()
            .map(Block::text)
            .collect();
        assert_eq!(texts, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let document = doc(json!({
            "habilidades_bncc": ["EF01"],
            "estrutura_aula": {"tempo_total": "1h", "etapas": [{"nome": "A", "tempo": "1h"}]}
        }));
        let first = render_plan(&document);
        let second = render_plan(&document);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_plain_text_output() {
        let rendered = render_plan(&doc(json!({
            "habilidades_bncc": ["EF06CI01"],
            "metodologia": {"justificativa": "Active learning", "metodologias_sugeridas": ["Seminário"]},
            "estrutura_aula": {
                "tempo_total": "50 min",
                "etapas": [{"nome": "Intro", "tempo": "5min", "atividades": ["Discussão", "Leitura"]}]
            },
            "avaliacao": {"tipos": ["Formativa"], "criterios": ["Participação", "Clareza"]}
        })));

        insta::assert_snapshot!(rendered.to_string(), @r"
        BNCC Skills
          - EF06CI01

        Lesson Objectives

        Methodology
          Active learning
          - Seminário

        Required Materials

        Lesson Structure
          Total time: 50 min
          - Intro (5min): Discussão, Leitura

        Assessment
          Types: Formativa
          Criteria: Participação, Clareza

        Further Reading
        ");
    }
}
