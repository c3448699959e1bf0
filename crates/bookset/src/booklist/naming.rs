//! Display titles for physical books.
//!
//! Core titles come from an ordered rule table evaluated top to bottom; the
//! first rule that applies renders the title.

use crate::catalogue::{Component, SubjectOption};
use crate::config::EngineConfig;

pub const CORE_SUFFIX: &str = " (Core)";
pub const SKILL_BOOK_SUFFIX: &str = " (Skill Book)";
pub const WORKBOOK_SUFFIX: &str = " (Workbook)";
pub const ADDON_SUFFIX: &str = " (Add-on)";
pub const CUSTOM_BOOK_SUFFIX: &str = " (Custom Book)";

/// Naming class of a subject, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    /// English and Maths.
    SkillBook,
    /// EVS, and anything containing "rhymes" or "art".
    Unsuffixed,
    Other,
}

impl SubjectKind {
    /// Classify a subject name, ignoring case.
    pub fn classify(subject_name: &str) -> Self {
        let name = subject_name.to_lowercase();
        if name == "english" || name == "maths" {
            SubjectKind::SkillBook
        } else if name == "evs" || name.contains("rhymes") || name.contains("art") {
            SubjectKind::Unsuffixed
        } else {
            SubjectKind::Other
        }
    }
}

/// Everything the core title rules look at.
#[derive(Debug, Clone, Copy)]
pub struct TitleContext<'a> {
    pub subject_name: &'a str,
    pub option: &'a SubjectOption,
    pub terminal_class: bool,
    pub manual: bool,
    pub subject_kind: SubjectKind,
}

impl<'a> TitleContext<'a> {
    pub fn new(
        class_name: &str,
        subject_name: &'a str,
        option: &'a SubjectOption,
        config: &EngineConfig,
    ) -> Self {
        Self {
            subject_name,
            option,
            terminal_class: config.is_terminal_class(class_name),
            manual: option.is_manual(&config.manual_prefix),
            subject_kind: SubjectKind::classify(subject_name),
        }
    }

    /// Subject shown on a custom book: the option's override, else the record's subject.
    pub fn display_subject(&self) -> &'a str {
        self.option.json_subject.as_deref().unwrap_or(self.subject_name)
    }
}

/// One row of the core title decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreTitleRule {
    /// Manual options print as "<subject> (Custom Book)".
    CustomBook,
    /// English and Maths outside the terminal class are Skill Books.
    SkillBook,
    /// EVS, rhymes and art outside the terminal class carry no suffix.
    Unsuffixed,
    /// Everything else is "(Core)".
    Core,
}

/// The decision table, in evaluation order.
pub const CORE_TITLE_RULES: [CoreTitleRule; 4] = [
    CoreTitleRule::CustomBook,
    CoreTitleRule::SkillBook,
    CoreTitleRule::Unsuffixed,
    CoreTitleRule::Core,
];

impl CoreTitleRule {
    pub fn applies(&self, ctx: &TitleContext<'_>) -> bool {
        match self {
            CoreTitleRule::CustomBook => ctx.manual,
            CoreTitleRule::SkillBook => {
                !ctx.terminal_class && ctx.subject_kind == SubjectKind::SkillBook
            }
            CoreTitleRule::Unsuffixed => {
                !ctx.terminal_class && ctx.subject_kind == SubjectKind::Unsuffixed
            }
            CoreTitleRule::Core => true,
        }
    }

    pub fn render(&self, ctx: &TitleContext<'_>) -> String {
        let label = &ctx.option.label;
        match self {
            CoreTitleRule::CustomBook => format!("{}{}", ctx.display_subject(), CUSTOM_BOOK_SUFFIX),
            CoreTitleRule::SkillBook => format!("{}{}", label, SKILL_BOOK_SUFFIX),
            CoreTitleRule::Unsuffixed => label.clone(),
            CoreTitleRule::Core => format!("{}{}", label, CORE_SUFFIX),
        }
    }
}

/// The rule that decides a core title.
pub fn core_title_rule(ctx: &TitleContext<'_>) -> CoreTitleRule {
    CORE_TITLE_RULES
        .into_iter()
        .find(|rule| rule.applies(ctx))
        .unwrap_or(CoreTitleRule::Core)
}

/// Display title of one component of a selected option.
pub fn component_title(
    component: Component,
    class_name: &str,
    subject_name: &str,
    option: &SubjectOption,
    config: &EngineConfig,
) -> String {
    match component {
        Component::Core => {
            let ctx = TitleContext::new(class_name, subject_name, option, config);
            core_title_rule(&ctx).render(&ctx)
        }
        Component::Work => format!("{}{}", option.label, WORKBOOK_SUFFIX),
        Component::Addon => format!("{}{}", option.label, ADDON_SUFFIX),
    }
}
