//! Starter block skeletons for new pages.

use std::fmt;

use crate::model::{Block, BlockType};

/// The page templates offered when creating a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    Meeting,
    Project,
    Daily,
    #[default]
    Notes,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Meeting,
        TemplateKind::Project,
        TemplateKind::Daily,
        TemplateKind::Notes,
    ];

    /// Looks a template up by name. Unknown names fall back to `Notes`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "meeting" => TemplateKind::Meeting,
            "project" => TemplateKind::Project,
            "daily" => TemplateKind::Daily,
            _ => TemplateKind::Notes,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Meeting => "meeting",
            TemplateKind::Project => "project",
            TemplateKind::Daily => "daily",
            TemplateKind::Notes => "notes",
        }
    }

    /// Title given to a page created from this template.
    pub fn title(self) -> &'static str {
        match self {
            TemplateKind::Meeting => "Meeting Notes",
            TemplateKind::Project => "Project Plan",
            TemplateKind::Daily => "Daily Notes",
            TemplateKind::Notes => "Untitled",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            TemplateKind::Meeting => "🤝",
            TemplateKind::Project => "📊",
            TemplateKind::Daily => "📅",
            TemplateKind::Notes => "📝",
        }
    }

    fn skeleton(self) -> &'static [(BlockType, &'static str)] {
        use BlockType::*;
        match self {
            TemplateKind::Meeting => &[
                (Heading1, "Meeting Notes"),
                (Heading2, "Attendees"),
                (BulletedListItem, ""),
                (Heading2, "Agenda"),
                (NumberedListItem, ""),
                (Heading2, "Notes"),
                (Paragraph, ""),
                (Heading2, "Action Items"),
                (ToDo, ""),
            ],
            TemplateKind::Project => &[
                (Heading1, "Project Plan"),
                (Heading2, "Overview"),
                (Paragraph, ""),
                (Heading2, "Goals"),
                (BulletedListItem, ""),
                (Heading2, "Timeline"),
                (Paragraph, ""),
                (Heading2, "Tasks"),
                (ToDo, ""),
            ],
            TemplateKind::Daily => &[
                (Heading1, "Daily Notes"),
                (Heading2, "Today's Goals"),
                (ToDo, ""),
                (Heading2, "Notes"),
                (Paragraph, ""),
                (Heading2, "Tomorrow"),
                (BulletedListItem, ""),
            ],
            TemplateKind::Notes => &[(Heading1, "Notes"), (Paragraph, "")],
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fresh blocks for `kind`, each with a new id.
pub fn template(kind: TemplateKind) -> Vec<Block> {
    kind.skeleton()
        .iter()
        .map(|&(block_type, text)| Block::new(block_type, text))
        .collect()
}
