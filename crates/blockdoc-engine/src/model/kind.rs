use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of block types, as they appear in the wire `type` field.
///
/// This is the field-less tag; [`BlockKind`] carries the per-type payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "heading_1")]
    Heading1,
    #[serde(rename = "heading_2")]
    Heading2,
    #[serde(rename = "heading_3")]
    Heading3,
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem,
    #[serde(rename = "numbered_list_item")]
    NumberedListItem,
    #[serde(rename = "to_do")]
    ToDo,
    #[serde(rename = "toggle")]
    Toggle,
    #[serde(rename = "code")]
    Code,
}

impl BlockType {
    /// Every block type, in declaration order.
    pub const ALL: [BlockType; 9] = [
        BlockType::Paragraph,
        BlockType::Heading1,
        BlockType::Heading2,
        BlockType::Heading3,
        BlockType::BulletedListItem,
        BlockType::NumberedListItem,
        BlockType::ToDo,
        BlockType::Toggle,
        BlockType::Code,
    ];

    /// The wire name of this type (`heading_1`, `to_do`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading1 => "heading_1",
            BlockType::Heading2 => "heading_2",
            BlockType::Heading3 => "heading_3",
            BlockType::BulletedListItem => "bulleted_list_item",
            BlockType::NumberedListItem => "numbered_list_item",
            BlockType::ToDo => "to_do",
            BlockType::Toggle => "toggle",
            BlockType::Code => "code",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// A block's type together with the fields only that type carries.
///
/// Only `ToDo` has a `checked` flag, so a checked heading cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletedListItem,
    NumberedListItem,
    ToDo { checked: bool },
    Toggle,
    Code,
}

impl BlockKind {
    pub fn block_type(self) -> BlockType {
        match self {
            BlockKind::Paragraph => BlockType::Paragraph,
            BlockKind::Heading1 => BlockType::Heading1,
            BlockKind::Heading2 => BlockType::Heading2,
            BlockKind::Heading3 => BlockType::Heading3,
            BlockKind::BulletedListItem => BlockType::BulletedListItem,
            BlockKind::NumberedListItem => BlockType::NumberedListItem,
            BlockKind::ToDo { .. } => BlockType::ToDo,
            BlockKind::Toggle => BlockType::Toggle,
            BlockKind::Code => BlockType::Code,
        }
    }

    /// `true` only for a checked to-do.
    pub fn is_checked(self) -> bool {
        matches!(self, BlockKind::ToDo { checked: true })
    }

    /// Heading level 1-3, or `None` for non-headings.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Heading3 => Some(3),
            _ => None,
        }
    }
}

/// Converts a bare type into its default kind; to-dos start unchecked.
impl From<BlockType> for BlockKind {
    fn from(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Paragraph => BlockKind::Paragraph,
            BlockType::Heading1 => BlockKind::Heading1,
            BlockType::Heading2 => BlockKind::Heading2,
            BlockType::Heading3 => BlockKind::Heading3,
            BlockType::BulletedListItem => BlockKind::BulletedListItem,
            BlockType::NumberedListItem => BlockKind::NumberedListItem,
            BlockType::ToDo => BlockKind::ToDo { checked: false },
            BlockType::Toggle => BlockKind::Toggle,
            BlockType::Code => BlockKind::Code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BlockType::Paragraph, "paragraph")]
    #[case(BlockType::Heading1, "heading_1")]
    #[case(BlockType::Heading2, "heading_2")]
    #[case(BlockType::Heading3, "heading_3")]
    #[case(BlockType::BulletedListItem, "bulleted_list_item")]
    #[case(BlockType::NumberedListItem, "numbered_list_item")]
    #[case(BlockType::ToDo, "to_do")]
    #[case(BlockType::Toggle, "toggle")]
    #[case(BlockType::Code, "code")]
    fn wire_names_agree_with_serde(#[case] block_type: BlockType, #[case] name: &str) {
        assert_eq!(block_type.as_str(), name);
        assert_eq!(name.parse::<BlockType>().unwrap(), block_type);
        assert_eq!(
            serde_json::to_string(&block_type).unwrap(),
            format!("\"{name}\"")
        );
    }

    #[test]
    fn unknown_type_name_is_rejected() {
        let err = "callout".parse::<BlockType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown block type: callout");
    }

    #[test]
    fn todo_kind_defaults_to_unchecked() {
        assert_eq!(
            BlockKind::from(BlockType::ToDo),
            BlockKind::ToDo { checked: false }
        );
        assert!(!BlockKind::from(BlockType::ToDo).is_checked());
        assert!(BlockKind::ToDo { checked: true }.is_checked());
    }

    #[test]
    fn kind_maps_back_to_its_type() {
        for block_type in BlockType::ALL {
            assert_eq!(BlockKind::from(block_type).block_type(), block_type);
        }
    }

    #[test]
    fn heading_levels() {
        assert_eq!(BlockKind::Heading2.heading_level(), Some(2));
        assert_eq!(BlockKind::Paragraph.heading_level(), None);
    }
}
