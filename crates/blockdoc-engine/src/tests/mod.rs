use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::model::{Block, BlockType};

/// Create a temporary workspace directory
pub fn create_test_workspace() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test page file with content
pub fn create_test_file(workspace: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = workspace.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A small nested forest using every block type
pub fn sample_forest() -> Vec<Block> {
    vec![
        Block::new(BlockType::Heading1, "Project"),
        Block::new(BlockType::Paragraph, "Intro with **bold** and `code`"),
        Block::new(BlockType::Toggle, "Details").with_children(vec![
            Block::new(BlockType::Heading2, "Scope"),
            Block::new(BlockType::BulletedListItem, "first").with_children(vec![
                Block::new(BlockType::NumberedListItem, "step"),
                Block::new(BlockType::ToDo, "check").with_checked(true),
            ]),
            Block::new(BlockType::Heading3, "Notes"),
        ]),
        Block::new(BlockType::ToDo, "ship it"),
        Block::new(BlockType::Code, "fn main() {}"),
    ]
}
