use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Block, BlockType};

use super::walk::iter;

/// To-do totals over a whole forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TodoCount {
    pub total: usize,
    pub completed: usize,
}

/// Summary counts for a page, as shown in a status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub blocks: usize,
    pub words: usize,
    pub characters: usize,
    pub todos: TodoCount,
}

/// Whitespace-separated words in the plain text of every block.
pub fn count_words(forest: &[Block]) -> usize {
    iter(forest)
        .map(|block| block.plain_text().split_whitespace().count())
        .sum()
}

/// Unicode scalar values in the plain text of every block. Markers are not
/// counted.
pub fn count_characters(forest: &[Block]) -> usize {
    iter(forest)
        .map(|block| block.plain_text().chars().count())
        .sum()
}

pub fn count_todos(forest: &[Block]) -> TodoCount {
    iter(forest)
        .filter(|block| block.block_type() == BlockType::ToDo)
        .fold(TodoCount::default(), |mut count, block| {
            count.total += 1;
            if block.is_checked() {
                count.completed += 1;
            }
            count
        })
}

pub fn document_stats(forest: &[Block]) -> DocumentStats {
    DocumentStats {
        blocks: iter(forest).count(),
        words: count_words(forest),
        characters: count_characters(forest),
        todos: count_todos(forest),
    }
}

/// Every block at any depth, bucketed by type in pre-order. All nine types
/// are present as keys, empty or not.
pub fn group_by_type(forest: &[Block]) -> BTreeMap<BlockType, Vec<&Block>> {
    let mut groups: BTreeMap<BlockType, Vec<&Block>> =
        BlockType::ALL.into_iter().map(|t| (t, Vec::new())).collect();
    for block in iter(forest) {
        groups.entry(block.block_type()).or_default().push(block);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn forest() -> Vec<Block> {
        vec![
            Block::new(BlockType::Heading1, "Weekly  plan"),
            Block::new(BlockType::ToDo, "write **tests**")
                .with_checked(true)
                .with_children(vec![
                    Block::new(BlockType::ToDo, "unit"),
                    Block::new(BlockType::ToDo, "integration").with_checked(true),
                ]),
            Block::new(BlockType::Paragraph, "  "),
        ]
    }

    #[test]
    fn counts_words_recursively() {
        assert_eq!(count_words(&forest()), 6);
        assert_eq!(count_words(&[]), 0);
    }

    #[test]
    fn counts_characters_without_markers() {
        let blocks = vec![Block::new(BlockType::Paragraph, "**ab** ć")];
        assert_eq!(count_characters(&blocks), 4);
    }

    #[test]
    fn counts_todos_recursively() {
        assert_eq!(
            count_todos(&forest()),
            TodoCount {
                total: 3,
                completed: 2
            }
        );
    }

    #[test]
    fn adding_a_block_never_decreases_counts() {
        let before = document_stats(&forest());
        let mut more = forest();
        more.push(Block::new(BlockType::ToDo, "one more"));
        let after = document_stats(&more);

        assert!(after.words >= before.words);
        assert!(after.characters >= before.characters);
        assert!(after.todos.total >= before.todos.total);
        assert_eq!(after.blocks, before.blocks + 1);
    }

    #[test]
    fn sample_forest_stats() {
        let forest = crate::tests::sample_forest();
        assert_eq!(
            document_stats(&forest),
            DocumentStats {
                blocks: 10,
                words: 17,
                characters: 81,
                todos: TodoCount {
                    total: 2,
                    completed: 1
                },
            }
        );
        let groups = group_by_type(&forest);
        assert!(groups.values().all(|blocks| !blocks.is_empty()));
        assert_eq!(groups[&BlockType::ToDo].len(), 2);
    }

    #[test]
    fn groups_have_all_keys() {
        let forest = forest();
        let groups = group_by_type(&forest);
        assert_eq!(groups.len(), 9);
        assert_eq!(groups[&BlockType::ToDo].len(), 3);
        assert_eq!(groups[&BlockType::Heading1].len(), 1);
        assert_eq!(groups[&BlockType::Paragraph].len(), 1);
        assert!(groups[&BlockType::Code].is_empty());
        assert!(groups[&BlockType::Toggle].is_empty());
    }

    #[test]
    fn empty_forest_groups() {
        let groups = group_by_type(&[]);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), BlockType::ALL.to_vec());
        assert!(groups.values().all(Vec::is_empty));
    }
}
