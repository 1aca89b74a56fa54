// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use blockdoc_engine::model::{Block, BlockType};

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- [ ] Open task\n- [x] Done task\n1. Numbered\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_line(repeats: usize) -> String {
    "plain **bold** *italic* ~~gone~~ `code` ".repeat(repeats)
}

/// A forest of `width` roots, each with a subtree `depth` levels deep.
#[allow(dead_code)]
pub fn generate_forest(width: usize, depth: usize) -> Vec<Block> {
    (0..width)
        .map(|i| {
            let block_type = BlockType::ALL[i % BlockType::ALL.len()];
            let block = Block::new(block_type, &format!("Block {i} with **some** text"));
            if depth == 0 {
                block
            } else {
                block.with_children(generate_forest(2, depth - 1))
            }
        })
        .collect()
}
