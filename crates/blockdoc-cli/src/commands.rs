use anyhow::{Context, Result, bail};
use blockdoc_config::Config;
use blockdoc_engine::editing::Page;
use blockdoc_engine::model::Block;
use blockdoc_engine::parsing::{to_markdown, to_plain_text};
use blockdoc_engine::templates::{TemplateKind, template as template_blocks};
use blockdoc_engine::tree::document_stats;
use blockdoc_engine::wire::{import_page, to_wire_json};
use blockdoc_engine::{io, tree};
use clap::ValueEnum;
use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Markdown, one line per root block
    Md,
    /// Array of wire blocks
    Json,
    /// Readable plain text
    Text,
}

/// The directory page paths are resolved against.
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Picks the root: explicit flag, then the configured workspace, then
    /// the current directory.
    pub fn resolve(flag: Option<PathBuf>, config: Option<&Config>) -> Result<Self> {
        let root = match (flag, config) {
            (Some(root), _) => root,
            (None, Some(config)) => config.workspace_path.clone(),
            (None, None) => std::env::current_dir().context("Failed to read current directory")?,
        };
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Splits `file` into a root and a relative page path. Absolute paths
    /// are used as-is; relative ones are taken from the workspace root.
    fn locate(&self, file: &Path) -> Result<(PathBuf, RelativePathBuf)> {
        if file.is_absolute() {
            let (Some(parent), Some(name)) = (file.parent(), file.file_name()) else {
                bail!("Not a file path: {}", file.display());
            };
            let relative = RelativePathBuf::from_path(Path::new(name))?;
            return Ok((parent.to_path_buf(), relative));
        }
        let relative = RelativePathBuf::from_path(file)
            .with_context(|| format!("Invalid page path: {}", file.display()))?;
        Ok((self.root.clone(), relative))
    }

    pub fn load_page(&self, file: &Path) -> Result<Page> {
        let (root, relative) = self.locate(file)?;
        io::load_page(&relative, &root).with_context(|| format!("Failed to load {}", file.display()))
    }

    /// The blocks stored in `file`, exactly as read.
    pub fn load_blocks(&self, file: &Path) -> Result<Vec<Block>> {
        let (root, relative) = self.locate(file)?;
        io::load_blocks(&relative, &root)
            .with_context(|| format!("Failed to load {}", file.display()))
    }

    pub fn read(&self, file: &Path) -> Result<String> {
        let (root, relative) = self.locate(file)?;
        io::read_page(&relative, &root).with_context(|| format!("Failed to read {}", file.display()))
    }

    pub fn write(&self, file: &Path, content: &str) -> Result<()> {
        let (root, relative) = self.locate(file)?;
        io::write_page(&relative, &root, content)
            .with_context(|| format!("Failed to write {}", file.display()))
    }
}

pub fn render(blocks: &[Block], format: Format) -> Result<String> {
    Ok(match format {
        Format::Md => to_markdown(blocks),
        Format::Json => to_wire_json(blocks)?,
        Format::Text => to_plain_text(blocks),
    })
}

pub fn convert(workspace: &Workspace, file: &Path, to: Format) -> Result<String> {
    let blocks = workspace.load_blocks(file)?;
    render(&blocks, to)
}

pub fn export(
    workspace: &Workspace,
    file: &Path,
    title: Option<String>,
    emoji: Option<String>,
) -> Result<String> {
    let mut page = workspace.load_page(file)?;
    if let Some(title) = title {
        page.title = title;
    }
    if let Some(emoji) = emoji {
        page.emoji = emoji;
    }
    Ok(page.export().to_json()?)
}

pub fn import(workspace: &Workspace, file: &Path) -> Result<String> {
    let json = workspace.read(file)?;
    let page = import_page(&json).with_context(|| format!("Failed to import {}", file.display()))?;
    Ok(format!(
        "{} {}\n\n{}",
        page.emoji,
        page.title,
        to_markdown(&page.blocks)
    ))
}

pub fn stats(workspace: &Workspace, file: &Path, json: bool) -> Result<String> {
    let blocks = workspace.load_blocks(file)?;
    let stats = document_stats(&blocks);
    if json {
        return Ok(serde_json::to_string_pretty(&stats)?);
    }
    Ok(format!(
        "blocks: {}\nwords: {}\ncharacters: {}\ntodos: {}/{} done",
        stats.blocks, stats.words, stats.characters, stats.todos.completed, stats.todos.total
    ))
}

pub fn template(kind: Option<&str>, to: Format) -> Result<String> {
    let kind = kind.map(TemplateKind::from_name).unwrap_or_default();
    render(&template_blocks(kind), to)
}

pub fn search(workspace: &Workspace, file: &Path, query: &str) -> Result<String> {
    let blocks = workspace.load_blocks(file)?;
    let hits = tree::search(&blocks, query);
    if hits.is_empty() {
        return Ok(format!("No blocks found for '{query}'"));
    }
    Ok(hits
        .iter()
        .map(|block| format!("{}\t{}", block.block_type(), block.plain_text()))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn list(workspace: &Workspace) -> Result<String> {
    let pages = io::scan_pages(workspace.root())?;
    Ok(pages
        .iter()
        .map(|path| {
            path.strip_prefix(workspace.root())
                .unwrap_or(path)
                .display()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
