//! Guide assembly and skill lookup.
//!
//! A skill folder holds a `SKILL.md` guide plus optional templates and
//! resource directories. [`GuideAssembler`] stitches those pieces into a
//! single Markdown response according to a [`GuideLayout`].

use std::path::{Component, Path};

use tracing::{info, instrument, warn};

use super::error::SkillError;
use super::store::{ArtifactStore, EntryFilter, MissingPolicy};

/// File name of the guide document inside every skill folder.
pub const GUIDE_FILE: &str = "SKILL.md";

/// A template file appended verbatim inside a fenced block.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSection<'a> {
    pub heading: &'a str,
    /// Path relative to the skill folder.
    pub path: &'a str,
    /// Fence language tag.
    pub language: &'a str,
}

/// A resource directory rendered as a bulleted file list.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSection<'a> {
    pub heading: &'a str,
    /// Directory relative to the skill folder.
    pub dir: &'a str,
    /// File-name suffix to keep, e.g. `.ttf`.
    pub extension: &'a str,
}

/// How to compose one guide response.
///
/// `closing` may contain `{request}`, which is replaced by the caller's
/// request.
#[derive(Debug, Clone, Copy)]
pub struct GuideLayout<'a> {
    pub skill: &'a str,
    pub request_heading: &'a str,
    pub guide_heading: &'a str,
    pub templates: &'a [TemplateSection<'a>],
    pub resources: Option<ResourceSection<'a>>,
    pub instructions: Option<&'a str>,
    pub closing: &'a str,
}

/// Result of looking a skill up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillGuide {
    Found { name: String, content: String },
    Unknown { requested: String, available: Vec<String> },
}

impl SkillGuide {
    /// Render the lookup as response text.
    pub fn render(&self) -> String {
        match self {
            Self::Found { name, content } => format!("## {} guide\n\n{}", name, content),
            Self::Unknown {
                requested,
                available,
            } => format!(
                "Error: skill '{}' does not exist.\n\nAvailable skills: {}",
                requested,
                available.join(", ")
            ),
        }
    }
}

/// Builds guide responses from a skills tree.
#[derive(Debug, Clone)]
pub struct GuideAssembler {
    store: ArtifactStore,
}

impl GuideAssembler {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    /// Assemble the response described by `layout` for `request`.
    ///
    /// Every artifact the layout names is a bundled asset: any missing file
    /// fails the whole assembly.
    #[instrument(skip_all, fields(skill = layout.skill))]
    pub fn assemble(&self, layout: &GuideLayout<'_>, request: &str) -> Result<String, SkillError> {
        let skill_dir = Path::new(layout.skill);
        let guide = self
            .store
            .read(skill_dir.join(GUIDE_FILE), MissingPolicy::Propagate)?;

        let mut out = format!(
            "## {}\n{}\n\n## {}\n{}\n",
            layout.request_heading, request, layout.guide_heading, guide
        );

        for template in layout.templates {
            let content = self
                .store
                .read(skill_dir.join(template.path), MissingPolicy::Propagate)?;
            out.push_str(&format!(
                "\n## {}\n```{}\n{}\n```\n",
                template.heading, template.language, content
            ));
        }

        if let Some(resources) = &layout.resources {
            let dir = skill_dir.join(resources.dir);
            let files = self
                .store
                .list_entries(&dir, EntryFilter::FilesWithExtension(resources.extension))?;
            out.push_str(&format!(
                "\n## {}\nDirectory: {}\n{} files:\n\n",
                resources.heading,
                self.store.path(&dir).display(),
                files.len()
            ));
            for file in &files {
                out.push_str(&format!("- {}\n", file));
            }
        }

        if let Some(instructions) = layout.instructions {
            out.push_str(&format!("\n{}\n", instructions));
        }

        out.push_str(&format!("\n{}\n", layout.closing.replace("{request}", request)));

        info!("Assembled guide for skill '{}'", layout.skill);
        Ok(out)
    }

    /// Look up the guide of the skill called `name`.
    ///
    /// Any name that does not lead to a regular `SKILL.md` file is unknown,
    /// not an error: the result lists the valid skill names instead so the
    /// caller can correct itself. Only a guide that exists but cannot be
    /// read fails the lookup.
    #[instrument(skip(self))]
    pub fn lookup(&self, name: &str) -> Result<SkillGuide, SkillError> {
        let guide = Path::new(name).join(GUIDE_FILE);
        if is_plain_name(name) && self.store.path(&guide).is_file() {
            let content = self.store.read(&guide, MissingPolicy::Propagate)?;
            return Ok(SkillGuide::Found {
                name: name.to_string(),
                content,
            });
        }

        warn!("Unknown skill requested: {}", name);
        let available = match self.store.list_entries("", EntryFilter::Directories) {
            Ok(names) => names,
            Err(e) => {
                warn!("Cannot list skills root: {}", e);
                Vec::new()
            }
        };

        Ok(SkillGuide::Unknown {
            requested: name.to_string(),
            available,
        })
    }
}

/// A skill name must be exactly one normal path component.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
