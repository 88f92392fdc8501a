use crate::config::Config;
use crate::error::ScaffoldError;
use crate::models::SessionRecord;
use crate::services::slug::make_slug;
use crate::services::template::{fill, TemplateValues};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything the scaffolder is about to write, resolved against the root.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub slug: String,
    pub template_dir: PathBuf,
    pub target_dir: PathBuf,
    pub document: PathBuf,
    pub bibliography: PathBuf,
    pub assets_dir: PathBuf,
    pub slug_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub slug: String,
    pub target_dir: PathBuf,
    pub files_copied: usize,
    pub dry_run: bool,
}

/// Copies the session template into `<sessions_dir>/<slug>` and fills it in.
///
/// Assumes it is the only writer under the sessions directory for the
/// duration of one call. An existing target is never overwritten.
pub struct Scaffolder<'a> {
    config: &'a Config,
    root: PathBuf,
}

impl<'a> Scaffolder<'a> {
    pub fn new(config: &'a Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Resolves paths and runs every check that must pass before anything
    /// touches the filesystem.
    pub fn plan(&self, record: &SessionRecord) -> Result<ScaffoldPlan> {
        record.validate()?;

        let slug = make_slug(&record.presenter, &record.title);

        let target_dir = self.config.sessions_dir(&self.root).join(&slug);
        if target_dir.exists() {
            return Err(ScaffoldError::TargetExists(target_dir).into());
        }

        let template_dir = self.config.template_dir(&self.root);
        if !template_dir.is_dir() {
            return Err(ScaffoldError::TemplateMissing(template_dir).into());
        }
        let template_doc = template_dir.join(&self.config.template.document);
        if !template_doc.is_file() {
            return Err(ScaffoldError::DocumentMissing(template_doc).into());
        }

        let template = &self.config.template;
        Ok(ScaffoldPlan {
            document: target_dir.join(&template.document),
            bibliography: target_dir.join(&template.bibliography),
            assets_dir: target_dir.join(&template.assets_dir),
            slug_file: self.config.slug_file(&self.root),
            template_dir,
            target_dir,
            slug,
        })
    }

    pub fn dry_run(&self, record: &SessionRecord) -> Result<ScaffoldOutcome> {
        let plan = self.plan(record)?;
        tracing::info!(
            "Dry run: would copy {} to {}",
            plan.template_dir.display(),
            plan.target_dir.display()
        );
        Ok(ScaffoldOutcome {
            slug: plan.slug,
            target_dir: plan.target_dir,
            files_copied: 0,
            dry_run: true,
        })
    }

    pub fn scaffold(&self, record: &SessionRecord) -> Result<ScaffoldOutcome> {
        let plan = self.plan(record)?;

        let files_copied = copy_dir_recursive(&plan.template_dir, &plan.target_dir)?;
        tracing::debug!("Copied {} template files", files_copied);

        let values = TemplateValues::from_record(record, &self.config.template.abstract_placeholder);
        let document = fs::read_to_string(&plan.document)
            .with_context(|| format!("reading {}", plan.document.display()))?;
        fs::write(&plan.document, fill(&document, &values))
            .with_context(|| format!("writing {}", plan.document.display()))?;

        let bibtex = if record.bibtex.is_empty() {
            String::new()
        } else {
            format!("{}\n", record.bibtex)
        };
        fs::write(&plan.bibliography, bibtex)
            .with_context(|| format!("writing {}", plan.bibliography.display()))?;

        // Empty directories don't survive version control, so the template
        // may not carry one.
        fs::create_dir_all(&plan.assets_dir)
            .with_context(|| format!("creating {}", plan.assets_dir.display()))?;

        fs::write(&plan.slug_file, &plan.slug)
            .with_context(|| format!("writing {}", plan.slug_file.display()))?;

        tracing::info!("Session scaffolded: {}", plan.target_dir.display());

        Ok(ScaffoldOutcome {
            slug: plan.slug,
            target_dir: plan.target_dir,
            files_copied,
            dry_run: false,
        })
    }
}

/// Copies `src` into a fresh `dst`, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("walking {}", src.display()))?;
        let path = entry.path();
        let relative = match path.strip_prefix(src) {
            Ok(rel) if rel.as_os_str().is_empty() => {
                fs::create_dir_all(dst).with_context(|| format!("creating {}", dst.display()))?;
                continue;
            }
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target_path = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .with_context(|| format!("creating {}", target_path.display()))?;
        } else {
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::copy(path, &target_path).with_context(|| {
                format!(
                    "copying '{}' to '{}'",
                    path.display(),
                    target_path.display()
                )
            })?;
            count += 1;
        }
    }
    Ok(count)
}
