use crate::CoreError;
use crate::stripper::Strategy;
use clap::{Parser, Subcommand};
use ignore::overrides::{Override, OverrideBuilder};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "java";

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    about = "Strip comments from every matching file under a directory (main arguments)",
    long_about = "These are the main arguments for the comment stripping run."
)]
pub struct DecommentArgs {
    #[clap(help = "Root directory to process", default_value = ".")]
    pub path: PathBuf,

    #[clap(
        long,
        value_name = "EXT",
        help = "File name suffix to match, without the dot",
        default_value = DEFAULT_EXTENSION
    )]
    pub ext: String,

    #[clap(
        long,
        value_enum,
        help = "How comments are located",
        default_value_t = Strategy::TwoPass
    )]
    pub strategy: Strategy,

    #[clap(long, help = "Honour .gitignore files and skip hidden entries")]
    pub respect_ignore: bool,
    #[clap(long, help = "Ask before rewriting any file")]
    pub confirm: bool,
    #[clap( long, value_name = "PATTERN", help = "Glob pattern for files to include [multiple allowed]", action = clap::ArgAction::Append )]
    pub include: Vec<String>,
    #[clap( long, value_name = "PATTERN", help = "Glob pattern for files/directories to exclude [multiple allowed]", action = clap::ArgAction::Append )]
    pub exclude: Vec<String>,
}

impl Default for DecommentArgs {
    fn default() -> Self {
        DecommentArgs {
            path: PathBuf::from("."),
            ext: DEFAULT_EXTENSION.to_string(),
            strategy: Strategy::default(),
            respect_ignore: false,
            confirm: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl DecommentArgs {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        DecommentArgs {
            path: path.into(),
            ..Default::default()
        }
    }

    /// The suffix a file name must end with, e.g. `.java`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.ext.trim_start_matches('.'))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version = "0.1.0",
    about = "Strip comments from source files in place",
    long_about = "Removes // and /* */ comments from every matching file under a directory,\ndrops the lines left blank and rewrites each file in place.",
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: DecommentArgs,
}

fn build_overrides(root: &Path, args: &DecommentArgs) -> Result<Override, CoreError> {
    let mut o = OverrideBuilder::new(root);
    for p in &args.exclude {
        o.add(&format!("!{}", p))
            .map_err(|source| CoreError::Pattern {
                pattern: p.clone(),
                source,
            })?;
    }
    for p in &args.include {
        o.add(p).map_err(|source| CoreError::Pattern {
            pattern: p.clone(),
            source,
        })?;
    }
    o.build().map_err(|source| CoreError::Pattern {
        pattern: "<overrides>".to_string(),
        source,
    })
}

fn build_walker(args: &DecommentArgs) -> Result<ignore::Walk, CoreError> {
    let root = &args.path;
    if !root.exists() {
        return Err(CoreError::PathNotFound(root.clone()));
    }
    let mut w = WalkBuilder::new(root);
    w.standard_filters(args.respect_ignore);
    w.overrides(build_overrides(root, args)?);
    Ok(w.build())
}

/// Collects every file under `args.path` whose name ends with the configured
/// suffix, sorted by path. Entries the walk cannot read are skipped with a
/// warning.
pub fn find_files(args: &DecommentArgs) -> Result<Vec<PathBuf>, CoreError> {
    let suffix = args.suffix();
    let mut files = Vec::new();
    for entry in build_walker(args)? {
        match entry {
            Ok(e) => {
                if is_target_entry(&e, &suffix) {
                    files.push(e.into_path());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
            }
        }
    }
    files.sort();
    tracing::debug!(count = files.len(), suffix = %suffix, "collected files");
    Ok(files)
}

/// Symlinks count when they resolve to a regular file; the walk itself never
/// descends through linked directories.
fn is_target_entry(e: &DirEntry, suffix: &str) -> bool {
    let is_file = match e.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => e.path().is_file(),
        _ => false,
    };
    if !is_file {
        return false;
    }
    e.path()
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}
