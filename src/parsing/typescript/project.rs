//! File-backed TypeScript analysis session
//!
//! Each path is parsed once per session; later opens return the cached
//! file. The set of loaded files only ever grows.

use super::parser::TypeScriptParser;
use crate::config::Settings;
use crate::error::{AnalysisError, AnalysisResult};
use crate::parsing::analyzer::SourceAnalyzer;
use crate::parsing::schema::SourceFile;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Source-analysis service over TypeScript files
pub struct TypeScriptProject {
    parser: TypeScriptParser,
    root: Option<PathBuf>,
    files: HashMap<PathBuf, Arc<SourceFile>>,
}

impl TypeScriptProject {
    /// Create a session resolving relative paths against the working directory
    pub fn new() -> AnalysisResult<Self> {
        Ok(Self::with_parser(TypeScriptParser::new()?))
    }

    pub fn with_parser(parser: TypeScriptParser) -> Self {
        Self {
            parser,
            root: None,
            files: HashMap::new(),
        }
    }

    /// Create a session configured from settings
    pub fn from_settings(settings: &Settings) -> AnalysisResult<Self> {
        let parser = TypeScriptParser::with_config(settings.analysis.clone())?;
        let mut project = Self::with_parser(parser);
        project.root = settings.project_root.clone();
        Ok(project)
    }

    /// Resolve relative element paths against `root`
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Register source text under `path` without touching the filesystem
    ///
    /// Replaces any file previously loaded under the same path.
    pub fn add_source(
        &mut self,
        path: impl AsRef<Path>,
        code: &str,
    ) -> AnalysisResult<Arc<SourceFile>> {
        let key = self.resolve(path.as_ref());
        let classes = self.parser.parse(code, &key)?;
        let file = Arc::new(SourceFile::new(key.clone(), classes));
        self.files.insert(key, Arc::clone(&file));
        Ok(file)
    }

    /// Number of files loaded into this session
    pub fn loaded_files(&self) -> usize {
        self.files.len()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl SourceAnalyzer for TypeScriptProject {
    fn open_file(&mut self, path: &Path) -> AnalysisResult<Arc<SourceFile>> {
        let key = self.resolve(path);
        if let Some(file) = self.files.get(&key) {
            return Ok(Arc::clone(file));
        }

        let code = std::fs::read_to_string(&key).map_err(|source| AnalysisError::FileRead {
            path: key.clone(),
            source,
        })?;
        let classes = self.parser.parse(&code, &key)?;
        debug!(
            path = %key.display(),
            classes = classes.len(),
            "loaded TypeScript source"
        );

        let file = Arc::new(SourceFile::new(key.clone(), classes));
        self.files.insert(key, Arc::clone(&file));
        Ok(file)
    }
}
