use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One discovered asset bundle and its forward/reverse dependency edges.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct BundleRecord {
    /// Unique within a registry: the bundle file name, or its relative path
    /// when found by a directory scan.
    pub name: String,
    pub path: PathBuf,
    pub root_path: PathBuf,
    /// Direct dependencies as declared by the manifest (empty when unknown).
    #[serde(default)]
    pub direct_depends: Vec<String>,
    /// Transitive closure of `direct_depends` (empty when unknown).
    #[serde(default)]
    pub all_depends: Vec<String>,
    /// Derived: every other bundle whose `all_depends` contains this name.
    #[serde(default)]
    pub be_depends: Vec<String>,
    #[serde(default)]
    pub is_scene: bool,
}

impl BundleRecord {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, root_path: &Path) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            root_path: root_path.to_path_buf(),
            direct_depends: Vec::new(),
            all_depends: Vec::new(),
            be_depends: Vec::new(),
            is_scene: false,
        }
    }

    pub fn with_depends(mut self, direct: Vec<String>, all: Vec<String>) -> Self {
        self.direct_depends = direct;
        self.all_depends = all;
        self
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.all_depends.iter().any(|d| d == name)
    }
}

/// Lifecycle of one analysis run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    #[default]
    Idle,
    Discovering,
    Building,
    Walking,
    WaitingForScenes,
    Done,
}

impl std::fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Discovering => "discovering",
            AnalysisState::Building => "building",
            AnalysisState::Walking => "walking",
            AnalysisState::WaitingForScenes => "waiting_for_scenes",
            AnalysisState::Done => "done",
        };
        write!(f, "{}", s)
    }
}
