use crate::state::RepositoryState;
use camino::Utf8PathBuf;
use evergreen_config::{ArtifactKind, RepoLayout};
use tempfile::TempDir;

const KINDS: [ArtifactKind; 6] = [
    ArtifactKind::ComposeManifest,
    ArtifactKind::SecurityPolicies,
    ArtifactKind::FlatpakRemotes,
    ArtifactKind::GreeterSource,
    ArtifactKind::Workflow,
    ArtifactKind::DeviceAgentUnit,
];

pub fn canonical_state() -> RepositoryState {
    RepositoryState::load(&RepoLayout::canonical()).expect("load canonical state")
}

/// Copy every canonical artifact into a temp dir so tests can break them.
pub fn copy_canonical_repo() -> (TempDir, RepoLayout) {
    let canonical = RepoLayout::canonical();
    let tmp = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
    let layout = RepoLayout::new(root);

    for kind in KINDS {
        let dest = layout.path_for(kind);
        std::fs::create_dir_all(dest.parent().expect("parent")).expect("create dir");
        std::fs::copy(canonical.path_for(kind), &dest).expect("copy artifact");
    }
    (tmp, layout)
}
