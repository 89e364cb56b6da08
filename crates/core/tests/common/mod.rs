#![allow(dead_code)]

use bundlescope_api::BundleRecord;
use bundlescope_plugin::{
    AnimatorCap, AssetIdentity, BoxError, BundleHandle, BundleLoader, BundleManifest,
    ComponentKind, ControllerRef, HierarchyCap, HostCaps, IdentityCap, InspectMode,
    IntrospectCap, ManifestLoader, ObjectClass, ObjectExporter, ObjectHandle, ObjectId,
    SceneAnalyzer, SerializedField,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn id(n: u64) -> ObjectId {
    ObjectId(n)
}

#[derive(Clone, Default)]
pub struct MockObject {
    fields: Vec<SerializedField>,
    class: ObjectClass,
    components: Vec<ObjectId>,
    controller: Option<ControllerRef>,
    identity: Option<AssetIdentity>,
    broken: bool,
}

impl MockObject {
    /// A persistent asset identified by `guid`.
    pub fn asset(guid: i64) -> Self {
        Self {
            identity: Some(AssetIdentity::new(guid).named(format!("asset{}", guid), "Object")),
            ..Default::default()
        }
    }

    /// An object with no persistent identity.
    pub fn transient() -> Self {
        Self::default()
    }

    pub fn refs(mut self, targets: &[u64]) -> Self {
        for (i, t) in targets.iter().enumerate() {
            self.fields.push(SerializedField::reference(
                format!("m_Ref{}", i),
                Some(ObjectId(*t)),
            ));
        }
        self
    }

    pub fn null_ref(mut self) -> Self {
        self.fields.push(SerializedField::reference("m_Null", None));
        self
    }

    pub fn value(mut self) -> Self {
        self.fields.push(SerializedField::value("m_Value"));
        self
    }

    pub fn container(mut self, components: &[u64]) -> Self {
        self.class = ObjectClass::Container;
        self.components = components.iter().map(|c| ObjectId(*c)).collect();
        self
    }

    pub fn component(mut self) -> Self {
        self.class = ObjectClass::Component(ComponentKind::Generic);
        self
    }

    pub fn animator(mut self, controller: Option<ControllerRef>) -> Self {
        self.class = ObjectClass::Component(ComponentKind::Animator);
        self.controller = controller;
        self
    }

    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }
}

#[derive(Clone, Default)]
pub struct MockBundle {
    pub scene: bool,
    pub roots: Vec<ObjectId>,
    pub scene_paths: Vec<String>,
}

impl MockBundle {
    pub fn roots(roots: &[u64]) -> Self {
        Self {
            roots: roots.iter().map(|r| ObjectId(*r)).collect(),
            ..Default::default()
        }
    }

    pub fn scene(paths: &[&str]) -> Self {
        Self {
            scene: true,
            scene_paths: paths.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }
}

/// In-memory asset runtime. Bundles are keyed by file name.
#[derive(Default)]
pub struct MockWorld {
    objects: HashMap<ObjectId, MockObject>,
    bundles: HashMap<String, MockBundle>,
    manifest: Option<Vec<(String, Vec<String>)>>,
    pub manifest_loads: AtomicUsize,
    pub handles_opened: AtomicUsize,
    pub handles_released: Arc<AtomicUsize>,
    pub bundles_opened: AtomicUsize,
    pub bundles_released: Arc<AtomicUsize>,
    pub release_unused_calls: AtomicUsize,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(mut self, n: u64, object: MockObject) -> Self {
        self.objects.insert(ObjectId(n), object);
        self
    }

    pub fn bundle(mut self, name: &str, bundle: MockBundle) -> Self {
        self.bundles.insert(name.to_string(), bundle);
        self
    }

    pub fn manifest(mut self, entries: &[(&str, &[&str])]) -> Self {
        self.manifest = Some(
            entries
                .iter()
                .map(|(n, d)| (n.to_string(), d.iter().map(|s| s.to_string()).collect()))
                .collect(),
        );
        self
    }

    pub fn handles_balanced(&self) -> bool {
        self.handles_opened.load(Ordering::SeqCst) == self.handles_released.load(Ordering::SeqCst)
    }

    pub fn bundles_balanced(&self) -> bool {
        self.bundles_opened.load(Ordering::SeqCst) == self.bundles_released.load(Ordering::SeqCst)
    }
}

struct MockHandle {
    object: ObjectId,
    fields: Vec<SerializedField>,
    released: Arc<AtomicUsize>,
}

impl ObjectHandle for MockHandle {
    fn object(&self) -> ObjectId {
        self.object
    }

    fn visible_fields(&self) -> Box<dyn Iterator<Item = SerializedField> + '_> {
        Box::new(self.fields.iter().cloned())
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl IntrospectCap for MockWorld {
    fn introspect(
        &self,
        object: ObjectId,
        mode: InspectMode,
    ) -> Result<Box<dyn ObjectHandle>, BoxError> {
        assert_eq!(mode, InspectMode::Debug, "walker must widen visibility");
        let Some(obj) = self.objects.get(&object) else {
            return Err(format!("unknown object {}", object).into());
        };
        if obj.broken {
            return Err("serialization data corrupt".into());
        }
        self.handles_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockHandle {
            object,
            fields: obj.fields.clone(),
            released: self.handles_released.clone(),
        }))
    }
}

impl HierarchyCap for MockWorld {
    fn classify(&self, object: ObjectId) -> ObjectClass {
        self.objects
            .get(&object)
            .map(|o| o.class)
            .unwrap_or_default()
    }

    fn components_of(&self, container: ObjectId) -> Vec<ObjectId> {
        self.objects
            .get(&container)
            .map(|o| o.components.clone())
            .unwrap_or_default()
    }
}

impl AnimatorCap for MockWorld {
    fn runtime_controller(&self, animator: ObjectId) -> Option<ControllerRef> {
        self.objects.get(&animator).and_then(|o| o.controller.clone())
    }
}

impl IdentityCap for MockWorld {
    fn identify(&self, object: ObjectId) -> Option<AssetIdentity> {
        self.objects.get(&object).and_then(|o| o.identity.clone())
    }
}

struct MockManifest(Vec<(String, Vec<String>)>);

impl BundleManifest for MockManifest {
    fn all_bundle_names(&self) -> Vec<String> {
        self.0.iter().map(|(n, _)| n.clone()).collect()
    }

    fn direct_dependencies(&self, bundle: &str) -> Vec<String> {
        self.0
            .iter()
            .find(|(n, _)| n == bundle)
            .map(|(_, d)| d.clone())
            .unwrap_or_default()
    }

    fn all_dependencies(&self, bundle: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let mut stack = self.direct_dependencies(bundle);
        while let Some(dep) = stack.pop() {
            if !out.contains(&dep) {
                stack.extend(self.direct_dependencies(&dep));
                out.push(dep);
            }
        }
        out
    }
}

impl ManifestLoader for MockWorld {
    fn load_manifest(&self, _path: &Path) -> Result<Box<dyn BundleManifest>, BoxError> {
        self.manifest_loads.fetch_add(1, Ordering::SeqCst);
        match &self.manifest {
            Some(entries) => Ok(Box::new(MockManifest(entries.clone()))),
            None => Err("not a manifest bundle".into()),
        }
    }
}

struct MockBundleHandle {
    bundle: MockBundle,
    released: Arc<AtomicUsize>,
}

impl BundleHandle for MockBundleHandle {
    fn is_streamed_scene(&self) -> bool {
        self.bundle.scene
    }

    fn root_objects(&self) -> Vec<ObjectId> {
        self.bundle.roots.clone()
    }

    fn scene_paths(&self) -> Vec<String> {
        self.bundle.scene_paths.clone()
    }
}

impl Drop for MockBundleHandle {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl BundleLoader for MockWorld {
    fn load_bundle(&self, path: &Path) -> Result<Box<dyn BundleHandle>, BoxError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let Some(bundle) = self.bundles.get(&name) else {
            return Err(format!("cannot open {}", path.display()).into());
        };
        self.bundles_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockBundleHandle {
            bundle: bundle.clone(),
            released: self.bundles_released.clone(),
        }))
    }

    fn release_unused(&self) {
        self.release_unused_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct MockScenes {
    pub pending: AtomicBool,
    pub begun: Mutex<Vec<(String, Vec<String>)>>,
}

impl SceneAnalyzer for MockScenes {
    fn begin(&self, bundle: &BundleRecord, scene_paths: &[String]) {
        self.pending.store(true, Ordering::SeqCst);
        self.begun
            .lock()
            .unwrap()
            .push((bundle.name.clone(), scene_paths.to_vec()));
    }

    fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct MockExporter {
    pub exported: Mutex<Vec<(String, ObjectId)>>,
}

impl ObjectExporter for MockExporter {
    fn export(
        &self,
        bundle: &BundleRecord,
        object: ObjectId,
        _identity: Option<&AssetIdentity>,
    ) -> Result<(), BoxError> {
        self.exported
            .lock()
            .unwrap()
            .push((bundle.name.clone(), object));
        Ok(())
    }
}

pub fn caps(
    world: &Arc<MockWorld>,
    scenes: Option<Arc<MockScenes>>,
    exporter: Option<Arc<MockExporter>>,
) -> HostCaps {
    HostCaps {
        manifest: world.clone(),
        bundles: world.clone(),
        introspect: world.clone(),
        hierarchy: world.clone(),
        animator: world.clone(),
        identity: world.clone(),
        scenes: scenes.map(|s| s as Arc<dyn SceneAnalyzer>),
        exporter: exporter.map(|e| e as Arc<dyn ObjectExporter>),
    }
}

/// Creates `<tmp>/out` with an empty file per bundle name, plus the
/// manifest file `out/out` when `with_manifest` is set.
pub fn output_dir(bundles: &[&str], with_manifest: bool) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("out");
    std::fs::create_dir_all(&root).unwrap();
    for name in bundles {
        std::fs::write(root.join(name), b"UnityFS\0").unwrap();
    }
    if with_manifest {
        std::fs::write(root.join("out"), b"UnityFS\0").unwrap();
    }
    (tmp, root)
}
