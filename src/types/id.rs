// ABOUTME: Phantom-typed GUIDs for platform resources.
// ABOUTME: Keeps app, build, package, deployment, revision and space GUIDs apart at compile time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker types for phantom type parameters.
/// Empty enums cannot be instantiated and need no trait bounds.
pub enum AppMarker {}
pub enum BuildMarker {}
pub enum PackageMarker {}
pub enum DeploymentMarker {}
pub enum RevisionMarker {}
pub enum SpaceMarker {}

/// A platform GUID tagged with the kind of resource it names.
///
/// Passing a `BuildGuid` where an `AppGuid` is expected fails to compile,
/// which matters in call sites like `set_application_build(app, build)` where
/// both arguments are plain strings on the wire.
#[must_use = "GUIDs reference platform resources and should not be ignored"]
pub struct Guid<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Guid<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The platform uses an empty GUID to mean "no resource".
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

// Manual impls: T is only a marker, so derives would add needless bounds.

impl<T> std::fmt::Debug for Guid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Guid").field(&self.value).finish()
    }
}

impl<T> Clone for Guid<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Guid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Guid<T> {}

impl<T> Hash for Guid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Display for Guid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> Serialize for Guid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Guid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

pub type AppGuid = Guid<AppMarker>;
pub type BuildGuid = Guid<BuildMarker>;
pub type PackageGuid = Guid<PackageMarker>;
pub type DeploymentGuid = Guid<DeploymentMarker>;
pub type RevisionGuid = Guid<RevisionMarker>;
pub type SpaceGuid = Guid<SpaceMarker>;
