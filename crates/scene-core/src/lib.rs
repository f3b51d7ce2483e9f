//! Scene model shared by the command engine, server, and render collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type ObjectId = u64;

/// Shape primitives the editor can spawn.
///
/// Serialized lowercase to match the classifier vocabulary; `Display` is the
/// capitalized form used in confirmation sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cube,
    Sphere,
    Plane,
    Cylinder,
    Torus,
    Cone,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Plane => "Plane",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Torus => "Torus",
            ShapeKind::Cone => "Cone",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Jump,
    Spin,
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnimationKind::Jump => "jump",
            AnimationKind::Spin => "spin",
        })
    }
}

/// RGB triple as delivered by the classifier; displays in CSS notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.0[0], self.0[1], self.0[2])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ShapeKind,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub color: String,
    pub animations: Vec<AnimationKind>,
}

/// The single scene aggregate held for the lifetime of an editor session.
///
/// Mutation is whole-collection replacement: handlers compute the next object
/// list and install it through [`SceneState::replace_all`]. A set `active_id`
/// always references a live object; replacement drops it otherwise.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    objects: Vec<SceneObject>,
    active_id: Option<ObjectId>,
    next_id: ObjectId,
}

impl SceneState {
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn active_id(&self) -> Option<ObjectId> {
        self.active_id
    }

    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active_id
            .and_then(|id| self.objects.iter().find(|obj| obj.id == id))
    }

    pub fn mint_id(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn replace_all(&mut self, objects: Vec<SceneObject>) {
        self.objects = objects;
        if let Some(active) = self.active_id {
            if !self.objects.iter().any(|obj| obj.id == active) {
                self.active_id = None;
            }
        }
    }

    /// Clears the selection when `id` is already active, otherwise selects it.
    /// Identifiers not present in the collection are ignored.
    pub fn toggle_active(&mut self, id: ObjectId) {
        if self.active_id == Some(id) {
            self.active_id = None;
        } else if self.objects.iter().any(|obj| obj.id == id) {
            self.active_id = Some(id);
        }
    }
}
