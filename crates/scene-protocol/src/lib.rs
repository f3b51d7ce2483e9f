//! Wire types for the editor's external collaborators.
//!
//! The classifier envelope mirrors what the NLP service returns for a free-text
//! command; the client/server messages carry already-classified commands and
//! scene snapshots over the editor WebSocket.

use scene_core::{ObjectId, SceneObject};
use serde::{Deserialize, Serialize};

/// Request sent to the external classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub command: String,
}

/// Classifier response: the structured intent derived from free text.
///
/// `value` and `color` are omitted by the service when a command carries no
/// magnitude or color; downstream resolution supplies per-category defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedCommand {
    pub command: String,
    pub general_label: String,
    pub specific_label: String,
    #[serde(default)]
    pub value: Option<f32>,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMsg {
    Hello {
        client_version: String,
    },
    /// Apply an already-classified command. The camera orientation quaternion
    /// (xyzw) is read at submit time by the rendering layer and is only needed
    /// for camera-relative moves.
    Apply {
        command: ClassifiedCommand,
        camera: Option<[f32; 4]>,
    },
    /// Pointer interaction with a rendered object.
    ToggleSelect {
        id: ObjectId,
    },
    RequestScene,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMsg {
    HelloAck,
    Applied {
        description: String,
    },
    Rejected {
        reason: String,
    },
    Scene {
        objects: Vec<SceneObject>,
        active_id: Option<ObjectId>,
    },
    Log {
        text: String,
    },
}
