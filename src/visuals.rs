//! Visual tags for particles and emitters.
//!
//! The engine does no rendering itself; a presentation adapter reads the
//! simulation's public state each frame and draws it however it likes. This
//! module provides the opaque decoration payload that travels with each
//! particle and emitter for that adapter to consume.
//!
//! # Usage
//!
//! ```ignore
//! ParticleConfig::new()
//!     .visual(Visual::styled(
//!         "bubble.png",
//!         "box-shadow: 0px 0px 1px 1px rgba(45,255,196,0.9); border-radius: 50%;",
//!     ))
//! ```

use serde::{Deserialize, Serialize};

/// Opaque visual tag: an image reference plus a freeform style string.
///
/// Both fields pass through the simulation unmodified. The `style` string is
/// arbitrary decoration payload (CSS, shader params, whatever the presentation
/// layer understands); the engine never inspects it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    /// Image reference (path, URL, or asset key), if any.
    pub image: Option<String>,
    /// Freeform style payload, passed through untouched.
    pub style: String,
}

impl Visual {
    /// Visual with an image reference and no extra styling.
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            image: Some(src.into()),
            style: String::new(),
        }
    }

    /// Visual with an image reference and a style string.
    pub fn styled(src: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            image: Some(src.into()),
            style: style.into(),
        }
    }
}
