use serde::{Deserialize, Serialize};

use crate::error::ShaderError;

/// Shader stage a source is compiled for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Profile {
    Vertex,
    Fragment,
}

/// Substrings in a shader name that mark its stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageMarkers {
    pub vertex: String,
    pub fragment: String,
}

/// Compiler target profile used for each stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileTargets {
    pub vertex: String,
    pub fragment: String,
}

/// Logical name of a shader and the stage it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderIdentity {
    pub name: String,
    pub profile: Profile,
}

impl Default for StageMarkers {
    fn default() -> Self {
        Self {
            vertex: String::from("_vert"),
            fragment: String::from("_frag"),
        }
    }
}

impl Default for ProfileTargets {
    fn default() -> Self {
        Self {
            vertex: String::from("vs_6_1"),
            fragment: String::from("ps_6_1"),
        }
    }
}

impl StageMarkers {
    /// Classifies a shader by name. The vertex marker is checked first, so a name carrying both
    /// markers is a vertex shader.
    pub fn select_profile(&self, name: &str) -> Result<Profile, ShaderError> {
        if name.contains(self.vertex.as_str()) {
            Ok(Profile::Vertex)
        } else if name.contains(self.fragment.as_str()) {
            Ok(Profile::Fragment)
        } else {
            Err(ShaderError::UnrecognizedShaderStage {
                name: name.into(),
                vertex: self.vertex.clone(),
                fragment: self.fragment.clone(),
            })
        }
    }

    /// Removes the first occurrence of the marker for `profile` from `name`.
    pub fn strip(&self, name: &str, profile: Profile) -> String {
        let marker = match profile {
            Profile::Vertex => &self.vertex,
            Profile::Fragment => &self.fragment,
        };
        name.replacen(marker.as_str(), "", 1)
    }
}

impl ProfileTargets {
    #[inline]
    pub fn target(&self, profile: Profile) -> &str {
        match profile {
            Profile::Vertex => &self.vertex,
            Profile::Fragment => &self.fragment,
        }
    }
}

impl ShaderIdentity {
    pub fn new(name: &str, markers: &StageMarkers) -> Result<Self, ShaderError> {
        Ok(Self {
            name: name.into(),
            profile: markers.select_profile(name)?,
        })
    }
}

/// Free function form of [`StageMarkers::select_profile`].
#[inline]
pub fn select_profile(name: &str, markers: &StageMarkers) -> Result<Profile, ShaderError> {
    markers.select_profile(name)
}
