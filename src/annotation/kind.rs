//! Annotation kinds and the element modes that select them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The annotation tag every fragment of one parser is rendered with
///
/// Serialized under the element mode that selects it, so settings files
/// read `mode = "apiSuccessClass"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// `@apiSuccessClass` elements render `@apiSuccess` lines
    #[default]
    #[serde(rename = "apiSuccessClass", alias = "success")]
    SuccessType,
    /// `@apiParamClass` elements render `@apiParam` lines
    #[serde(rename = "apiParamClass", alias = "param")]
    ParamType,
}

impl AnnotationKind {
    /// Emitted tag, e.g. `apiSuccess`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SuccessType => "apiSuccess",
            Self::ParamType => "apiParam",
        }
    }

    /// Lowercase element name the host keys parsed elements by
    pub fn name(&self) -> &'static str {
        match self {
            Self::SuccessType => "apisuccess",
            Self::ParamType => "apiparam",
        }
    }

    /// Element mode that selects this kind, e.g. `apiSuccessClass`
    pub fn mode(&self) -> &'static str {
        match self {
            Self::SuccessType => "apiSuccessClass",
            Self::ParamType => "apiParamClass",
        }
    }

    /// Map a host element name to a kind, ignoring case
    pub fn from_element_name(name: &str) -> Option<Self> {
        [Self::SuccessType, Self::ParamType]
            .into_iter()
            .find(|kind| kind.mode().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode())
    }
}

impl FromStr for AnnotationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::SuccessType),
            "param" => Ok(Self::ParamType),
            other => Self::from_element_name(other).ok_or_else(|| {
                format!("unknown mode '{other}', expected apiSuccessClass or apiParamClass")
            }),
        }
    }
}
