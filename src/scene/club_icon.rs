use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Reference to a club logo drawn in the poster corner.
///
/// On the wire this is `{"type": "preset", "filename": ..}` or
/// `{"type": "upload", "filePath": ..}`; uploads may instead carry inline image data in a
/// `base64` field (raw base64 or a `data:` URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClubIconWire", into = "ClubIconWire")]
pub enum ClubIconData {
    /// Logo bundled in the club-logos asset directory.
    Preset { filename: String },
    /// Uploaded file at a caller-supplied path.
    Upload { file_path: PathBuf },
    /// Inline encoded image.
    Inline { data: String },
}

impl ClubIconData {
    pub fn preset(filename: impl Into<String>) -> Self {
        Self::Preset {
            filename: filename.into(),
        }
    }

    pub fn upload(file_path: impl Into<PathBuf>) -> Self {
        Self::Upload {
            file_path: file_path.into(),
        }
    }

    pub fn inline(data: impl Into<String>) -> Self {
        Self::Inline { data: data.into() }
    }

    /// Short human-readable description used in log lines. Inline payloads are not echoed.
    pub fn describe(&self) -> String {
        match self {
            Self::Preset { filename } => format!("preset:{filename}"),
            Self::Upload { file_path } => format!("upload:{}", file_path.display()),
            Self::Inline { data } => format!("inline:{} bytes", data.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum IconKind {
    Preset,
    Upload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClubIconWire {
    #[serde(rename = "type")]
    kind: IconKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    #[serde(default, alias = "file_path", skip_serializing_if = "Option::is_none")]
    file_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base64: Option<String>,
}

impl TryFrom<ClubIconWire> for ClubIconData {
    type Error = String;

    fn try_from(w: ClubIconWire) -> Result<Self, Self::Error> {
        match w.kind {
            IconKind::Preset => w
                .filename
                .filter(|f| !f.trim().is_empty())
                .map(|filename| Self::Preset { filename })
                .ok_or_else(|| "preset club icon requires 'filename'".to_owned()),
            IconKind::Upload => {
                if let Some(file_path) = w.file_path {
                    Ok(Self::Upload { file_path })
                } else if let Some(data) = w.base64 {
                    Ok(Self::Inline { data })
                } else {
                    Err("upload club icon requires 'filePath' or 'base64'".to_owned())
                }
            }
        }
    }
}

impl From<ClubIconData> for ClubIconWire {
    fn from(icon: ClubIconData) -> Self {
        let mut w = Self {
            kind: IconKind::Upload,
            filename: None,
            file_path: None,
            base64: None,
        };
        match icon {
            ClubIconData::Preset { filename } => {
                w.kind = IconKind::Preset;
                w.filename = Some(filename);
            }
            ClubIconData::Upload { file_path } => w.file_path = Some(file_path),
            ClubIconData::Inline { data } => w.base64 = Some(data),
        }
        w
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/club_icon.rs"]
mod tests;
