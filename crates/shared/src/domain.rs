use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(WindowId);
id_newtype!(TimerId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackOrder {
    Normal,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackRepeat {
    None,
    Current,
    All,
}

/// Playlist export formats understood by the media engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Xspf,
    M3u,
    Html,
}

impl ExportFormat {
    /// Pick the export format from a target file name.
    pub fn from_file_name(file: &str) -> Option<Self> {
        if file.contains(".xsp") {
            Some(Self::Xspf)
        } else if file.contains("m3u") {
            Some(Self::M3u)
        } else if file.contains("html") {
            Some(Self::Html)
        } else {
            None
        }
    }

    pub fn module_name(self) -> &'static str {
        match self {
            Self::Xspf => "export-xspf",
            Self::M3u => "export-m3u",
            Self::Html => "export-html",
        }
    }
}
