//! Control library display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{count, format_datetime, or_none, truncate_string};
use crate::client::models::{ControlLibrary, ControlLibraryItem};

/// Control library display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ControlLibraryDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// `predefined` or `custom`
    #[tabled(rename = "TYPE")]
    pub library_type: String,

    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "CONTROLS")]
    pub controls: String,

    #[tabled(rename = "UPDATED")]
    pub updated_on: String,
}

impl From<ControlLibraryItem> for ControlLibraryDisplay {
    fn from(item: ControlLibraryItem) -> Self {
        Self {
            id: or_none(item.id),
            name: truncate_string(&or_none(item.control_library_name), 50),
            library_type: or_none(item.control_library_type),
            version: or_none(item.control_library_version),
            controls: count(item.controls_count),
            updated_on: format_datetime(item.updated_on),
        }
    }
}

impl From<ControlLibrary> for ControlLibraryDisplay {
    fn from(library: ControlLibrary) -> Self {
        let controls = library
            .controls_count
            .or_else(|| library.controls.as_ref().map(|c| c.len() as i64));
        Self {
            id: or_none(library.id),
            name: truncate_string(&or_none(library.control_library_name), 50),
            library_type: or_none(library.control_library_type),
            version: or_none(library.control_library_version),
            controls: count(controls),
            updated_on: format_datetime(library.updated_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::ControlsInControlLib;

    #[test]
    fn test_display_from_item() {
        let item = ControlLibraryItem {
            id: Some("lib-1".to_string()),
            control_library_name: Some("IBM Cloud Framework".to_string()),
            control_library_type: Some("predefined".to_string()),
            control_library_version: Some("1.0.0".to_string()),
            controls_count: Some(12),
            ..Default::default()
        };

        let display = ControlLibraryDisplay::from(item);
        assert_eq!(display.id, "lib-1");
        assert_eq!(display.library_type, "predefined");
        assert_eq!(display.controls, "12");
        assert_eq!(display.updated_on, "--");
    }

    #[test]
    fn test_display_counts_embedded_controls() {
        let library = ControlLibrary {
            id: Some("lib-2".to_string()),
            controls: Some(vec![
                ControlsInControlLib::default(),
                ControlsInControlLib::default(),
            ]),
            ..Default::default()
        };

        let display = ControlLibraryDisplay::from(library);
        assert_eq!(display.controls, "2");
        assert_eq!(display.name, "--");
    }
}
