//! Profile display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{count, format_datetime, or_none, truncate_string};
use crate::client::models::{Profile, ProfileItem};

/// Profile display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProfileDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub profile_type: String,

    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "CONTROLS")]
    pub controls: String,

    #[tabled(rename = "ATTACHMENTS")]
    pub attachments: String,

    #[tabled(rename = "UPDATED")]
    pub updated_on: String,
}

impl From<ProfileItem> for ProfileDisplay {
    fn from(item: ProfileItem) -> Self {
        Self {
            id: or_none(item.id),
            name: truncate_string(&or_none(item.profile_name), 50),
            profile_type: or_none(item.profile_type),
            version: or_none(item.profile_version),
            controls: count(item.controls_count),
            attachments: count(item.attachments_count),
            updated_on: format_datetime(item.updated_on),
        }
    }
}

impl From<Profile> for ProfileDisplay {
    fn from(profile: Profile) -> Self {
        Self {
            id: or_none(profile.id),
            name: truncate_string(&or_none(profile.profile_name), 50),
            profile_type: or_none(profile.profile_type),
            version: or_none(profile.profile_version),
            controls: count(profile.controls_count),
            attachments: count(profile.attachments_count),
            updated_on: format_datetime(profile.updated_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_display_from_item() {
        let item = ProfileItem {
            id: Some("prof-1".to_string()),
            profile_name: Some("SOC 2".to_string()),
            profile_type: Some("predefined".to_string()),
            controls_count: Some(40),
            attachments_count: Some(0),
            ..Default::default()
        };

        let display = ProfileDisplay::from(item);
        assert_eq!(display.id, "prof-1");
        assert_eq!(display.name, "SOC 2");
        assert_eq!(display.controls, "40");
        assert_eq!(display.attachments, "0");
        assert_eq!(display.version, "--");
    }
}
