//! Provider type display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{count, format_datetime, or_none};
use crate::client::models::{ProviderTypeInstanceItem, ProviderTypeItem};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProviderTypeDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub provider_type: String,

    #[tabled(rename = "MODE")]
    pub mode: String,

    #[tabled(rename = "INSTANCE LIMIT")]
    pub instance_limit: String,
}

impl From<ProviderTypeItem> for ProviderTypeDisplay {
    fn from(item: ProviderTypeItem) -> Self {
        Self {
            id: or_none(item.id),
            name: or_none(item.name),
            provider_type: or_none(item.provider_type),
            mode: or_none(item.mode),
            instance_limit: count(item.instance_limit),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProviderTypeInstanceDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub provider_type: String,

    #[tabled(rename = "CREATED")]
    pub created_at: String,
}

impl From<ProviderTypeInstanceItem> for ProviderTypeInstanceDisplay {
    fn from(item: ProviderTypeInstanceItem) -> Self {
        Self {
            id: or_none(item.id),
            name: or_none(item.name),
            provider_type: or_none(item.provider_type),
            created_at: format_datetime(item.created_at),
        }
    }
}
