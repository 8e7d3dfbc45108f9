//! DTOs for the helper methods of the `wzs` controller: images, texts,
//! care-moment conversion, modification tracking and lookup lists.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{id_list, SessionId};

/// Image kinds stored by the service.
pub mod image_type {
    pub const SENIOR: i16 = 1;
    pub const WOUND_V1: i16 = 2;
    pub const DOCTOR_SIGNATURE: i16 = 3;
    pub const WOUND_V2: i16 = 4;
}

/// Rendition sizes of a stored image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// 50x50 px.
    Tiny,
    /// 150x150 px.
    #[default]
    Small,
    /// 800x800 px.
    Large,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetImagesParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// One of the `image_type` constants.
    pub image_type: i16,
    /// Restrict to one linked object; `None` returns every image of the type.
    #[serde(rename = "ImageLinkID", skip_serializing_if = "Option::is_none")]
    pub image_link_id: Option<String>,
    pub image_size: ImageSize,
}

/// A stored image with its payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DbImage {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "LinkID")]
    pub link_id: i32,
    /// Base64 encoded JPEG.
    pub image_data: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetImageStatusParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// One of the `image_type` constants.
    pub image_type: i16,
    /// Restrict to one linked object (a resident, a wound).
    #[serde(rename = "LinkID", skip_serializing_if = "Option::is_none")]
    pub link_id: Option<i32>,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_since: Option<NaiveDateTime>,
}

/// Image metadata without the image payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImageStatus {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "LinkID")]
    pub link_id: i32,
    #[serde(with = "crate::dates")]
    pub modified_on: NaiveDateTime,
    /// Direct download location in the image cache.
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTextParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "TextID")]
    pub text_id: i32,
    /// 0 uses the session language, 1 Dutch, 2 French.
    #[serde(rename = "LanguageID")]
    pub language_id: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateTimeToCaremomentParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(with = "crate::dates")]
    pub time_stamp: NaiveDateTime,
}

/// A wall-clock instant expressed as care date plus care moment.
///
/// Night shifts belong to the previous care date: 12/01 01:15 maps to care
/// date 11/01, moment 6.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DateTimeAsCareMoment {
    #[serde(with = "crate::dates")]
    pub care_date: NaiveDateTime,
    #[serde(rename = "CareMomentID")]
    pub care_moment_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadDbImageParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    pub image_type: i16,
    #[serde(rename = "ImageLinkID")]
    pub image_link_id: i32,
    /// Base64 encoded JPEG.
    pub image_data: String,
}

/// Object families whose modification dates can be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifiedObjectType {
    #[default]
    #[serde(rename = "SENIORS")]
    Seniors,
    #[serde(rename = "USERS")]
    Users,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetModifiedObjectsParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    pub object_type: ModifiedObjectType,
    #[serde(
        default,
        with = "crate::dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_since: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifiedObject {
    #[serde(rename = "ObjectID")]
    pub object_id: i32,
    #[serde(with = "crate::dates")]
    pub modified_on: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetCountryCodesParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    #[serde(rename = "CountryCodeID", skip_serializing_if = "Option::is_none")]
    pub country_code_id: Option<i16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryCode {
    #[serde(rename = "ID")]
    pub id: i32,
    /// `BE`, `NL`, ...
    #[serde(rename = "ISOCode")]
    pub iso_code: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetLookupValuesParameters {
    #[serde(rename = "SessionID")]
    pub session_id: SessionId,
    /// Comma separated type ids, e.g. `"3,7"`.
    #[serde(rename = "TypeIDs", skip_serializing_if = "Option::is_none")]
    pub type_ids: Option<String>,
    #[serde(rename = "ValueID", skip_serializing_if = "Option::is_none")]
    pub value_id: Option<i32>,
    #[serde(rename = "LanguageID", skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i32>,
}

impl GetLookupValuesParameters {
    pub fn for_types(session_id: SessionId, type_ids: &[i32]) -> Self {
        Self {
            session_id,
            type_ids: Some(id_list(type_ids)),
            ..Self::default()
        }
    }
}

/// Drop-down value/text pair, grouped by type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LookupValue {
    #[serde(rename = "TypeID")]
    pub type_id: i32,
    #[serde(rename = "ValueID")]
    pub value_id: i32,
    pub text: Option<String>,
    pub sort_order: Option<i32>,
}
