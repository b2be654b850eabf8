//! Doc-only shapes of the response envelope for the OpenAPI output.

use serde::Serialize;
use utoipa::ToSchema;

/// `{errno, errmsg}` as every failed call returns it.
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Non-zero error code (4001 database, 4002 no-data, 4004 mismatch, ...)
    #[schema(example = 4103)]
    pub errno: u32,

    #[schema(example = "参数有误")]
    pub errmsg: String,
}

/// `{errno: 0, errmsg, data?}` on success.
#[derive(Serialize, ToSchema)]
pub struct SuccessEnvelope {
    #[schema(example = 0)]
    pub errno: u32,

    #[schema(example = "OK")]
    pub errmsg: String,
}
