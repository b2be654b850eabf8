//! Fixed knobs shared across modules.

/// TTL of a stored image-captcha text, in seconds.
pub const IMAGE_CODE_REDIS_EXPIRES: u64 = 300;

/// TTL of a stored SMS code, in seconds.
pub const SMS_CODE_REDIS_EXPIRES: u64 = 300;

/// Session tokens expire after this many seconds (7 days, non-permanent).
pub const SESSION_LIFETIME_SECONDS: i64 = 86400 * 7;

/// How many items the click-rank sidebar shows.
pub const CLICK_RANK_MAX_NEWS: u64 = 6;

/// Page size of the public news list.
pub const NEWS_LIST_MAX_COUNT: u64 = 10;

/// Page size of the user's collection list.
pub const USER_COLLECTION_MAX_NEWS: u64 = 10;

/// Page size of the admin user list.
pub const ADMIN_USER_PAGE_MAX_COUNT: u64 = 10;

/// Page size of the admin news review list.
pub const ADMIN_NEWS_PAGE_MAX_COUNT: u64 = 10;

/// Category id 1 is the synthetic "最新" category: it means "all categories"
/// in list queries and never appears in admin-facing category lists.
pub const HOME_CATEGORY_ID: i32 = 1;

/// Cloopen template used for verification-code messages.
pub const SMS_CODE_TEMPLATE_ID: &str = "1";
