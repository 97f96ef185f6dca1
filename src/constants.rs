/// Default Maestro API base URL
pub const DEFAULT_BASE_URL: &str = "https://developers.botcity.dev";
/// Versioned API prefix prepended to relative paths
pub const API_PREFIX: &str = "/api/v2";
/// Secondary, non-versioned prefix used by logs, runners, credentials and friends
pub const MAESTRO_API_PREFIX: &str = "/maestro/api";
/// Login route, relative to the base URL
pub const LOGIN_PATH: &str = "/api/v2/workspace/login";
/// Default request timeout in seconds, applied to every network call
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Seconds subtracted from a token's expiry so it is never used mid-expiry
pub const DEFAULT_TOKEN_SKEW_SECS: u64 = 10;
/// Assumed token validity in seconds when the login response carries no expiry
pub const DEFAULT_TOKEN_VALIDITY_SECS: u64 = 3600;
/// Default name of the header carrying the organization label
pub const DEFAULT_ORGANIZATION_HEADER: &str = "X-Organization";
/// Default page size for paged list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Default page size for datapool item listings
pub const DEFAULT_DATAPOOL_PAGE_SIZE: u32 = 100;
/// User agent string sent with every request
pub const USER_AGENT: &str = "maestro-client/0.1.0";
