pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SCOPE_TERMINATOR: &str = "aws4_request";
pub const SIGNED_HEADERS: &str = "content-type;host;x-amz-date";
pub const METHOD: &str = "POST";

pub const CONTENT_TYPE: &str = "content-type";
pub const HOST: &str = "host";
pub const AMZ_DATE: &str = "x-amz-date";
pub const CT_VALUE: &str = "application/xml";

pub const SERVICE_NAME: &str = "AGCODService";
pub const DEFAULT_REGION: &str = "eu-west-1";

// Sandbox endpoints carry the `-gamma` suffix.
pub const NA_SANDBOX_URL: &str = "https://agcod-v2-gamma.amazon.com";
pub const NA_PRODUCTION_URL: &str = "https://agcod-v2.amazon.com";
pub const EU_SANDBOX_URL: &str = "https://agcod-v2-eu-gamma.amazon.com";
pub const EU_PRODUCTION_URL: &str = "https://agcod-v2-eu.amazon.com";
pub const FE_SANDBOX_URL: &str = "https://agcod-v2-fe-gamma.amazon.com";
pub const FE_PRODUCTION_URL: &str = "https://agcod-v2-fe.amazon.com";
