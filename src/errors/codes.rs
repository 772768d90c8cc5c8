pub struct ErrorCode;

impl ErrorCode {
    // Config errors: F1xx
    pub const CONFIG_READ_FAILED: &'static str = "F100";
    pub const CONFIG_PARSE_FAILED: &'static str = "F101";
    pub const CONFIG_INVALID_DEFAULT_SORT: &'static str = "F102";

    // Sort errors: S1xx
    pub const SORT_INVALID_KEY: &'static str = "S100";
    pub const SORT_MISSING_PRIMARY_NAME: &'static str = "S101";

    // Container client errors: C1xx
    pub const CONTAINER_CONNECT_FAILED: &'static str = "C100";
    pub const CONTAINER_LIST_FAILED: &'static str = "C101";
    pub const CONTAINER_INSPECT_FAILED: &'static str = "C102";
}
