pub const ACCEPT: &str = "Accept";
pub const REJECT: &str = "Reject";
pub const BLOCK: &str = "Block";
pub const UNBLOCK: &str = "Unblock";
pub const REMOVE: &str = "Remove";
pub const RETRY: &str = "Retry";
pub const REFRESH: &str = "Refresh";
pub const LOADING: &str = "Loading...";
pub const NO_FRIENDS: &str = "Nothing here yet";
pub const ADD_FRIEND_PROMPT: &str = "Add a friend by Discord id";
pub const REQUEST_SENT: &str = "Friend request sent";
pub const SETTINGS_SAVED: &str = "Settings saved";
pub const SAVE: &str = "Save";
pub const ADD_OVERRIDE: &str = "Add game override";
