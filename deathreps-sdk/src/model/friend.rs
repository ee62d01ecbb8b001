use serde::{Deserialize, Serialize};
use yew::AttrValue;

use crate::error::Error;
use crate::Result;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    #[default]
    Pending,
    Accepted,
    Blocked,
}

/// A directed relationship record. The server guarantees that exactly one
/// of requester/recipient is the session user for any record it returns.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub id: i64,
    pub requester_id: AttrValue,
    pub recipient_id: AttrValue,
    pub status: FriendStatus,
    pub created_at: i64,
}

impl Friendship {
    /// The non-self participant. Display never cares which side initiated.
    pub fn other_party(&self, session_user: &str) -> AttrValue {
        if self.requester_id.as_str() == session_user {
            self.recipient_id.clone()
        } else {
            self.requester_id.clone()
        }
    }
}

/// Tabs of the friends view; each one projects a single status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FriendTab {
    #[default]
    Overview,
    Blocked,
    Incoming,
}

impl FriendTab {
    pub const ALL: [FriendTab; 3] = [FriendTab::Overview, FriendTab::Blocked, FriendTab::Incoming];

    pub fn status(&self) -> FriendStatus {
        match self {
            FriendTab::Overview => FriendStatus::Accepted,
            FriendTab::Blocked => FriendStatus::Blocked,
            FriendTab::Incoming => FriendStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FriendTab::Overview => "Friends",
            FriendTab::Blocked => "Blocked",
            FriendTab::Incoming => "Incoming",
        }
    }

    /// the subset of the list visible under this tab
    pub fn filter<'a>(&self, list: &'a [Friendship]) -> Vec<&'a Friendship> {
        let status = self.status();
        list.iter().filter(|f| f.status == status).collect()
    }
}

/// Friend id validation policy. Discord snowflakes are 18-digit numeric
/// strings; a deployment with another identity provider can widen this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPolicy {
    pub id_len: usize,
}

impl Default for IdPolicy {
    fn default() -> Self {
        Self { id_len: 18 }
    }
}

impl IdPolicy {
    /// Fast-fail check, run before any network call. The server may apply
    /// its own, stricter validation on top.
    pub fn validate(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::Validation("friend id is empty".into()));
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Validation("friend id must be numeric".into()));
        }
        if id.len() != self.id_len {
            return Err(Error::Validation(format!(
                "friend id must be {} digits",
                self.id_len
            )));
        }
        if id.bytes().all(|b| b == b'0') {
            return Err(Error::Validation("friend id must be positive".into()));
        }
        Ok(())
    }
}

/// load lifecycle of the friends view snapshot
#[derive(Debug, Default, Clone, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(AttrValue),
}

/// The friends view's owned copy of the relationship list. It is discarded
/// and refetched on mount and after every successful mutation; a failed
/// fetch keeps the previous list visible alongside the error.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FriendsSnapshot {
    pub list: Vec<Friendship>,
    pub state: LoadState,
}

impl FriendsSnapshot {
    pub fn begin_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn resolve(&mut self, list: Vec<Friendship>) {
        self.list = list;
        self.state = LoadState::Ready;
    }

    /// prior list stays untouched
    pub fn fail(&mut self, message: AttrValue) {
        self.state = LoadState::Failed(message);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ship(id: i64, requester: &str, recipient: &str, status: FriendStatus) -> Friendship {
        Friendship {
            id,
            requester_id: requester.to_string().into(),
            recipient_id: recipient.to_string().into(),
            status,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn tabs_partition_the_list() {
        let list = vec![
            ship(1, "A", "B", FriendStatus::Accepted),
            ship(2, "C", "B", FriendStatus::Pending),
            ship(3, "B", "D", FriendStatus::Blocked),
            ship(4, "E", "B", FriendStatus::Accepted),
            ship(5, "B", "F", FriendStatus::Pending),
        ];

        let mut seen = 0;
        for tab in FriendTab::ALL {
            let visible = tab.filter(&list);
            assert!(visible.iter().all(|f| f.status == tab.status()));
            seen += visible.len();
        }
        // disjoint and complete: every record lands in exactly one tab
        assert_eq!(seen, list.len());

        let incoming = FriendTab::Incoming.filter(&list);
        assert_eq!(
            incoming.iter().map(|f| f.id).collect::<Vec<_>>(),
            vec![2, 5]
        );
        assert_eq!(FriendTab::Overview.filter(&list).len(), 2);
        assert_eq!(FriendTab::Blocked.filter(&list).len(), 1);
    }

    #[test]
    fn other_party_is_never_the_session_user() {
        let f = ship(1, "A", "B", FriendStatus::Pending);
        assert_eq!(f.other_party("A"), "B");
        assert_eq!(f.other_party("B"), "A");
    }

    #[test]
    fn id_policy_rejects_bad_ids() {
        let policy = IdPolicy::default();
        assert!(matches!(policy.validate(""), Err(Error::Validation(_))));
        assert!(matches!(policy.validate("abc"), Err(Error::Validation(_))));
        assert!(matches!(policy.validate("123"), Err(Error::Validation(_))));
        // "0" fails on length before the zero check; either rule is fine
        assert!(matches!(policy.validate("0"), Err(Error::Validation(_))));
        // right length, not numeric
        assert!(matches!(
            policy.validate("12345678901234567x"),
            Err(Error::Validation(_))
        ));
        // numerically zero
        assert!(matches!(
            policy.validate("000000000000000000"),
            Err(Error::Validation(_))
        ));
        assert!(policy.validate("123456789012345678").is_ok());
    }

    #[test]
    fn id_policy_length_is_configurable() {
        let policy = IdPolicy { id_len: 3 };
        assert!(policy.validate("123").is_ok());
        assert!(policy.validate("123456789012345678").is_err());
    }

    #[test]
    fn failed_fetch_keeps_prior_list() {
        let mut snapshot = FriendsSnapshot::default();
        assert_eq!(snapshot.state, LoadState::Idle);

        snapshot.begin_loading();
        assert_eq!(snapshot.state, LoadState::Loading);

        snapshot.resolve(vec![ship(1, "A", "B", FriendStatus::Accepted)]);
        assert_eq!(snapshot.state, LoadState::Ready);

        snapshot.begin_loading();
        snapshot.fail("network error: timed out".into());
        assert_eq!(snapshot.list.len(), 1);
        assert!(matches!(snapshot.state, LoadState::Failed(ref msg) if !msg.is_empty()));
    }
}
