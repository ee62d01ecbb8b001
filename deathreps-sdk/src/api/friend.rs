use serde::Deserialize;

use crate::model::friend::{FriendStatus, Friendship};
use crate::model::user::UserProfile;
use crate::Result;

/// Full visible relationship set plus the profiles of every user appearing
/// in it. The server deduplicates `users`, but the directory merge is
/// idempotent either way.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct FriendsResponse {
    pub friendships: Vec<Friendship>,
    pub users: Vec<UserProfile>,
}

#[async_trait::async_trait(?Send)]
pub trait FriendApi {
    async fn list_friendships(&self) -> Result<FriendsResponse>;

    /// Creates a pending relationship with the caller as requester. The
    /// target id is validated client-side before any network I/O.
    async fn create_friend_request(&self, target_id: &str) -> Result<()>;

    async fn update_status(&self, id: i64, status: FriendStatus) -> Result<()>;

    /// removes a relationship unconditionally; also used to reject pending
    async fn delete_friendship(&self, id: i64) -> Result<()>;
}

/// a status transition or removal on an existing relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Accept(i64),
    Block(i64),
    Unblock(i64),
    Remove(i64),
}

/// Runs one mutation and, only on success, exactly one full list refetch.
/// The caller replaces its snapshot with the returned list instead of
/// patching it locally, so the view never diverges from server state.
pub async fn mutate_then_refetch(
    api: &dyn FriendApi,
    mutation: Mutation,
) -> Result<FriendsResponse> {
    match mutation {
        Mutation::Accept(id) => api.update_status(id, FriendStatus::Accepted).await?,
        Mutation::Block(id) => api.update_status(id, FriendStatus::Blocked).await?,
        Mutation::Unblock(id) => api.update_status(id, FriendStatus::Accepted).await?,
        Mutation::Remove(id) => api.delete_friendship(id).await?,
    }
    api.list_friendships().await
}

#[cfg(test)]
mod test {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::error::Error;
    use crate::model::friend::{FriendTab, FriendsSnapshot, LoadState};

    #[derive(Default)]
    struct MockApi {
        list_calls: Cell<usize>,
        update_calls: RefCell<Vec<(i64, FriendStatus)>>,
        delete_calls: RefCell<Vec<i64>>,
        // popped front-to-back, one per list call
        list_results: RefCell<Vec<Result<FriendsResponse>>>,
        mutation_error: RefCell<Option<Error>>,
    }

    #[async_trait::async_trait(?Send)]
    impl FriendApi for MockApi {
        async fn list_friendships(&self) -> Result<FriendsResponse> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.list_results.borrow_mut().remove(0)
        }

        async fn create_friend_request(&self, _target_id: &str) -> Result<()> {
            Ok(())
        }

        async fn update_status(&self, id: i64, status: FriendStatus) -> Result<()> {
            self.update_calls.borrow_mut().push((id, status));
            match self.mutation_error.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        async fn delete_friendship(&self, id: i64) -> Result<()> {
            self.delete_calls.borrow_mut().push(id);
            Ok(())
        }
    }

    fn ship(id: i64, requester: &str, recipient: &str, status: FriendStatus) -> Friendship {
        Friendship {
            id,
            requester_id: requester.to_string().into(),
            recipient_id: recipient.to_string().into(),
            status,
            created_at: 1_700_000_000_000,
        }
    }

    fn response(friendships: Vec<Friendship>) -> FriendsResponse {
        FriendsResponse {
            friendships,
            users: vec![],
        }
    }

    #[test]
    fn successful_mutation_refetches_exactly_once() {
        let api = MockApi::default();
        api.list_results.borrow_mut().push(Ok(response(vec![ship(
            1,
            "A",
            "B",
            FriendStatus::Accepted,
        )])));

        let resp = block_on(mutate_then_refetch(&api, Mutation::Accept(1))).unwrap();

        assert_eq!(
            *api.update_calls.borrow(),
            vec![(1, FriendStatus::Accepted)]
        );
        assert_eq!(api.list_calls.get(), 1);
        assert_eq!(resp.friendships.len(), 1);
    }

    #[test]
    fn failed_mutation_skips_the_refetch() {
        let api = MockApi::default();
        *api.mutation_error.borrow_mut() = Some(Error::NotFound("no such friendship".into()));

        let err = block_on(mutate_then_refetch(&api, Mutation::Block(7))).unwrap_err();

        assert_eq!(err, Error::NotFound("no such friendship".into()));
        assert_eq!(api.list_calls.get(), 0);
    }

    #[test]
    fn remove_and_reject_use_delete() {
        let api = MockApi::default();
        api.list_results.borrow_mut().push(Ok(response(vec![])));

        block_on(mutate_then_refetch(&api, Mutation::Remove(3))).unwrap();

        assert_eq!(*api.delete_calls.borrow(), vec![3]);
        assert!(api.update_calls.borrow().is_empty());
        assert_eq!(api.list_calls.get(), 1);
    }

    #[test]
    fn unblock_transitions_back_to_accepted() {
        let api = MockApi::default();
        api.list_results.borrow_mut().push(Ok(response(vec![])));

        block_on(mutate_then_refetch(&api, Mutation::Unblock(4))).unwrap();

        assert_eq!(
            *api.update_calls.borrow(),
            vec![(4, FriendStatus::Accepted)]
        );
    }

    // pending A -> B seen by B shows up under Incoming with other party A;
    // accepting it moves it to Overview on the refetched list
    #[test]
    fn accept_moves_request_from_incoming_to_overview() {
        let session_user = "B";
        let api = MockApi::default();
        api.list_results
            .borrow_mut()
            .push(Ok(response(vec![ship(1, "A", "B", FriendStatus::Pending)])));
        api.list_results.borrow_mut().push(Ok(response(vec![ship(
            1,
            "A",
            "B",
            FriendStatus::Accepted,
        )])));

        let mut snapshot = FriendsSnapshot::default();
        snapshot.begin_loading();
        snapshot.resolve(block_on(api.list_friendships()).unwrap().friendships);

        let incoming = FriendTab::Incoming.filter(&snapshot.list);
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].other_party(session_user), "A");
        assert!(FriendTab::Overview.filter(&snapshot.list).is_empty());

        snapshot.begin_loading();
        let refetched = block_on(mutate_then_refetch(&api, Mutation::Accept(1))).unwrap();
        snapshot.resolve(refetched.friendships);

        assert_eq!(snapshot.state, LoadState::Ready);
        assert!(FriendTab::Incoming.filter(&snapshot.list).is_empty());
        let overview = FriendTab::Overview.filter(&snapshot.list);
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].other_party(session_user), "A");
    }

    #[test]
    fn list_failure_reports_a_message_and_keeps_prior_list() {
        let api = MockApi::default();
        api.list_results
            .borrow_mut()
            .push(Err(Error::Network("connection refused".into())));

        let mut snapshot = FriendsSnapshot::default();
        snapshot.begin_loading();
        let err = block_on(api.list_friendships()).unwrap_err();
        snapshot.fail(err.to_string().into());

        assert!(snapshot.list.is_empty());
        match snapshot.state {
            LoadState::Failed(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
