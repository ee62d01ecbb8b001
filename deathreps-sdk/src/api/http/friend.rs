use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::api::friend::{FriendApi, FriendsResponse};
use crate::model::friend::{FriendStatus, IdPolicy};
use crate::Result;

use super::RespStatus;

pub struct FriendHttp;

/// list reply envelope
#[derive(Deserialize)]
struct ListResponse {
    data: FriendsResponse,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    friend_id: &'a str,
    status: FriendStatus,
}

#[derive(Serialize)]
struct UpdateRequest {
    friendship_id: i64,
    status: FriendStatus,
}

#[async_trait::async_trait(?Send)]
impl FriendApi for FriendHttp {
    async fn list_friendships(&self) -> Result<FriendsResponse> {
        let resp: ListResponse = Request::get("/api/friends")
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp.data)
    }

    async fn create_friend_request(&self, target_id: &str) -> Result<()> {
        // fast-fail before touching the network; the server may be stricter
        IdPolicy::default().validate(target_id)?;
        Request::post("/api/friends")
            .json(&CreateRequest {
                friend_id: target_id,
                status: FriendStatus::Pending,
            })?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn update_status(&self, id: i64, status: FriendStatus) -> Result<()> {
        Request::put("/api/friends")
            .json(&UpdateRequest {
                friendship_id: id,
                status,
            })?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn delete_friendship(&self, id: i64) -> Result<()> {
        Request::delete(&format!("/api/friends/{}", id))
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_envelope_deserializes() {
        let raw = r#"{
            "data": {
                "friendships": [
                    {
                        "id": 1,
                        "requesterId": "123456789012345678",
                        "recipientId": "876543210987654321",
                        "status": "pending",
                        "createdAt": 1700000000000
                    }
                ],
                "users": [
                    {"id": "123456789012345678", "username": "grim", "avatar": "a1b2"}
                ]
            }
        }"#;
        let resp: ListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.data.friendships[0].id, 1);
        assert_eq!(resp.data.friendships[0].status, FriendStatus::Pending);
        assert_eq!(resp.data.users[0].username, "grim");
    }

    #[test]
    fn create_body_matches_the_wire_shape() {
        let body = serde_json::to_value(CreateRequest {
            friend_id: "123456789012345678",
            status: FriendStatus::Pending,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"friend_id": "123456789012345678", "status": "pending"})
        );
    }

    #[test]
    fn update_body_matches_the_wire_shape() {
        let body = serde_json::to_value(UpdateRequest {
            friendship_id: 9,
            status: FriendStatus::Accepted,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"friendship_id": 9, "status": "accepted"})
        );
    }
}
