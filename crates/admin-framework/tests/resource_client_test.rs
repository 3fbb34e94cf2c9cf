use admin_framework::mock::MockGateway;
use admin_framework::{ApiResource, GatewayError, Method, ResourceApi, ResourceClient, Unsupported};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Banner {
    id: u32,
    title: String,
}

#[derive(Debug, Serialize)]
struct BannerForm {
    title: String,
}

impl ApiResource for Banner {
    type Id = u32;
    type Create = BannerForm;
    type Update = BannerForm;

    const COLLECTION: &'static str = "/admin/banners";
    const LIST_KEY: &'static str = "banners";
    const ITEM_KEY: &'static str = "banner";
}

#[derive(Debug, PartialEq)]
enum BannerError {
    Api(String),
}

impl From<String> for BannerError {
    fn from(msg: String) -> Self {
        BannerError::Api(msg)
    }
}

struct BannerClient {
    inner: ResourceClient<Banner>,
}

impl ResourceApi<Banner> for BannerClient {
    type Error = BannerError;

    fn inner(&self) -> &ResourceClient<Banner> {
        &self.inner
    }

    fn map_error(e: GatewayError) -> Self::Error {
        BannerError::Api(e.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tag {
    #[allow(dead_code)]
    id: u32,
}

impl ApiResource for Tag {
    type Id = u32;
    type Create = Unsupported;
    type Update = Unsupported;

    const COLLECTION: &'static str = "/admin/tags";
    const LIST_KEY: &'static str = "tags";
    const ITEM_KEY: &'static str = "tag";
}

#[tokio::test]
async fn test_crud_requests_hit_member_paths() {
    let mut mock = MockGateway::new();
    mock.expect_post("/admin/banners")
        .return_ok(json!({ "banner": { "id": 4, "title": "Spring sale" } }));
    mock.expect_put("/admin/banners/4")
        .return_ok(json!({ "message": "updated" }));
    mock.expect_delete("/admin/banners/4").return_ok(Value::Null);
    let client = ResourceClient::<Banner>::new(mock.gateway());

    let created = client
        .create(BannerForm {
            title: "Spring sale".to_string(),
        })
        .await
        .unwrap();
    let updated = client
        .update(
            4,
            BannerForm {
                title: "Summer sale".to_string(),
            },
        )
        .await
        .unwrap();
    client.delete(4).await.unwrap();

    assert_eq!(
        created,
        Some(Banner {
            id: 4,
            title: "Spring sale".to_string()
        })
    );
    assert_eq!(updated, None);
    let sent = mock.requests();
    assert_eq!(sent[1].body, Some(json!({ "title": "Summer sale" })));
    assert_eq!(sent[2].method, Method::Delete);
    mock.verify();
}

#[tokio::test]
async fn test_resource_api_defaults_map_errors() {
    let mut mock = MockGateway::new();
    mock.expect_get("/admin/banners")
        .return_ok(json!({ "banners": [{ "id": 1, "title": "Welcome" }] }));
    mock.expect_get("/admin/banners/2").return_err(GatewayError::Status {
        status: 404,
        message: "Banner not found".to_string(),
    });
    mock.expect_delete("/admin/banners/2")
        .return_err(GatewayError::Transport("connection reset".to_string()));
    let client = BannerClient {
        inner: ResourceClient::new(mock.gateway()),
    };

    assert_eq!(client.list().await.unwrap().len(), 1);
    assert_eq!(client.get(2).await, Ok(None));
    match client.delete(2).await {
        Err(BannerError::Api(msg)) => assert!(msg.contains("connection reset")),
        other => panic!("Expected Api error, got {other:?}"),
    }
    mock.verify();
}

#[tokio::test]
async fn test_perform_action_patches_sub_path() {
    let mut mock = MockGateway::new();
    mock.expect_patch("/admin/tags/9/archive")
        .return_ok(json!({ "archived": true }));
    let client = ResourceClient::<Tag>::new(mock.gateway());

    let reply = client
        .perform_action(9, "archive", &json!({ "reason": "duplicate" }))
        .await
        .unwrap();

    assert_eq!(reply, json!({ "archived": true }));
    assert_eq!(
        mock.requests()[0].body,
        Some(json!({ "reason": "duplicate" }))
    );
}

#[tokio::test]
async fn test_malformed_envelope_is_a_decode_error() {
    let mut mock = MockGateway::new();
    mock.expect_get("/admin/tags")
        .return_ok(json!({ "items": [] }));
    let client = ResourceClient::<Tag>::new(mock.gateway());

    let err = client.list().await.unwrap_err();

    assert!(matches!(err, GatewayError::Decode(_)));
}
