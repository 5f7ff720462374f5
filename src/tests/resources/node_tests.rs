use crate::{
    CreateNodeParams, Image, ImageExtra, Location, Node, NodeDriver, NodeExtra, NodeState, Size,
    SizeExtra, SshPublicKey, StorageType, UpcloudError, ValidationError,
    tests::{TEST_AUTH_HEADER, create_test_client},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, body_json, header, method, path},
};

fn server_detail(uuid: &str, title: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "server": {
            "boot_order": "disk",
            "core_number": "1",
            "hostname": "localhost",
            "ip_addresses": {
                "ip_address": [
                    {"access": "private", "address": "10.2.5.1", "family": "IPv4"},
                    {"access": "public", "address": "94.237.33.12", "family": "IPv4"}
                ]
            },
            "memory_amount": "1024",
            "plan": "1xCPU-1GB",
            "state": state,
            "title": title,
            "uuid": uuid,
            "vnc_password": "aabbccdd",
            "zone": "fi-hel1"
        }
    })
}

fn image(storage_type: StorageType) -> Image {
    Image {
        id: "01000000-0000-4000-8000-000030060200".to_string(),
        name: "Ubuntu Server 16.04 LTS (Xenial Xerus)".to_string(),
        extra: ImageExtra {
            access: "public".to_string(),
            license: 0.0,
            size: 3,
            state: "online".to_string(),
            storage_type,
        },
    }
}

fn size() -> Size {
    Size {
        id: "1xCPU-1GB".to_string(),
        name: "1xCPU-1GB".to_string(),
        ram: 1024,
        disk: 30,
        bandwidth: 2048,
        price: None,
        extra: SizeExtra {
            core_number: 1,
            storage_tier: "maxiops".to_string(),
        },
    }
}

fn params(storage_type: StorageType) -> CreateNodeParams {
    CreateNodeParams::builder()
        .name("ts")
        .image(image(storage_type))
        .size(size())
        .location(Location::from_zone("fi-hel1", "Helsinki #1"))
        .username("somename")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_nodes_fetches_each_server() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/1.2/server"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "servers": {
                "server": [
                    {"uuid": "uuid-1", "title": "web", "state": "started", "zone": "fi-hel1"},
                    {"uuid": "uuid-2", "title": "db", "state": "error", "zone": "fi-hel1"}
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.2/server/uuid-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(server_detail("uuid-1", "web", "started")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.2/server/uuid-2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(server_detail("uuid-2", "db", "error")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let nodes = client.list_nodes().await.unwrap();
    assert_eq!(nodes.len(), 2);

    let web = &nodes[0];
    assert_eq!(web.id, "uuid-1");
    assert_eq!(web.name, "web");
    assert_eq!(web.state, NodeState::Running);
    assert_eq!(web.public_ips, ["94.237.33.12"]);
    assert_eq!(web.private_ips, ["10.2.5.1"]);
    assert_eq!(web.extra.vnc_password, "aabbccdd");
    assert_eq!(web.extra.password, None);

    assert_eq!(nodes[1].state, NodeState::Error);
}

#[tokio::test]
async fn test_list_nodes_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/1.2/server"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "servers": {"server": []}
        })))
        .mount(&mock_server)
        .await;

    let nodes = client.list_nodes().await.unwrap();
    assert!(nodes.is_empty());
}

#[tokio::test]
async fn test_get_node_stopped() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/1.2/server/uuid-9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(server_detail("uuid-9", "batch", "stopped")),
        )
        .mount(&mock_server)
        .await;

    let node = client.get_node("uuid-9").await.unwrap();
    assert_eq!(node.name, "batch");
    assert_eq!(node.state, NodeState::Stopped);
}

#[tokio::test]
async fn test_get_node_sends_the_id_as_one_segment() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/1.2/server/uuid-1%2Frestart%3Fx"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(server_detail("uuid-1", "web", "started")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let node = client.get_node("uuid-1/restart?x").await.unwrap();
    assert_eq!(node.id, "uuid-1");
}

#[tokio::test]
async fn test_dot_server_ids_are_rejected_before_sending() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    for id in ["", ".", ".."] {
        let result = client.get_node(id).await;
        assert!(matches!(result, Err(UpcloudError::Validation { .. })));

        let node = Node {
            id: id.to_string(),
            name: "web".to_string(),
            state: NodeState::Running,
            public_ips: vec![],
            private_ips: vec![],
            extra: NodeExtra {
                vnc_password: "aabbccdd".to_string(),
                password: None,
            },
        };
        let result = client.reboot_node(&node).await;
        assert!(matches!(result, Err(UpcloudError::Validation { .. })));
    }
}

#[tokio::test]
async fn test_create_node_from_template() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let expected_body = serde_json::json!({
        "server": {
            "title": "ts",
            "hostname": "localhost",
            "plan": "1xCPU-1GB",
            "zone": "fi-hel1",
            "login_user": {
                "username": "somename",
                "create_password": "yes"
            },
            "storage_devices": {
                "storage_device": [{
                    "action": "clone",
                    "title": "Ubuntu Server 16.04 LTS (Xenial Xerus)",
                    "storage": "01000000-0000-4000-8000-000030060200"
                }]
            }
        }
    });

    let mut created = server_detail("new-uuid", "ts", "maintenance");
    created["server"]["password"] = serde_json::json!("generated-pw");

    Mock::given(method("POST"))
        .and(path("/1.2/server"))
        .and(header("Authorization", TEST_AUTH_HEADER))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(202).set_body_json(created))
        .expect(1)
        .mount(&mock_server)
        .await;

    let node = client
        .create_node(&params(StorageType::Template))
        .await
        .unwrap();
    assert_eq!(node.id, "new-uuid");
    assert_eq!(node.state, NodeState::Starting);
    assert_eq!(node.extra.password.as_deref(), Some("generated-pw"));
    assert_eq!(node.public_ips, ["94.237.33.12"]);
}

#[tokio::test]
async fn test_create_node_from_cdrom_with_ssh_key() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let key = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIG me@laptop";
    let expected_body = serde_json::json!({
        "server": {
            "title": "ts",
            "hostname": "localhost",
            "plan": "1xCPU-1GB",
            "zone": "fi-hel1",
            "login_user": {
                "username": "root",
                "ssh_keys": {"ssh_key": [key]}
            },
            "storage_devices": {
                "storage_device": [
                    {
                        "action": "create",
                        "title": "Ubuntu Server 16.04 LTS (Xenial Xerus)",
                        "size": 30,
                        "tier": "maxiops"
                    },
                    {
                        "action": "attach",
                        "storage": "01000000-0000-4000-8000-000030060200",
                        "type": "cdrom"
                    }
                ]
            }
        }
    });

    let created = server_detail("new-uuid", "ts", "maintenance");

    Mock::given(method("POST"))
        .and(path("/1.2/server"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(202).set_body_json(created))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = CreateNodeParams::builder()
        .name("ts")
        .image(image(StorageType::Cdrom))
        .size(size())
        .location(Location::from_zone("fi-hel1", "Helsinki #1"))
        .ssh_key(SshPublicKey::new(key).unwrap())
        .build()
        .unwrap();

    let node = client.create_node(&params).await.unwrap();
    assert_eq!(node.state, NodeState::Starting);
    assert_eq!(node.extra.password, None);
}

#[tokio::test]
async fn test_create_node_with_unsupported_image_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/1.2/server"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client
        .create_node(&params(StorageType::Other("backup".to_string())))
        .await;
    assert!(matches!(
        result,
        Err(UpcloudError::Validation {
            source: ValidationError::ConstraintViolation(_)
        })
    ));
}

#[tokio::test]
async fn test_create_node_rejected_by_api() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path("/1.2/server"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": {
                "error_code": "INSUFFICIENT_CREDITS",
                "error_message": "Your account does not have enough credits."
            }
        })))
        .mount(&mock_server)
        .await;

    let err = client
        .create_node(&params(StorageType::Template))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some("INSUFFICIENT_CREDITS"));
}

#[tokio::test]
async fn test_reboot_node_hard_restart() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/1.2/server/uuid-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(server_detail("uuid-1", "web", "started")),
        )
        .mount(&mock_server)
        .await;

    let restart_body = serde_json::json!({"restart_server": {"stop_type": "hard"}});
    let restarting = server_detail("uuid-1", "web", "maintenance");

    Mock::given(method("POST"))
        .and(path("/1.2/server/uuid-1/restart"))
        .and(body_json(&restart_body))
        .respond_with(ResponseTemplate::new(202).set_body_json(restarting))
        .expect(1)
        .mount(&mock_server)
        .await;

    let node = client.get_node("uuid-1").await.unwrap();
    client.reboot_node(&node).await.unwrap();
}

#[tokio::test]
async fn test_reboot_node_failure_is_reported() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/1.2/server/uuid-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(server_detail("uuid-1", "web", "stopped")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/1.2/server/uuid-1/restart"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "error_code": "SERVER_STATE_ILLEGAL",
                "error_message": "The server is not in started state."
            }
        })))
        .mount(&mock_server)
        .await;

    let node = client.get_node("uuid-1").await.unwrap();
    let err = client.reboot_node(&node).await.unwrap_err();
    assert_eq!(err.error_code(), Some("SERVER_STATE_ILLEGAL"));
}
