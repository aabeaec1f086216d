//! Endpoint Tests
//!
//! `RestEndpoint` against a local hyper server, `InMemoryEndpoint` list
//! semantics.

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;
    use http_body_util::{BodyExt, Full};
    use hyper::body::{Bytes, Incoming};
    use hyper::server::conn::http1;
    use hyper::service::service_fn;
    use hyper::{Request, Response};
    use hyper_util::rt::TokioIo;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use crate::domain::{
        Record, RecordDraft, SearchColumn, Sort, SortField, SortOrder, SyncError, ViewState,
    };
    use crate::endpoint::{InMemoryEndpoint, RecordEndpoint, RestEndpoint};

    #[derive(Debug, Clone)]
    struct Captured {
        method: String,
        uri: String,
        body: String,
    }

    struct TestServer {
        base_url: String,
        captured: Arc<Mutex<Vec<Captured>>>,
        responses: Arc<Mutex<VecDeque<(u16, String)>>>,
    }

    impl TestServer {
        /// Serve scripted responses; unscripted requests get `200` with an empty body
        async fn start() -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            let addr = listener.local_addr().expect("addr");
            let captured = Arc::new(Mutex::new(Vec::new()));
            let responses = Arc::new(Mutex::new(VecDeque::new()));

            let server_captured = captured.clone();
            let server_responses = responses.clone();
            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let captured = server_captured.clone();
                    let responses = server_responses.clone();
                    tokio::spawn(async move {
                        let service = service_fn(move |req: Request<Incoming>| {
                            let captured = captured.clone();
                            let responses = responses.clone();
                            async move {
                                let method = req.method().to_string();
                                let uri = req.uri().to_string();
                                let body = req
                                    .into_body()
                                    .collect()
                                    .await
                                    .map(|b| b.to_bytes())
                                    .unwrap_or_default();
                                captured.lock().unwrap().push(Captured {
                                    method,
                                    uri,
                                    body: String::from_utf8_lossy(&body).into_owned(),
                                });
                                let (status, body) = responses
                                    .lock()
                                    .unwrap()
                                    .pop_front()
                                    .unwrap_or((200, String::new()));
                                Ok::<_, Infallible>(
                                    Response::builder()
                                        .status(status)
                                        .header("Content-Type", "application/json")
                                        .body(Full::new(Bytes::from(body)))
                                        .unwrap(),
                                )
                            }
                        });
                        let _ = http1::Builder::new()
                            .serve_connection(TokioIo::new(stream), service)
                            .await;
                    });
                }
            });

            Self {
                base_url: format!("http://{}", addr),
                captured,
                responses,
            }
        }

        fn respond(&self, status: u16, body: impl Into<String>) {
            self.responses.lock().unwrap().push_back((status, body.into()));
        }

        fn requests(&self) -> Vec<Captured> {
            self.captured.lock().unwrap().clone()
        }

        fn endpoint(&self) -> RestEndpoint {
            RestEndpoint::new(&self.base_url).expect("endpoint")
        }
    }

    fn draft() -> RecordDraft {
        RecordDraft {
            name: "Harbor View".into(),
            reviews: 14,
            start_date: NaiveDate::from_ymd_opt(2023, 5, 6).unwrap(),
            picture: "https://example.com/harbor.png".into(),
        }
    }

    fn record(id: u64, name: &str, reviews: u32, date: &str) -> Record {
        Record {
            id,
            name: name.into(),
            reviews,
            start_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            picture: format!("https://example.com/{}.png", id),
        }
    }

    // ========================
    // RestEndpoint
    // ========================

    #[tokio::test]
    async fn test_list_sends_view_state_as_query() {
        let server = TestServer::start().await;
        server.respond(
            200,
            json!({
                "data": [{"id": 1, "name": "a", "reviews": 3, "start_date": "2024-01-02", "picture": "https://x.io/1"}],
                "total": 1
            })
            .to_string(),
        );

        let view = ViewState::default().with_view(2, 20, Some(Sort::new(SortField::Reviews, SortOrder::Descend)));
        let page = server.endpoint().list(&view).await.expect("list");

        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id, 1);
        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].uri,
            "/data?page=2&pageSize=20&search=&searchColumn=&sortField=reviews&sortOrder=descend"
        );
    }

    #[tokio::test]
    async fn test_list_without_sort_omits_sort_params() {
        let server = TestServer::start().await;
        server.respond(200, r#"{"data":[],"total":0}"#);

        let view = ViewState::default()
            .with_view(1, 10, None)
            .with_search("harbor view")
            .with_search_column(Some(SearchColumn::StartDate));
        server.endpoint().list(&view).await.expect("list");

        assert_eq!(
            server.requests()[0].uri,
            "/data?page=1&pageSize=10&search=harbor+view&searchColumn=start_date"
        );
    }

    #[tokio::test]
    async fn test_create_posts_fields_without_id() {
        let server = TestServer::start().await;
        server.endpoint().create(&draft()).await.expect("create");

        let request = &server.requests()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.uri, "/data");
        let body: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            json!({"name": "Harbor View", "reviews": 14, "start_date": "2023-05-06", "picture": "https://example.com/harbor.png"})
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_address_record_by_id() {
        let server = TestServer::start().await;
        let endpoint = server.endpoint();
        endpoint.update(7, &draft()).await.expect("update");
        endpoint.delete(7).await.expect("delete");

        let requests = server.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].uri, "/data/7");
        assert!(requests[0].body.contains("\"reviews\":14"));
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[1].uri, "/data/7");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = TestServer::start().await;
        server.respond(500, "boom");

        let err = server.endpoint().delete(3).await.unwrap_err();
        assert_eq!(err, SyncError::status(500, "boom"));
    }

    #[tokio::test]
    async fn test_malformed_list_body_is_decode_error() {
        let server = TestServer::start().await;
        server.respond(200, r#"{"rows": []}"#);

        let err = server.endpoint().list(&ViewState::default()).await.unwrap_err();
        assert!(matches!(err, SyncError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = RestEndpoint::new(&format!("http://{}/", addr)).unwrap();
        let err = endpoint.list(&ViewState::default()).await.unwrap_err();
        assert!(matches!(err, SyncError::Transport(_)), "got {:?}", err);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(RestEndpoint::new("not a url"), Err(SyncError::InvalidUrl(_))));
        assert_eq!(RestEndpoint::new("http://api.local/").unwrap().base_url(), "http://api.local");
    }

    // ========================
    // InMemoryEndpoint
    // ========================

    fn seeded() -> InMemoryEndpoint {
        InMemoryEndpoint::with_records(vec![
            record(1, "Lakeside", 40, "2022-01-10"),
            record(2, "Harbor", 5, "2023-06-01"),
            record(3, "Hillside", 12, "2021-09-15"),
            record(4, "Riverside", 40, "2023-02-20"),
        ])
    }

    #[tokio::test]
    async fn test_memory_search_scoped_to_column() {
        let endpoint = seeded();

        let view = ViewState::default().with_search("SIDE").with_search_column(Some(SearchColumn::Name));
        let page = endpoint.list(&view).await.unwrap();
        assert_eq!(page.total, 3);

        let view = ViewState::default().with_search("2023").with_search_column(Some(SearchColumn::StartDate));
        let ids: Vec<u64> = endpoint.list(&view).await.unwrap().data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);

        // No column searches every searchable column
        let view = ViewState::default().with_search("3");
        let ids: Vec<u64> = endpoint.list(&view).await.unwrap().data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn test_memory_sort_and_paging() {
        let endpoint = seeded();
        let view = ViewState::default().with_view(1, 3, Some(Sort::new(SortField::StartDate, SortOrder::Descend)));
        let page = endpoint.list(&view).await.unwrap();
        assert_eq!(page.total, 4);
        assert_eq!(page.data.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 4, 1]);

        let page = endpoint.list(&view.with_view(2, 3, view.sort)).await.unwrap();
        assert_eq!(page.data.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
    }

    #[tokio::test]
    async fn test_memory_create_assigns_next_id() {
        let endpoint = seeded();
        endpoint.create(&draft()).await.unwrap();
        let created = endpoint.records().pop().unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.name, "Harbor View");
    }

    #[tokio::test]
    async fn test_memory_missing_record_is_not_found() {
        let endpoint = seeded();
        let err = endpoint.delete(99).await.unwrap_err();
        assert!(matches!(err, SyncError::Status { status: 404, .. }));
        assert_eq!(endpoint.records().len(), 4);
    }
}
