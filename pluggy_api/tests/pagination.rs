use chrono::NaiveDate;
use pluggy_api::{Client, Error, TransactionFilters, MAX_PAGE_SIZE};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "id", "secret")
        .unwrap()
        .with_api_key("api-key-1")
}

fn transaction(id: &str) -> Value {
    json!({
        "id": id,
        "accountId": "acc-1",
        "date": "2024-01-03T00:00:00.000Z",
        "description": format!("Transaction {}", id),
        "type": "DEBIT",
        "amount": -10.5,
        "currencyCode": "BRL"
    })
}

fn page(ids: &[&str], page: u32, total_pages: u32) -> Value {
    json!({
        "total": 7,
        "totalPages": total_pages,
        "page": page,
        "results": ids.iter().map(|id| transaction(id)).collect::<Vec<_>>()
    })
}

async fn mount_page(server: &MockServer, page_number: u32, body: Value) {
    let mock = Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("accountId", "acc-1"))
        .and(query_param("pageSize", MAX_PAGE_SIZE.to_string()));
    let mock = if page_number == 1 {
        mock.and(query_param_is_missing("page"))
    } else {
        mock.and(query_param("page", page_number.to_string()))
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn single_page_issues_one_call() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, page(&["c", "a", "b"], 1, 1)).await;

    let results = client(&mock_server)
        .fetch_all_transactions("acc-1", TransactionFilters::default())
        .await
        .unwrap();

    let ids: Vec<&str> = results.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn pages_are_concatenated_in_order() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, page(&["1a", "1b", "1c"], 1, 3)).await;
    mount_page(&mock_server, 2, page(&["2a", "2b", "2c"], 2, 3)).await;
    mount_page(&mock_server, 3, page(&["3a"], 3, 3)).await;

    let results = client(&mock_server)
        .fetch_all_transactions("acc-1", TransactionFilters::default())
        .await
        .unwrap();

    let ids: Vec<&str> = results.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1a", "1b", "1c", "2a", "2b", "2c", "3a"]);

    let requests = mock_server.received_requests().await.unwrap();
    let pages: Vec<Option<String>> = requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
        })
        .collect();
    assert_eq!(pages, vec![None, Some("2".to_string()), Some("3".to_string())]);
}

#[tokio::test]
async fn date_filters_are_sent_on_every_page() {
    let mock_server = MockServer::start().await;
    for n in 1..=2 {
        let mock = Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("from", "2024-01-01"))
            .and(query_param("to", "2024-01-31"));
        let mock = if n == 1 {
            mock.and(query_param_is_missing("page"))
        } else {
            mock.and(query_param("page", "2"))
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(page(&["x"], n, 2)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let filters = TransactionFilters::default()
        .with_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .with_to(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    let results = client(&mock_server)
        .fetch_all_transactions("acc-1", filters)
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn failing_page_aborts_without_partial_results() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, page(&["1a"], 1, 3)).await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["3a"], 3, 3)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .fetch_all_transactions("acc-1", TransactionFilters::default())
        .await
        .unwrap_err();

    match err {
        Error::Request { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn investment_transactions_walk_all_pages() {
    let mock_server = MockServer::start().await;
    let movement = |id: &str| {
        json!({"id": id, "type": "BUY", "date": "2024-01-02T00:00:00.000Z", "amount": 100.0})
    };
    Mock::given(method("GET"))
        .and(path("/investments/inv-1/transactions"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2, "totalPages": 2, "page": 1, "results": [movement("m1")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/investments/inv-1/transactions"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2, "totalPages": 2, "page": 2, "results": [movement("m2")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = client(&mock_server)
        .fetch_all_investment_transactions("inv-1")
        .await
        .unwrap();
    let ids: Vec<&str> = results.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2"]);
}
