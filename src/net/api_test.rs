use super::*;

// =============================================================
// Query-value encoding
// =============================================================

#[test]
fn encode_query_value_passes_unreserved_through() {
    assert_eq!(encode_query_value("Alice-J_2.~"), "Alice-J_2.~");
}

#[test]
fn encode_query_value_escapes_query_delimiters() {
    assert_eq!(encode_query_value("a&b"), "a%26b");
    assert_eq!(encode_query_value("a#b"), "a%23b");
    assert_eq!(encode_query_value("a+b"), "a%2Bb");
    assert_eq!(encode_query_value("100%"), "100%25");
    assert_eq!(encode_query_value("John Smith"), "John%20Smith");
}

#[test]
fn encode_query_value_escapes_multibyte_utf8() {
    assert_eq!(encode_query_value("王"), "%E7%8E%8B");
}

// =============================================================
// Records query string
// =============================================================

#[test]
fn records_query_defaults_to_first_page_of_ten() {
    let query = RecordQuery::default();
    assert_eq!(records_query_string(&query), "?page=0&size=10");
}

#[test]
fn records_query_includes_only_set_filters() {
    let query = RecordQuery {
        kind: "SICK".to_owned(),
        start: "2026-03-01T00:00:00".to_owned(),
        ..RecordQuery::default()
    };
    assert_eq!(
        records_query_string(&query),
        "?type=SICK&start=2026-03-01T00%3A00%3A00&page=0&size=10"
    );
}

#[test]
fn records_query_full_filter_order_is_stable() {
    let query = RecordQuery {
        english_name: "Alice".to_owned(),
        kind: "ANNUAL".to_owned(),
        start: "2026-01-01T00:00:00".to_owned(),
        end: "2026-12-31T23:59:59".to_owned(),
        page: 2,
        size: 25,
    };
    assert_eq!(
        records_query_string(&query),
        "?englishName=Alice&type=ANNUAL&start=2026-01-01T00%3A00%3A00&end=2026-12-31T23%3A59%3A59&page=2&size=25"
    );
}

#[test]
fn records_query_encodes_free_text_name() {
    let query = RecordQuery {
        english_name: "John & Jane".to_owned(),
        ..RecordQuery::default()
    };
    assert_eq!(
        records_query_string(&query),
        "?englishName=John%20%26%20Jane&page=0&size=10"
    );
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn endpoint_paths_embed_ids() {
    assert_eq!(annual_leave_endpoint(3), "/api/employees/3/annual-leave");
    assert_eq!(record_endpoint(12), "/api/leave-requests/12");
}
