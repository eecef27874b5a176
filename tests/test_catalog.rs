//! Store, validation rules and read pipeline, exercised without HTTP.

use produtos_api::app::parse_product_id;
use produtos_api::domain::product::validation::{NAME_EMPTY, NAME_REQUIRED, PRICE_INVALID};
use produtos_api::domain::product::{
    filter_and_paginate, validate_create, validate_update, FieldViolation,
};
use produtos_api::{
    CatalogService, CreateProductInput, ListQuery, ProductError, ProductPayload, ProductStore,
    UpdateProductInput,
};
use serde_json::{json, Number};

fn payload(value: serde_json::Value) -> ProductPayload {
    serde_json::from_value(value).unwrap()
}

fn input(name: &str, price: u64) -> CreateProductInput {
    CreateProductInput {
        name: name.to_string(),
        price: Number::from(price),
    }
}

fn query(nome: Option<&str>, page: Option<&str>, limit: Option<&str>) -> ListQuery {
    ListQuery {
        nome: nome.map(str::to_string),
        page: page.map(str::to_string),
        limit: limit.map(str::to_string),
    }
}

#[test]
fn store_assigns_increasing_ids_without_reuse() {
    let mut store = ProductStore::new();
    assert!(store.is_empty());
    let a = store.create(input("A", 1));
    let b = store.create(input("B", 2));
    assert_eq!((a.id, b.id), (1, 2));

    store.delete(b.id).unwrap();
    let c = store.create(input("C", 3));
    assert_eq!(c.id, 3);

    let ids: Vec<u64> = store.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn store_delete_keeps_survivor_order() {
    let mut store = ProductStore::new();
    for name in ["A", "B", "C", "D"] {
        store.create(input(name, 1));
    }
    store.delete(2).unwrap();

    let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);
    assert_eq!(store.delete(2), Err(ProductError::NotFound(2)));
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
}

#[test]
fn store_update_only_touches_supplied_fields() {
    let mut store = ProductStore::new();
    store.create(input("Teclado", 50));

    let updated = store
        .update(
            1,
            UpdateProductInput {
                name: None,
                price: Some(Number::from(80)),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Teclado");
    assert_eq!(updated.price, Number::from(80));
    assert_eq!(store.get_by_id(1).unwrap(), &updated);

    let missing = store.update(9, UpdateProductInput::default());
    assert_eq!(missing, Err(ProductError::NotFound(9)));
}

#[test]
fn create_rules_accept_numeric_strings_and_keep_name_as_sent() {
    let ok = validate_create(&payload(json!({ "nome": " Mouse ", "preco": "9.90" }))).unwrap();
    assert_eq!(ok.name, " Mouse ");
    assert_eq!(ok.price, Number::from_f64(9.9).unwrap());

    let ok = validate_create(&payload(json!({ "nome": "Cabo", "preco": "10" }))).unwrap();
    assert_eq!(ok, input("Cabo", 10));
}

#[test]
fn accepted_prices_keep_their_json_number() {
    let int = validate_create(&payload(json!({ "nome": "Teclado", "preco": 50 }))).unwrap();
    assert_eq!(json!(int.price), json!(50));

    let float = validate_create(&payload(json!({ "nome": "Teclado", "preco": 49.9 }))).unwrap();
    assert_eq!(json!(float.price), json!(49.9));

    let err = validate_create(&payload(json!({ "nome": "Teclado", "preco": "inf" }))).unwrap_err();
    assert!(matches!(err, ProductError::ValidationFailed(_)));
}

#[test]
fn create_rules_reject_in_declaration_order() {
    let err = validate_create(&payload(json!({ "preco": "NaN" }))).unwrap_err();
    assert_eq!(
        err,
        ProductError::ValidationFailed(vec![
            FieldViolation::new("nome", NAME_REQUIRED),
            FieldViolation::new("preco", PRICE_INVALID),
        ])
    );

    let err = validate_create(&payload(json!({ "nome": "Ok", "preco": true }))).unwrap_err();
    assert_eq!(
        err,
        ProductError::ValidationFailed(vec![FieldViolation::new("preco", PRICE_INVALID)])
    );
}

#[test]
fn update_rules_treat_present_keys_as_supplied() {
    let empty = validate_update(&payload(json!({}))).unwrap();
    assert_eq!(empty, UpdateProductInput::default());

    let err = validate_update(&payload(json!({ "nome": null, "preco": 0 }))).unwrap_err();
    assert_eq!(
        err,
        ProductError::ValidationFailed(vec![
            FieldViolation::new("nome", NAME_EMPTY),
            FieldViolation::new("preco", PRICE_INVALID),
        ])
    );
}

#[test]
fn pipeline_counts_filtered_total_and_slices_window() {
    let mut store = ProductStore::new();
    for name in ["Mouse Gamer", "Teclado", "mouse pad", "Monitor", "Mouse USB"] {
        store.create(input(name, 10));
    }

    let page = filter_and_paginate(store.list(), &query(Some("MOUSE"), Some("2"), Some("1")));
    assert_eq!(page.total, 3);
    assert_eq!((page.page, page.limit), (2, 1));
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "mouse pad");

    let all = filter_and_paginate(store.list(), &ListQuery::default());
    assert_eq!(all.total, 5);
    assert_eq!(all.products.len(), 5);
}

#[test]
fn pipeline_coerces_bad_paging_input_to_defaults() {
    let q = query(None, Some("0"), Some("-4"));
    assert_eq!((q.page(), q.limit()), (1, 10));

    let q = query(None, Some(" 3 "), Some("lots"));
    assert_eq!((q.page(), q.limit()), (3, 10));

    let mut store = ProductStore::new();
    store.create(input("A", 1));
    let far = filter_and_paginate(
        store.list(),
        &query(None, Some("18446744073709551615"), Some("18446744073709551615")),
    );
    assert_eq!(far.total, 1);
    assert!(far.products.is_empty());
}

#[test]
fn service_checks_id_before_payload() {
    let mut catalog = CatalogService::new();
    catalog
        .create(&payload(json!({ "nome": "Teclado", "preco": 50 })))
        .unwrap();

    let err = catalog
        .update("x1", &payload(json!({ "preco": -1 })))
        .unwrap_err();
    assert_eq!(err, ProductError::InvalidId("x1".to_string()));

    let err = catalog.update("1", &payload(json!({ "preco": -1 }))).unwrap_err();
    assert!(matches!(err, ProductError::ValidationFailed(_)));

    assert_eq!(catalog.get("1").unwrap().price, Number::from(50));
    assert_eq!(catalog.delete("2"), Err(ProductError::NotFound(2)));
    assert_eq!(catalog.get("abc"), Err(ProductError::InvalidId("abc".to_string())));
}

#[test]
fn ids_must_be_plain_digits() {
    for raw in ["+1", "-1", " 1", "1 ", "1e0", "0x1", "", "99999999999999999999"] {
        assert_eq!(
            parse_product_id(raw),
            Err(ProductError::InvalidId(raw.to_string())),
            "id {raw:?}"
        );
    }
    assert_eq!(parse_product_id("007"), Ok(7));
}

#[test]
fn repeated_query_keys_keep_the_first_value() {
    let pairs = [
        ("page", "2"),
        ("nome", "mouse"),
        ("page", "5"),
        ("nome", "teclado"),
        ("sort", "asc"),
        ("limit", "1"),
    ]
    .map(|(k, v)| (k.to_string(), v.to_string()));

    let q = ListQuery::from_pairs(pairs);
    assert_eq!(q.nome.as_deref(), Some("mouse"));
    assert_eq!((q.page(), q.limit()), (2, 1));
}
