// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use chrono::NaiveDate;
use common::{app, session, FakeTransport, TRANSACTIONS_JSON};
use fintrack::dashboard::{
    category_shares, selectable_years, transactions_for_period, Period,
};
use fintrack::error::{FormError, SubmitError};
use fintrack::form::TransactionForm;
use fintrack::navigation::Navigator;
use fintrack::models::{Category, CategorySummary, Transaction, TransactionType};
use reqwest::Method;
use rust_decimal::Decimal;

const SUMMARY_JSON: &str = r#"{"totalIncome": 200, "totalExpense": 50, "balance": 150}"#;
const BY_CATEGORY_JSON: &str = r#"[{"category": "FOOD", "totalAmount": 50}]"#;

fn tx(id: i64, date: &str, kind: TransactionType, amount: i64) -> Transaction {
    Transaction {
        id,
        kind,
        amount: Decimal::from(amount),
        transaction_date: date.parse().unwrap(),
        category: match kind {
            TransactionType::Income => Category::Salary,
            TransactionType::Expense => Category::Food,
        },
        description: None,
    }
}

fn backend() -> std::sync::Arc<FakeTransport> {
    let fake = FakeTransport::new();
    fake.respond(Method::GET, "/api/transactions", 200, TRANSACTIONS_JSON);
    fake.respond(Method::GET, "/api/transactions/summary", 200, SUMMARY_JSON);
    fake.respond(
        Method::GET,
        "/api/transactions/expenses/by-category",
        200,
        BY_CATEGORY_JSON,
    );
    fake
}

#[test]
fn period_filter_sorts_newest_first() {
    let all = vec![
        tx(1, "2024-05-01", TransactionType::Expense, 50),
        tx(2, "2024-05-02", TransactionType::Income, 200),
    ];
    let out = transactions_for_period(&all, Period::new(2024, 5).unwrap());
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].transaction_date.to_string(), "2024-05-02");
    assert_eq!(out[0].kind, TransactionType::Income);
    assert_eq!(out[0].amount, Decimal::from(200));
    assert_eq!(out[1].transaction_date.to_string(), "2024-05-01");
    assert_eq!(out[1].kind, TransactionType::Expense);
    assert_eq!(out[1].amount, Decimal::from(50));
}

#[test]
fn period_filter_drops_other_months() {
    let all = vec![
        tx(1, "2024-04-30", TransactionType::Expense, 5),
        tx(2, "2024-05-15", TransactionType::Expense, 6),
        tx(3, "2023-05-15", TransactionType::Expense, 7),
    ];
    let out = transactions_for_period(&all, Period::new(2024, 5).unwrap());
    assert_eq!(out.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn period_rejects_bad_month_and_labels_nicely() {
    assert_eq!(Period::new(2024, 13), Err(FormError::InvalidMonth(13)));
    assert_eq!(Period::new(2024, 5).unwrap().label(), "May 2024");
    let today = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
    assert_eq!(Period::containing(today), Period { year: 2026, month: 1 });
}

#[test]
fn year_picker_counts_back_five_years() {
    assert_eq!(selectable_years(2024), vec![2024, 2023, 2022, 2021, 2020]);
}

#[test]
fn category_shares_add_up() {
    let items = vec![
        CategorySummary {
            category: Category::Food,
            total_amount: Decimal::from(75),
        },
        CategorySummary {
            category: Category::Bills,
            total_amount: Decimal::from(25),
        },
    ];
    let shares = category_shares(&items);
    assert_eq!(shares[0].category, "Food");
    assert_eq!(shares[0].share_pct, Decimal::from(75));
    assert_eq!(shares[1].share_pct, Decimal::from(25));
    assert!(category_shares(&[]).is_empty());
}

#[tokio::test]
async fn load_fills_all_three_sections() {
    let fake = backend();
    let (app, _) = app(&fake, Some(&session("T", "u")));

    let mut dashboard = app.dashboard(Period::new(2024, 5).unwrap());
    let data = dashboard.refresh().await.clone();

    assert_eq!(data.summary.as_ref().unwrap().balance, Decimal::from(150));
    assert_eq!(data.categories.as_ref().unwrap().len(), 1);
    let rows = data.period_transactions();
    assert_eq!(rows.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(rows[1].description.as_deref(), Some("groceries"));
}

#[tokio::test]
async fn failing_section_does_not_affect_the_others() {
    let fake = backend();
    fake.respond(
        Method::GET,
        "/api/transactions/summary",
        500,
        r#"{"message":"summary unavailable"}"#,
    );
    fake.fail(
        Method::GET,
        "/api/transactions/expenses/by-category",
        "connection reset",
    );
    let (app, _) = app(&fake, Some(&session("T", "u")));

    let mut dashboard = app.dashboard(Period::new(2024, 5).unwrap());
    let data = dashboard.refresh().await;

    assert_eq!(data.summary, Err("summary unavailable".to_string()));
    assert_eq!(
        data.categories,
        Err(fintrack::error::HttpError::GENERIC_MESSAGE.to_string())
    );
    assert_eq!(data.transactions.as_ref().unwrap().len(), 3);
}

#[tokio::test]
async fn create_refetches_everything() {
    let fake = backend();
    fake.respond(
        Method::POST,
        "/api/transactions",
        201,
        r#"{"id": 4, "type": "EXPENSE", "amount": 20, "transactionDate": "2024-05-03", "category": "BILLS", "description": "power"}"#,
    );
    let (app, _) = app(&fake, Some(&session("T", "u")));
    let mut dashboard = app.dashboard(Period::new(2024, 5).unwrap());

    let mut form = TransactionForm::new(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    form.amount = "20".into();
    form.category = Category::Bills;
    form.description = "power".into();
    let created = dashboard.create(&form).await.unwrap();

    assert_eq!(created.id, 4);
    assert_eq!(fake.count(Method::POST, "/api/transactions"), 1);
    assert_eq!(fake.count(Method::GET, "/api/transactions"), 1);
    assert_eq!(fake.count(Method::GET, "/api/transactions/summary"), 1);
    assert_eq!(
        fake.count(Method::GET, "/api/transactions/expenses/by-category"),
        1
    );
    let body = fake
        .requests()
        .into_iter()
        .find(|r| r.method == Method::POST)
        .and_then(|r| r.body)
        .unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "type": "EXPENSE",
            "amount": 20.0,
            "transactionDate": "2024-05-03",
            "category": "BILLS",
            "description": "power"
        })
    );
    assert!(dashboard.data().is_some());
}

#[tokio::test]
async fn update_and_delete_refetch_too() {
    let fake = backend();
    fake.respond(
        Method::PUT,
        "/api/transactions/1",
        200,
        r#"{"id": 1, "type": "EXPENSE", "amount": 55, "transactionDate": "2024-05-01", "category": "FOOD"}"#,
    );
    fake.respond(Method::DELETE, "/api/transactions/2", 204, "");
    let (app, _) = app(&fake, Some(&session("T", "u")));
    let mut dashboard = app.dashboard(Period::new(2024, 5).unwrap());

    let existing = tx(1, "2024-05-01", TransactionType::Expense, 50);
    let mut form = TransactionForm::from_transaction(&existing);
    form.amount = "55".into();
    dashboard.update(1, &form).await.unwrap();
    dashboard.delete(2).await.unwrap();

    assert_eq!(fake.count(Method::GET, "/api/transactions"), 2);
}

#[tokio::test]
async fn invalid_amount_never_reaches_the_backend() {
    let fake = backend();
    let (app, _) = app(&fake, Some(&session("T", "u")));
    let mut dashboard = app.dashboard(Period::new(2024, 5).unwrap());

    for bad in ["-5", "abc", "0", ""] {
        let mut form = TransactionForm::new(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        form.amount = bad.into();
        let err = dashboard.create(&form).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)), "{bad} accepted");
    }
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn failed_create_does_not_refetch() {
    let fake = backend();
    fake.respond(
        Method::POST,
        "/api/transactions",
        400,
        r#"{"message":"Amount too large"}"#,
    );
    let (app, _) = app(&fake, Some(&session("T", "u")));
    let mut dashboard = app.dashboard(Period::new(2024, 5).unwrap());

    let mut form = TransactionForm::new(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    form.amount = "1000000".into();
    let err = dashboard.create(&form).await.unwrap_err();

    match err {
        SubmitError::Http(e) => assert_eq!(e.message().as_deref(), Some("Amount too large")),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(fake.count(Method::GET, "/api/transactions"), 0);
}

#[tokio::test]
async fn changing_period_reloads_with_new_query() {
    let fake = backend();
    let (app, _) = app(&fake, Some(&session("T", "u")));
    let mut dashboard = app.dashboard(Period::new(2024, 5).unwrap());
    dashboard.refresh().await;

    let data = dashboard.select_period(Period::new(2024, 4).unwrap()).await;
    assert_eq!(
        data.period_transactions().iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![3]
    );
    assert_eq!(dashboard.period(), Period::new(2024, 4).unwrap());

    let last_summary = fake
        .requests()
        .into_iter()
        .filter(|r| r.path == "/api/transactions/summary")
        .last()
        .unwrap();
    assert!(last_summary
        .query
        .contains(&("month".to_string(), "4".to_string())));
}

#[tokio::test]
async fn expired_session_fails_the_dashboard_command() {
    let fake = FakeTransport::new();
    for path in [
        "/api/transactions",
        "/api/transactions/summary",
        "/api/transactions/expenses/by-category",
    ] {
        fake.respond(Method::GET, path, 401, "");
    }
    let (app, _) = app(&fake, Some(&session("stale", "u")));
    let m = fintrack::cli::build_cli()
        .try_get_matches_from(["fintrack", "dashboard", "--year", "2024", "--month", "5"])
        .unwrap();
    let (_, sub) = m.subcommand().unwrap();

    let err = fintrack::commands::reports::dashboard(&app, sub)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), fintrack::commands::SESSION_EXPIRED);
    assert!(app.session.current().is_none());
    assert_eq!(app.history.current_path(), "/login");
}
