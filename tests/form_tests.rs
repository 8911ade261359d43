// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::error::FormError;
use fintrack::form::{default_category, RegisterForm, TransactionForm};
use fintrack::models::{Category, TransactionType};
use rust_decimal::Decimal;
use std::str::FromStr;

fn form(amount: &str) -> TransactionForm {
    let mut f = TransactionForm::new(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    f.amount = amount.into();
    f
}

#[test]
fn default_category_follows_type() {
    assert_eq!(default_category(TransactionType::Income), Category::Salary);
    assert_eq!(default_category(TransactionType::Expense), Category::Food);
}

#[test]
fn new_form_is_an_expense_dated_today() {
    let f = form("");
    assert_eq!(f.kind, TransactionType::Expense);
    assert_eq!(f.category, Category::Food);
    assert_eq!(f.transaction_date, "2024-05-03");
}

#[test]
fn switching_type_resets_foreign_category() {
    let mut f = form("10");
    f.category = Category::Travel;
    f.set_kind(TransactionType::Income);
    assert_eq!(f.category, Category::Salary);

    // a category that already fits is kept
    f.category = Category::Gift;
    f.set_kind(TransactionType::Income);
    assert_eq!(f.category, Category::Gift);
}

#[test]
fn amount_must_be_a_positive_number() {
    assert_eq!(form("").validate(), Err(FormError::MissingAmount));
    assert_eq!(
        form("abc").validate(),
        Err(FormError::InvalidAmount("abc".into()))
    );
    assert_eq!(form("-5").validate(), Err(FormError::NonPositiveAmount));
    assert_eq!(form("0").validate(), Err(FormError::NonPositiveAmount));
}

#[test]
fn valid_form_becomes_payload() {
    let mut f = form(" 42.50 ");
    f.description = "  lunch ".into();
    let p = f.validate().unwrap();
    assert_eq!(p.amount, Decimal::from_str("42.5").unwrap());
    assert_eq!(p.kind, TransactionType::Expense);
    assert_eq!(p.category, Category::Food);
    assert_eq!(p.transaction_date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    assert_eq!(p.description, "lunch");
}

#[test]
fn bad_date_is_rejected() {
    let mut f = form("1");
    f.transaction_date = "03/05/2024".into();
    assert_eq!(
        f.validate(),
        Err(FormError::InvalidDate("03/05/2024".into()))
    );
}

#[test]
fn category_must_match_type() {
    let mut f = form("1");
    f.category = Category::Salary;
    assert!(matches!(
        f.validate(),
        Err(FormError::CategoryMismatch { .. })
    ));
}

#[test]
fn category_lists_partition_by_type() {
    assert_eq!(Category::for_type(TransactionType::Income).len(), 5);
    assert_eq!(Category::for_type(TransactionType::Expense).len(), 10);
    for c in Category::for_type(TransactionType::Income) {
        assert_eq!(c.kind(), TransactionType::Income);
    }
    assert_eq!("other-income".parse::<Category>(), Ok(Category::OtherIncome));
    assert!("rent".parse::<Category>().is_err());
}

#[test]
fn register_form_checks_fields() {
    let ok = RegisterForm {
        username: "ayse".into(),
        email: "ayse@example.com".into(),
        password: "secret1".into(),
    };
    assert_eq!(ok.validate(), Ok(()));

    let mut f = ok.clone();
    f.username = "  ".into();
    assert_eq!(f.validate(), Err(FormError::MissingUsername));

    let mut f = ok.clone();
    f.email = "not-an-email".into();
    assert_eq!(
        f.validate(),
        Err(FormError::InvalidEmail("not-an-email".into()))
    );

    let mut f = ok;
    f.password = "12345".into();
    assert_eq!(f.validate(), Err(FormError::PasswordTooShort(6)));
}
