//! Outcomes flowing through a small service layer, the way an application
//! would use them.

use std::collections::HashMap;
use std::panic;

use outcome::{attempt, failure, outcome_try, success, Outcome, UnwrapError};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(Outcome<u32, String>: Send, Sync, Clone, std::fmt::Debug);
assert_impl_all!(Outcome<u32, &'static str>: Copy);
assert_impl_all!(UnwrapError: Send, std::error::Error);
assert_impl_all!(outcome::Panicked: Send, std::error::Error);
assert_not_impl_any!(Outcome<std::rc::Rc<u32>, String>: Send, Sync);

#[derive(Debug, Clone, PartialEq)]
enum AccountError {
    Missing(String),
    Insufficient { balance: u64, requested: u64 },
}

struct Bank {
    accounts: HashMap<String, u64>,
}

impl Bank {
    fn new() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(String::from("alice"), 100);
        accounts.insert(String::from("bob"), 5);
        Self { accounts }
    }

    fn balance(&self, name: &str) -> Outcome<u64, AccountError> {
        match self.accounts.get(name) {
            Some(balance) => success(*balance),
            None => failure(AccountError::Missing(name.to_owned())),
        }
    }

    fn withdraw(&mut self, name: &str, amount: u64) -> Outcome<u64, AccountError> {
        let balance = outcome_try!(self.balance(name));

        if balance < amount {
            return failure(AccountError::Insufficient {
                balance,
                requested: amount,
            });
        }

        let remaining = balance - amount;
        self.accounts.insert(name.to_owned(), remaining);
        success(remaining)
    }
}

#[test]
fn domain_failures_are_returned() {
    let mut bank = Bank::new();

    assert_eq!(bank.withdraw("alice", 30), success(70));
    assert_eq!(
        bank.withdraw("bob", 30),
        failure(AccountError::Insufficient {
            balance: 5,
            requested: 30
        })
    );
    assert_eq!(
        bank.withdraw("carol", 1),
        failure(AccountError::Missing(String::from("carol")))
    );
}

#[test]
fn failures_are_recovered_and_reported() {
    let mut bank = Bank::new();

    let report = bank
        .withdraw("carol", 10)
        .or_else(|error| match error {
            AccountError::Missing(..) => success(0),
            other => failure(other),
        })
        .map(|remaining| format!("remaining {remaining}"))
        .fold(|s| s, |e| format!("error: {e:?}"));

    assert_eq!(report, "remaining 0");

    let report = bank
        .withdraw("bob", 10)
        .map(|remaining| format!("remaining {remaining}"))
        .unwrap_or_else(|e| format!("error: {e:?}"));

    assert_eq!(report, "error: Insufficient { balance: 5, requested: 10 }");
}

#[test]
fn misuse_propagates_as_a_distinct_panic() {
    let bank = Bank::new();
    let outcome = bank.balance("nobody");

    let payload = panic::catch_unwind(move || outcome.unwrap_success()).unwrap_err();
    let error = payload
        .downcast_ref::<UnwrapError>()
        .expect("misuse is signalled with an unwrap error");

    assert_eq!(
        error.payload_ref::<AccountError>(),
        Some(&AccountError::Missing(String::from("nobody")))
    );
    assert!(error.message().starts_with("Called `unwrap_success` on a `Failure` value"));
}

#[test]
fn escape_hatch_wraps_panicking_code() {
    fn legacy_parse(input: &str) -> u32 {
        input.parse().expect("legacy code panics on bad input")
    }

    assert_eq!(attempt(|| legacy_parse("12")).success(), Some(12));

    let failed = attempt(|| legacy_parse("twelve"));
    let panicked = failed.failure().expect("parsing should have panicked");
    let message = panicked.message().unwrap_or_default();
    assert!(message.starts_with("legacy code panics on bad input"));
}

#[test]
fn outcomes_convert_to_and_from_results() {
    fn std_api(value: u32) -> Result<u32, String> {
        if value == 0 {
            Err(String::from("zero"))
        } else {
            Ok(100 / value)
        }
    }

    let outcome: Outcome<u32, String> = std_api(4).into();
    assert_eq!(outcome, success(25));

    let result: Result<u32, String> = Outcome::from(std_api(0)).map(|v| v + 1).into();
    assert_eq!(result, Err(String::from("zero")));

    let total: Outcome<u32, String> = [1, 2, 4]
        .into_iter()
        .map(|v| Outcome::from(std_api(v)))
        .sum_outcomes();

    assert_eq!(total, success(175));
}

trait SumOutcomes<E> {
    fn sum_outcomes(self) -> Outcome<u32, E>;
}

impl<I, E> SumOutcomes<E> for I
where
    I: Iterator<Item = Outcome<u32, E>>,
{
    fn sum_outcomes(self) -> Outcome<u32, E> {
        self.collect::<Outcome<Vec<u32>, E>>()
            .map(|values| values.into_iter().sum())
    }
}
