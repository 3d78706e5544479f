//! Validation chains: ordered checks over a request body, stopping at the first failure.

use crate::error::AppError;
use serde_json::{Map, Number, Value};

/// A request body together with the id from the route, when there is one.
pub struct Submission<'a> {
    pub route_id: Option<&'a str>,
    pub body: &'a Map<String, Value>,
}

impl<'a> Submission<'a> {
    pub fn new(body: &'a Map<String, Value>) -> Self {
        Self { route_id: None, body }
    }

    pub fn for_route(route_id: &'a str, body: &'a Map<String, Value>) -> Self {
        Self {
            route_id: Some(route_id),
            body,
        }
    }
}

pub type Check = fn(&Submission<'_>) -> Result<(), AppError>;

/// Run `chain` in order; the first failing check decides the error.
pub fn run_chain(submission: &Submission<'_>, chain: &[Check]) -> Result<(), AppError> {
    chain.iter().try_for_each(|check| check(submission))
}

/// Loose truthiness: null, false, 0 and "" are falsy; everything else, empty arrays included, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The non-empty string at `key`, or `message` as a bad request.
pub fn required_str<'a>(
    body: &'a Map<String, Value>,
    key: &str,
    message: &str,
) -> Result<&'a str, AppError> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::bad_request(message))
}

/// A JSON number strictly greater than zero, returned as submitted. Strings, zero and
/// negatives are rejected; fractions are accepted.
pub fn positive_number(value: Option<&Value>) -> Option<Number> {
    match value {
        Some(Value::Number(n)) if n.as_f64().map_or(false, |f| f > 0.0) => Some(n.clone()),
        _ => None,
    }
}

/// Fails when the body carries a truthy `id` that differs from the route id.
/// `label` names the record kind in the message ("Dish", "Order").
pub fn check_id_matches(submission: &Submission<'_>, label: &str) -> Result<(), AppError> {
    let Some(route_id) = submission.route_id else {
        return Ok(());
    };
    match submission.body.get("id") {
        Some(id) if is_truthy(id) && id.as_str() != Some(route_id) => {
            let shown = id.as_str().map_or_else(|| id.to_string(), str::to_owned);
            Err(AppError::BadRequest(format!(
                "{label} id does not match route id. {label}: {shown}, Route: {route_id}"
            )))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn truthiness_of_json_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn positive_number_accepts_any_positive_json_number() {
        assert_eq!(positive_number(Some(&json!(3))), Some(Number::from(3)));
        assert_eq!(positive_number(Some(&json!(3.0))), Number::from_f64(3.0));
        assert_eq!(positive_number(Some(&json!(1.5))), Number::from_f64(1.5));
        assert_eq!(positive_number(Some(&json!(0))), None);
        assert_eq!(positive_number(Some(&json!(0.0))), None);
        assert_eq!(positive_number(Some(&json!(-2))), None);
        assert_eq!(positive_number(Some(&json!(-0.5))), None);
        assert_eq!(positive_number(Some(&json!("4"))), None);
        assert_eq!(positive_number(Some(&json!(null))), None);
        assert_eq!(positive_number(None), None);
    }

    #[test]
    fn required_str_needs_a_non_empty_string() {
        let b = body(json!({ "name": "Soup", "empty": "", "num": 7 }));
        assert_eq!(required_str(&b, "name", "m").unwrap(), "Soup");
        for key in ["empty", "num", "missing"] {
            let err = required_str(&b, key, "need it").unwrap_err();
            assert_eq!(err.to_string(), "need it");
        }
    }

    #[test]
    fn id_match_ignores_absent_or_falsy_ids() {
        for value in [json!({}), json!({ "id": "" }), json!({ "id": null }), json!({ "id": "7" })] {
            let b = body(value);
            assert!(check_id_matches(&Submission::for_route("7", &b), "Dish").is_ok());
        }
    }

    #[test]
    fn id_mismatch_names_both_ids() {
        let b = body(json!({ "id": "8" }));
        let err = check_id_matches(&Submission::for_route("7", &b), "Order").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order id does not match route id. Order: 8, Route: 7"
        );

        let b = body(json!({ "id": 7 }));
        assert!(check_id_matches(&Submission::for_route("7", &b), "Dish").is_err());
    }

    #[test]
    fn chain_stops_at_first_failure() {
        fn pass(_: &Submission<'_>) -> Result<(), AppError> {
            Ok(())
        }
        fn first(_: &Submission<'_>) -> Result<(), AppError> {
            Err(AppError::bad_request("first"))
        }
        fn second(_: &Submission<'_>) -> Result<(), AppError> {
            Err(AppError::bad_request("second"))
        }
        let b = Map::new();
        let chain: &[Check] = &[pass, first, second];
        let err = run_chain(&Submission::new(&b), chain).unwrap_err();
        assert_eq!(err.to_string(), "first");
        assert!(run_chain(&Submission::new(&b), &[pass]).is_ok());
    }
}
