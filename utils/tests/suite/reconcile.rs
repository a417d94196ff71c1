//! Resource-logic flows: expand desired state, compare with observed state, report.

use provkit_config::ProvkitConfig;
use provkit_types::{DecodeError, OptionalCollection, StringDecoder};
use provkit_utils::{
    QuotedList, contains_all, expand, expand_with_policy, format_quoted_list, missing_elements,
};
use serde_json::json;

/// What a resource update would do with a desired role set against the roles the API reports.
fn plan_roles(desired: &OptionalCollection, observed: &[&str]) -> Result<(), String> {
    let Some(roles) = expand(desired, StringDecoder) else {
        return Ok(());
    };
    if contains_all(&roles, observed) {
        return Ok(());
    }
    let missing = missing_elements(&roles, observed);
    Err(format!("roles not assigned: {}", QuotedList::new(&missing)))
}

#[test]
fn regions_expand_and_format() {
    let regions = OptionalCollection::present(["us-east-1", "eu-west-1"]);
    let expanded = expand(&regions, StringDecoder).expect("present regions");
    assert_eq!(expanded, ["us-east-1", "eu-west-1"]);
    assert_eq!(format_quoted_list(&expanded), "`us-east-1`, `eu-west-1`");
}

#[test]
fn missing_role_is_reported() {
    let desired = OptionalCollection::present(["admin", "viewer"]);
    assert_eq!(
        plan_roles(&desired, &["viewer"]),
        Err("roles not assigned: `admin`".to_string())
    );
}

#[test]
fn satisfied_roles_need_no_change() {
    let desired = OptionalCollection::present(["viewer"]);
    assert_eq!(plan_roles(&desired, &["viewer", "billing"]), Ok(()));
}

#[test]
fn unresolved_roles_send_nothing() {
    assert_eq!(plan_roles(&OptionalCollection::Unknown, &[]), Ok(()));
    assert_eq!(plan_roles(&OptionalCollection::Absent, &[]), Ok(()));
}

#[test]
fn empty_desired_set_is_satisfied_by_anything() {
    let desired = OptionalCollection::present(Vec::<String>::new());
    assert_eq!(plan_roles(&desired, &[]), Ok(()));
}

#[test]
fn configured_policy_drives_expansion() {
    let malformed = OptionalCollection::present([json!("admin"), json!(3)]);

    let lenient = ProvkitConfig::parse("").expect("default config");
    assert_eq!(
        expand_with_policy(&malformed, StringDecoder, lenient.decode_policy()),
        Ok(None)
    );

    let strict = ProvkitConfig::parse("[expand]\non_decode_failure = \"reject\"\n")
        .expect("strict config");
    let err = expand_with_policy(&malformed, StringDecoder, strict.decode_policy()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TypeMismatch {
            index: 1,
            expected: "string",
            found: "number",
        }
    );
}

#[test]
fn collection_from_plan_json() {
    let desired: OptionalCollection = serde_json::from_value(json!({
        "state": "present",
        "elements": ["read:user", "write:repo"],
    }))
    .expect("valid plan value");
    let granted = ["read:user", "write:repo", "admin:org"];
    let scopes = expand(&desired, StringDecoder).expect("string scopes");
    assert!(contains_all(&scopes, &granted));
}
