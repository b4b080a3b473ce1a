//! Field rules and the evaluator shared by every schema.

use serde_json::Value;
use url::Url;

use super::Rejection;

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Constraint applied to a present field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Non-empty string whose length in characters lies within the inclusive
    /// bounds.
    Text {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Value equal to one of the listed strings.
    OneOf(&'static [&'static str]),
    /// Absolute URI with a scheme and an authority.
    Uri,
}

impl Constraint {
    /// Non-empty string with no length bounds.
    pub const fn text() -> Self {
        Self::Text {
            min: None,
            max: None,
        }
    }

    /// Non-empty string with `min..=max` characters.
    pub const fn length(min: usize, max: usize) -> Self {
        Self::Text {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Non-empty string with at least `min` characters.
    pub const fn min_length(min: usize) -> Self {
        Self::Text {
            min: Some(min),
            max: None,
        }
    }
}

/// One named field and its constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    field: &'static str,
    presence: Presence,
    constraint: Constraint,
}

impl FieldRule {
    /// A field that must be present.
    pub const fn required(field: &'static str, constraint: Constraint) -> Self {
        Self {
            field,
            presence: Presence::Required,
            constraint,
        }
    }

    /// A field checked only when present.
    pub const fn optional(field: &'static str, constraint: Constraint) -> Self {
        Self {
            field,
            presence: Presence::Optional,
            constraint,
        }
    }

    /// Payload key this rule reads.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Whether the field must be present.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Constraint applied when the field is present.
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Check `value`, the field's entry in the payload if any.
    ///
    /// Order: presence, type, emptiness, then the constraint itself.
    pub(super) fn check(&self, value: Option<&Value>) -> Option<Rejection> {
        let Some(value) = value else {
            return match self.presence {
                Presence::Required => Some(self.reject("is required")),
                Presence::Optional => None,
            };
        };

        match self.constraint {
            Constraint::OneOf(allowed) => {
                let matches = value.as_str().is_some_and(|text| allowed.contains(&text));
                (!matches).then(|| {
                    self.reject(&format!("must be one of [{}]", allowed.join(", ")))
                })
            }
            Constraint::Text { min, max } => {
                let text = match self.non_empty_string(value) {
                    Ok(text) => text,
                    Err(rejection) => return Some(rejection),
                };
                check_length(text, min, max).map(|reason| self.reject(&reason))
            }
            Constraint::Uri => {
                let text = match self.non_empty_string(value) {
                    Ok(text) => text,
                    Err(rejection) => return Some(rejection),
                };
                (!is_absolute_uri(text)).then(|| self.reject("must be a valid uri"))
            }
        }
    }

    fn non_empty_string<'a>(&self, value: &'a Value) -> Result<&'a str, Rejection> {
        match value.as_str() {
            None => Err(self.reject("must be a string")),
            Some("") => Err(self.reject("is not allowed to be empty")),
            Some(text) => Ok(text),
        }
    }

    fn reject(&self, reason: &str) -> Rejection {
        Rejection::new(self.field, format!("\"{}\" {reason}", self.field))
    }
}

fn check_length(text: &str, min: Option<usize>, max: Option<usize>) -> Option<String> {
    let length = text.chars().count();
    if let Some(min) = min.filter(|min| length < *min) {
        return Some(format!("length must be at least {min} characters long"));
    }
    if let Some(max) = max.filter(|max| length > *max) {
        return Some(format!(
            "length must be less than or equal to {max} characters long"
        ));
    }
    None
}

fn is_absolute_uri(text: &str) -> bool {
    Url::parse(text).is_ok_and(|url| url.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const SUBJECT: FieldRule = FieldRule::required("subject", Constraint::length(5, 200));
    const AVATAR: FieldRule = FieldRule::optional("avatar", Constraint::Uri);

    #[rstest]
    #[case::missing(None, Some("\"subject\" is required"))]
    #[case::null(Some(json!(null)), Some("\"subject\" must be a string"))]
    #[case::number(Some(json!(42)), Some("\"subject\" must be a string"))]
    #[case::empty(Some(json!("")), Some("\"subject\" is not allowed to be empty"))]
    #[case::short(
        Some(json!("Help")),
        Some("\"subject\" length must be at least 5 characters long")
    )]
    #[case::lower_bound(Some(json!("Helps")), None)]
    fn text_rule_checks_in_order(#[case] value: Option<Value>, #[case] expected: Option<&str>) {
        let rejection = SUBJECT.check(value.as_ref());
        assert_eq!(rejection.as_ref().map(Rejection::message), expected);
    }

    #[rstest]
    fn length_counts_characters_not_bytes() {
        let rule = FieldRule::required("name", Constraint::length(2, 3));
        assert!(rule.check(Some(&json!("né"))).is_none());
        assert!(rule.check(Some(&json!("日本語"))).is_none());
        assert!(rule.check(Some(&json!("日本語です"))).is_some());
    }

    #[rstest]
    #[case::https("https://cdn.example.com/avatars/1.png", true)]
    #[case::bare_host("http://example.com", true)]
    #[case::no_scheme("not-a-url", false)]
    #[case::relative("/avatars/1.png", false)]
    #[case::no_authority("mailto:someone@example.com", false)]
    fn uri_rule_requires_scheme_and_authority(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(AVATAR.check(Some(&json!(raw))).is_none(), valid);
    }

    #[rstest]
    fn optional_rule_accepts_absence() {
        assert!(AVATAR.check(None).is_none());
    }

    #[rstest]
    fn one_of_rejects_non_strings_with_the_allowed_list() {
        let rule = FieldRule::required("category", Constraint::OneOf(&["a", "b"]));
        let rejection = rule.check(Some(&json!(7))).expect("number is not allowed");
        assert_eq!(rejection.message(), "\"category\" must be one of [a, b]");
        assert_eq!(rejection.field(), "category");
    }
}
