//! Deserializers for Slack's `ok` field. Success and error responses are
//! otherwise told apart only by their fields, so each side insists on its own
//! value of `ok`.

use serde::de::{Deserialize, Deserializer, Error};

pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(true, deserializer)
}

pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(false, deserializer)
}

fn exactly<'a, D>(expected: bool, deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b == expected {
            Ok(b)
        } else {
            Err(Error::custom(format!("invalid bool: {}", b)))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, serde::Deserialize)]
    struct Success {
        #[serde(deserialize_with = "only_true")]
        ok: bool,
    }

    #[derive(Debug, PartialEq, Eq, serde::Deserialize)]
    struct Failure {
        #[serde(deserialize_with = "only_false")]
        ok: bool,
        error: String,
    }

    #[test]
    fn test_only_true() {
        assert_eq!(
            serde_json::from_str::<Success>(r#"{"ok": true, "messages": []}"#).unwrap(),
            Success { ok: true },
        );

        let e = serde_json::from_str::<Success>(r#"{"ok": false, "error": "invalid_auth"}"#);
        assert!(e.unwrap_err().to_string().starts_with("invalid bool: false"));
    }

    #[test]
    fn test_only_false() {
        assert_eq!(
            serde_json::from_str::<Failure>(r#"{"ok": false, "error": "invalid_auth"}"#).unwrap(),
            Failure {
                ok: false,
                error: "invalid_auth".into()
            },
        );

        assert!(serde_json::from_str::<Failure>(r#"{"ok": true, "error": "x"}"#).is_err());
    }
}
