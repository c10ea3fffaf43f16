//! Projection of an RDAP object down to ownership fields.

use crate::rdap::RdapObject;
use crate::types::Ownership;

/// Extract `{name, organization}` from an RDAP response.
///
/// The organization is taken from the first remark titled `"description"`
/// with a non-empty description list, using its first line. Regional
/// registries conventionally put the holder's descriptive text there; other
/// remarks and later lines are not consulted.
pub fn extract(object: &RdapObject) -> Ownership {
    let name = object.name.clone().unwrap_or_default();

    let organization = object
        .remarks
        .iter()
        .find(|remark| remark.title.as_deref() == Some("description") && !remark.description.is_empty())
        .map(|remark| remark.description[0].clone())
        .unwrap_or_default();

    Ownership { name, organization }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(body: &str) -> RdapObject {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_name_and_organization() {
        let ownership = extract(&object(
            r#"{"name": "GOOGLE", "remarks": [{"title": "description", "description": ["Google LLC", "Mountain View"]}]}"#,
        ));
        assert_eq!(ownership.name, "GOOGLE");
        assert_eq!(ownership.organization, "Google LLC");
    }

    #[test]
    fn test_missing_name_is_empty() {
        let ownership = extract(&object(r#"{"remarks": []}"#));
        assert_eq!(ownership.name, "");
        assert_eq!(ownership.organization, "");
    }

    #[test]
    fn test_skips_other_remark_titles() {
        let ownership = extract(&object(
            r#"{"name": "N", "remarks": [
                {"title": "registration", "description": ["nope"]},
                {"title": "description", "description": ["Example Corp"]}
            ]}"#,
        ));
        assert_eq!(ownership.organization, "Example Corp");
    }

    #[test]
    fn test_skips_empty_description_lists() {
        let ownership = extract(&object(
            r#"{"remarks": [
                {"title": "description", "description": []},
                {"title": "description", "description": ["Second Remark Org"]}
            ]}"#,
        ));
        assert_eq!(ownership.organization, "Second Remark Org");
    }

    #[test]
    fn test_untitled_remarks_ignored() {
        let ownership = extract(&object(r#"{"remarks": [{"description": ["text"]}]}"#));
        assert_eq!(ownership.organization, "");
    }
}
