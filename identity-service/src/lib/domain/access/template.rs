use std::fs;
use std::path::Path;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::AccessDocument;
use crate::domain::credential::models::SessionToken;

/// Access document shipped with the service, taken from a real v2 response.
pub const EMBEDDED_TEMPLATE: &str = include_str!("../../../../fixtures/access.json");

/// Parsed access document used as the base of every success response.
///
/// Parsed once; each response gets its own clone with the token patched in.
#[derive(Debug, Clone)]
pub struct AccessTemplate {
    document: AccessDocument,
}

impl AccessTemplate {
    /// Parse the template shipped with the service.
    ///
    /// # Errors
    /// * `MalformedTemplate` - Embedded fixture does not match the schema
    pub fn embedded() -> Result<Self, AccessError> {
        Self::from_json(EMBEDDED_TEMPLATE)
    }

    /// Parse a template from raw JSON.
    ///
    /// # Arguments
    /// * `raw` - JSON text in the access document schema
    ///
    /// # Returns
    /// Parsed template
    ///
    /// # Errors
    /// * `MalformedTemplate` - Text is not valid JSON or does not match the schema
    pub fn from_json(raw: &str) -> Result<Self, AccessError> {
        serde_json::from_str(raw)
            .map(|document| Self { document })
            .map_err(|e| AccessError::MalformedTemplate(e.to_string()))
    }

    /// Load a template from a file on disk.
    ///
    /// # Arguments
    /// * `path` - JSON file in the access document schema
    ///
    /// # Returns
    /// Parsed template
    ///
    /// # Errors
    /// * `TemplateUnreadable` - File could not be read
    /// * `MalformedTemplate` - File content does not match the schema
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AccessError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| AccessError::TemplateUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&raw)
    }

    /// Build the success document for a session token.
    ///
    /// # Arguments
    /// * `token` - Session token to place in `access.token.id`
    ///
    /// # Returns
    /// Private copy of the template with the token substituted
    pub fn build_success(&self, token: &SessionToken) -> AccessDocument {
        let mut document = self.document.clone();
        document.access.token.id = token.as_str().to_string();
        document
    }

    pub fn document(&self) -> &AccessDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_embedded_template_parses() {
        let template = AccessTemplate::embedded().expect("Embedded template must parse");
        let access = &template.document().access;

        let names: Vec<&str> = access
            .service_catalog
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["nova", "glance", "keystone"]);
        assert_eq!(access.service_catalog[2].service_type, "identity");
        assert_eq!(access.token.tenant.name, "admin");
        assert_eq!(access.user.name, "annegentle");
        assert_eq!(access.user.roles[0].tenant_id, "1");
    }

    #[test]
    fn test_build_success_substitutes_token_only() {
        let template = AccessTemplate::embedded().unwrap();
        let token = SessionToken::new("feedfacefeedfacefeedfacefeedface");

        let document = template.build_success(&token);

        assert_eq!(document.access.token.id, token.as_str());
        assert_eq!(document.access.token.expires, "2012-02-15T19:32:21");
        assert_eq!(
            document.access.service_catalog,
            template.document().access.service_catalog
        );
        assert_eq!(document.access.user, template.document().access.user);
    }

    #[test]
    fn test_build_success_does_not_mutate_template() {
        let template = AccessTemplate::embedded().unwrap();

        let first = template.build_success(&SessionToken::new("aaaa"));
        let second = template.build_success(&SessionToken::new("bbbb"));

        assert_eq!(first.access.token.id, "aaaa");
        assert_eq!(second.access.token.id, "bbbb");
        assert_eq!(
            template.document().access.token.id,
            "5df9d45d-d198-4222-9b4c-7a280aa35666"
        );
    }

    #[test]
    fn test_document_round_trips() {
        let template = AccessTemplate::embedded().unwrap();
        let document = template.build_success(&SessionToken::new("cafe"));

        let encoded = serde_json::to_string(&document).unwrap();
        let decoded: AccessDocument = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, document);
    }

    #[test]
    fn test_wire_field_names() {
        let template = AccessTemplate::embedded().unwrap();
        let value = serde_json::to_value(template.document()).unwrap();

        let endpoint = &value["access"]["serviceCatalog"][0]["endpoints"][0];
        assert!(endpoint["adminURL"].is_string());
        assert!(endpoint["internalURL"].is_string());
        assert!(endpoint["publicURL"].is_string());
        assert_eq!(value["access"]["serviceCatalog"][0]["type"], "compute");
        assert_eq!(value["access"]["user"]["roles"][0]["tenantId"], "1");
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = AccessTemplate::from_json(r#"{"access": {"token": {}}}"#);
        assert!(matches!(result, Err(AccessError::MalformedTemplate(_))));

        let result = AccessTemplate::from_json("not json");
        assert!(matches!(result, Err(AccessError::MalformedTemplate(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "identity-service-template-{}.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(EMBEDDED_TEMPLATE.as_bytes()).unwrap();

        let template = AccessTemplate::from_file(&path).expect("Template file must parse");
        assert_eq!(template.document().access.service_catalog.len(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_missing_file() {
        let result = AccessTemplate::from_file("/nonexistent/access.json");
        assert!(matches!(
            result,
            Err(AccessError::TemplateUnreadable { .. })
        ));
    }
}
