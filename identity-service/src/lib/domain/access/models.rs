use serde::Deserialize;
use serde::Serialize;

/// Success payload of a password login, in the identity service's v2 schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDocument {
    pub access: Access,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    pub service_catalog: Vec<ServiceEntry>,
    pub token: AccessToken,
    pub user: AccessUser,
}

/// One service of the catalog with its regional endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub endpoints: Vec<Endpoint>,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "adminURL")]
    pub admin_url: String,
    #[serde(rename = "internalURL")]
    pub internal_url: String,
    #[serde(rename = "publicURL")]
    pub public_url: String,
    pub region: String,
}

/// Token section; `id` carries the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub expires: String,
    pub id: String,
    pub tenant: Tenant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessUser {
    pub id: String,
    pub name: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub tenant_id: String,
}
