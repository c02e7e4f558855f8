use serde::Deserialize;

/// Endpoint summary as returned by `get_endpoints`.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointSummary {
    pub agent_id: Option<String>,
    pub hostname: Option<String>,
    pub agent_status: Option<String>,
    pub os_type: Option<String>,
    pub ip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetEndpointsResponse {
    #[serde(default)]
    pub reply: Vec<EndpointSummary>,
}

/// Full endpoint record from `get_endpoint`.
#[derive(Debug, Deserialize, Clone)]
pub struct Endpoint {
    pub endpoint_id: String,
    pub endpoint_name: String,
    pub os_type: Option<String>,
    #[serde(default)]
    pub ip: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetEndpointReply {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Deserialize)]
pub struct GetEndpointResponse {
    pub reply: GetEndpointReply,
}
