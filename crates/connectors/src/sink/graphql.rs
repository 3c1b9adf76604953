use crate::sink::{
    SinkError, SinkPublisher,
    sign::{SigningCredentials, sign_post},
};
use async_trait::async_trait;
use model::event::TelemetryEvent;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Mutation mirrored from the downstream schema.
const CREATE_RECORD_MUTATION: &str = "\
mutation CreateConditionMonitoringDataRecord($input: CreateConditionMonitoringDataRecordInput!) {
  createConditionMonitoringDataRecord(input: $input) {
    __typename
    id
    unitNumber
    dateTime
    data
    createdAt
    updatedAt
  }
}";

pub struct GraphQlSinkParams {
    pub endpoint: String,
    pub credentials: SigningCredentials,
    pub request_timeout: Duration,
}

/// Publishes events as single signed POSTs against the downstream GraphQL
/// endpoint. The client is built once and reused across ticks within a
/// process.
#[derive(Debug)]
pub struct GraphQlSink {
    endpoint: reqwest::Url,
    credentials: SigningCredentials,
    client: reqwest::Client,
}

impl GraphQlSink {
    pub fn new(params: GraphQlSinkParams) -> Result<Self, SinkError> {
        let endpoint = reqwest::Url::parse(&params.endpoint)
            .map_err(|err| SinkError::Network(format!("invalid endpoint: {err}")))?;
        let client = reqwest::Client::builder()
            .timeout(params.request_timeout)
            .build()
            .map_err(|err| SinkError::Network(err.to_string()))?;
        Ok(GraphQlSink {
            endpoint,
            credentials: params.credentials,
            client,
        })
    }

    /// Host value as it will appear on the wire, including a non-default
    /// port; the signed host must match what the client sends.
    fn host(&self) -> Result<String, SinkError> {
        let host = self
            .endpoint
            .host_str()
            .ok_or_else(|| SinkError::Network("endpoint has no host".to_string()))?;
        Ok(match self.endpoint.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }
}

#[async_trait]
impl SinkPublisher for GraphQlSink {
    async fn publish(&self, event: &TelemetryEvent) -> Result<(), SinkError> {
        let body = json!({
            "query": CREATE_RECORD_MUTATION,
            "variables": { "input": event },
        })
        .to_string();

        let signed = sign_post(
            &self.credentials,
            &self.host()?,
            self.endpoint.path(),
            &body,
            chrono::Utc::now(),
        );

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header("content-type", "application/json")
            .header("x-amz-date", &signed.amz_date)
            .header("authorization", &signed.authorization)
            .body(body);
        if let Some(token) = &signed.security_token {
            request = request.header("x-amz-security-token", token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| SinkError::Network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SinkError::Auth(format!("sink returned {status}")));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected(format!("sink returned {status}: {detail}")));
        }

        // A 2xx envelope can still carry application-level GraphQL errors.
        let envelope: serde_json::Value = response
            .json()
            .await
            .map_err(|err| SinkError::Rejected(format!("unreadable sink response: {err}")))?;
        if let Some(errors) = envelope.get("errors").and_then(|errors| errors.as_array())
            && !errors.is_empty()
        {
            return Err(SinkError::Rejected(format!("sink returned errors: {errors:?}")));
        }

        debug!(event_id = %event.id, "event accepted by sink");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink(endpoint: &str) -> Result<GraphQlSink, SinkError> {
        GraphQlSink::new(GraphQlSinkParams {
            endpoint: endpoint.to_string(),
            credentials: SigningCredentials {
                access_key: "AKIDEXAMPLE".to_string(),
                secret_key: "secret".to_string(),
                session_token: None,
                region: "us-east-1".to_string(),
                service: "appsync".to_string(),
            },
            request_timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let err = sink("not a url").unwrap_err();
        assert!(matches!(err, SinkError::Network(_)));
    }

    #[test]
    fn host_includes_non_default_port() {
        let sink = sink("http://localhost:8080/graphql").unwrap();
        assert_eq!(sink.host().unwrap(), "localhost:8080");

        let sink = sink_with_default_port();
        assert_eq!(sink.host().unwrap(), "api.example.com");
    }

    fn sink_with_default_port() -> GraphQlSink {
        sink("https://api.example.com/graphql").unwrap()
    }

    #[test]
    fn mutation_targets_the_record_creation_field() {
        assert!(CREATE_RECORD_MUTATION.contains("createConditionMonitoringDataRecord"));
        assert!(CREATE_RECORD_MUTATION.contains("$input"));
    }
}
