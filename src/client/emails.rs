use std::sync::Arc;

use crate::client::{Shared, UnsendError, decode_error};
use crate::domain::{EmailData, EmailId, ScheduledAt, SendEmail};
use crate::transport::{
    decode_email_data_json, decode_email_id_json, encode_schedule_patch_json,
    encode_send_email_json, routes,
};

#[derive(Clone)]
/// Operations on the email resource: send, fetch, and schedule management.
pub struct EmailsClient {
    shared: Arc<Shared>,
}

impl EmailsClient {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Send (or schedule) an email.
    ///
    /// When the request carries no `scheduled_at`, the send is scheduled for
    /// the minimum future window (now + 5 seconds); Unsend rejects schedules
    /// that are not strictly in the future.
    pub async fn send(&self, request: SendEmail) -> Result<EmailId, UnsendError> {
        let body = encode_send_email_json(&request).map_err(UnsendError::Encode)?;
        let response = self
            .shared
            .dispatch(routes::send_email(), Some(body))
            .await?;
        self.shared.check_status(&response)?;
        decode_email_id_json(&response.body).map_err(|err| decode_error(err, &response.body))
    }

    /// Fetch an email's server-side state, including its delivery events.
    pub async fn get(&self, id: &EmailId) -> Result<EmailData, UnsendError> {
        let response = self.shared.dispatch(routes::email(id), None).await?;
        self.shared.check_status(&response)?;
        decode_email_data_json(&response.body).map_err(|err| decode_error(err, &response.body))
    }

    /// Move a scheduled send to a new instant. The patch body carries only
    /// `scheduledAt`.
    pub async fn update_schedule(
        &self,
        id: &EmailId,
        scheduled_at: ScheduledAt,
    ) -> Result<EmailId, UnsendError> {
        let body = encode_schedule_patch_json(&scheduled_at).map_err(UnsendError::Encode)?;
        let response = self
            .shared
            .dispatch(routes::update_schedule(id), Some(body))
            .await?;
        self.shared.check_status(&response)?;
        decode_email_id_json(&response.body).map_err(|err| decode_error(err, &response.body))
    }

    /// Cancel a scheduled send. No request body.
    pub async fn cancel_schedule(&self, id: &EmailId) -> Result<EmailId, UnsendError> {
        let response = self
            .shared
            .dispatch(routes::cancel_schedule(id), None)
            .await?;
        self.shared.check_status(&response)?;
        decode_email_id_json(&response.body).map_err(|err| decode_error(err, &response.body))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use reqwest::Method;
    use serde_json::Value;

    use crate::client::test_support::{FakeTransport, make_client};
    use crate::client::ResponseMode;
    use crate::domain::SendEmailOptions;

    use super::*;

    fn send_request() -> SendEmail {
        SendEmail::to_one(
            "to@example.com",
            "from@example.com",
            "hello",
            SendEmailOptions::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn send_posts_the_full_request_shape() {
        let transport = FakeTransport::new(200, r#"{"emailId": "mail_1"}"#);
        let client = make_client(transport.clone(), ResponseMode::Strict);

        let id = client.emails().send(send_request()).await.unwrap();
        assert_eq!(id.as_str(), "mail_1");

        let (method, path, body) = transport.last_request();
        assert_eq!(method, Some(Method::POST));
        assert_eq!(path.as_deref(), Some("/api/v1/emails"));

        let value: Value = serde_json::from_str(&body.unwrap()).unwrap();
        assert_eq!(value["to"], serde_json::json!(["to@example.com"]));
        assert_eq!(value["from"], "from@example.com");
        assert!(value["scheduledAt"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn send_in_strict_mode_maps_non_success_status() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(transport, ResponseMode::Strict);

        let err = client.emails().send(send_request()).await.unwrap_err();
        assert!(matches!(
            err,
            UnsendError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn send_in_lenient_mode_decodes_regardless_of_status() {
        let transport = FakeTransport::new(422, "{}");
        let client = make_client(transport, ResponseMode::Lenient);

        let id = client.emails().send(send_request()).await.unwrap();
        assert_eq!(id.as_str(), "");
    }

    #[tokio::test]
    async fn send_surfaces_transport_failures_in_both_modes() {
        for mode in [ResponseMode::Strict, ResponseMode::Lenient] {
            let transport = FakeTransport::failing("connection refused");
            let client = make_client(transport, mode);

            let err = client.emails().send(send_request()).await.unwrap_err();
            assert!(
                matches!(err, UnsendError::Transport(_)),
                "mode {mode:?}: unexpected error: {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn send_maps_malformed_json_to_decode_error_with_raw_body() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport, ResponseMode::Lenient);

        let err = client.emails().send(send_request()).await.unwrap_err();
        match err {
            UnsendError::Decode { body, .. } => assert_eq!(body, "{ not json }"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_fetches_and_decodes_email_data() {
        let json = r#"
        {
          "id": "mail_1",
          "teamId": 7,
          "to": ["to@example.com"],
          "from": "from@example.com",
          "subject": "hello",
          "emailEvents": [{"emailId": "mail_1", "status": "DELIVERED"}]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone(), ResponseMode::Strict);

        let id = EmailId::new("mail_1").unwrap();
        let data = client.emails().get(&id).await.unwrap();
        assert_eq!(data.id, "mail_1");
        assert_eq!(data.email_events[0].status, "DELIVERED");

        let (method, path, body) = transport.last_request();
        assert_eq!(method, Some(Method::GET));
        assert_eq!(path.as_deref(), Some("/api/v1/emails/mail_1"));
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn update_schedule_patches_with_a_single_key() {
        let transport = FakeTransport::new(200, r#"{"emailId": "mail_1"}"#);
        let client = make_client(transport.clone(), ResponseMode::Strict);

        let id = EmailId::new("mail_1").unwrap();
        let at = ScheduledAt::new(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        client.emails().update_schedule(&id, at).await.unwrap();

        let (method, path, body) = transport.last_request();
        assert_eq!(method, Some(Method::PATCH));
        assert_eq!(path.as_deref(), Some("/api/v1/emails/mail_1"));

        let value: Value = serde_json::from_str(&body.unwrap()).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["scheduledAt"], "2026-01-02T03:04:05Z");
    }

    #[tokio::test]
    async fn cancel_schedule_posts_without_a_body() {
        let transport = FakeTransport::new(200, r#"{"emailId": "mail_1"}"#);
        let client = make_client(transport.clone(), ResponseMode::Strict);

        let id = EmailId::new("mail_1").unwrap();
        let returned = client.emails().cancel_schedule(&id).await.unwrap();
        assert_eq!(returned.as_str(), "mail_1");

        let (method, path, body) = transport.last_request();
        assert_eq!(method, Some(Method::POST));
        assert_eq!(path.as_deref(), Some("/api/v1/emails/mail_1/cancel"));
        assert!(body.is_none());
    }
}
