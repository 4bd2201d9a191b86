use serde::{Deserialize, Serialize};

use crate::domain::{
    EmailData, EmailEvent, EmailId, EventData, ScheduledAt, SendEmail,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailJson<'a> {
    to: &'a [String],
    from: &'a str,
    subject: &'a str,
    template_id: &'a str,
    reply_to: &'a str,
    cc: &'a [String],
    bcc: &'a [String],
    text: &'a str,
    html: &'a str,
    attachments: Vec<AttachmentJson<'a>>,
    scheduled_at: String,
}

#[derive(Debug, Serialize)]
struct AttachmentJson<'a> {
    filename: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchedulePatchJson {
    scheduled_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EmailIdJson {
    email_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EmailDataJson {
    id: String,
    team_id: i64,
    to: Vec<String>,
    from: String,
    subject: String,
    html: String,
    text: String,
    created_at: String,
    updated_at: String,
    email_events: Vec<EmailEventJson>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EmailEventJson {
    email_id: String,
    status: String,
    created_at: String,
    data: Option<EventDataJson>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EventDataJson {
    timestamp: Option<String>,
    recipients: Option<Vec<String>>,
    remote_mta_ip: Option<String>,
    #[serde(rename = "reportingMTA")]
    reporting_mta: Option<String>,
    smtp_response: Option<String>,
    processing_time_millis: Option<i64>,
}

/// Encode a send-email request body.
///
/// Unset optional scalars go out as `""` and unset lists as `[]`; the wire
/// shape always carries the full field list. A missing `scheduledAt` is
/// filled with the default future-scheduling window at this point.
pub fn encode_send_email_json(request: &SendEmail) -> Result<String, serde_json::Error> {
    let options = request.options();
    let scheduled_at = options
        .scheduled_at
        .unwrap_or_else(ScheduledAt::from_now_plus_default)
        .to_wire();

    let body = SendEmailJson {
        to: request.to().as_slice(),
        from: request.from(),
        subject: request.subject(),
        template_id: options.template_id.as_deref().unwrap_or(""),
        reply_to: options.reply_to.as_deref().unwrap_or(""),
        cc: options.cc.as_slice(),
        bcc: options.bcc.as_slice(),
        text: options.text.as_deref().unwrap_or(""),
        html: options.html.as_deref().unwrap_or(""),
        attachments: options
            .attachments
            .iter()
            .map(|attachment| AttachmentJson {
                filename: attachment.filename(),
                content: attachment.content(),
            })
            .collect(),
        scheduled_at,
    };

    serde_json::to_string(&body)
}

/// Encode the minimal schedule patch: exactly one key, `scheduledAt`.
pub fn encode_schedule_patch_json(scheduled_at: &ScheduledAt) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SchedulePatchJson {
        scheduled_at: scheduled_at.to_wire(),
    })
}

pub fn decode_email_id_json(json: &str) -> Result<EmailId, serde_json::Error> {
    let parsed: EmailIdJson = serde_json::from_str(json)?;
    Ok(EmailId::from_wire(parsed.email_id))
}

pub fn decode_email_data_json(json: &str) -> Result<EmailData, serde_json::Error> {
    let parsed: EmailDataJson = serde_json::from_str(json)?;
    Ok(EmailData {
        id: parsed.id,
        team_id: parsed.team_id,
        to: parsed.to,
        from: parsed.from,
        subject: parsed.subject,
        html: parsed.html,
        text: parsed.text,
        created_at: parsed.created_at,
        updated_at: parsed.updated_at,
        email_events: parsed.email_events.into_iter().map(email_event).collect(),
    })
}

fn email_event(event: EmailEventJson) -> EmailEvent {
    EmailEvent {
        email_id: event.email_id,
        status: event.status,
        created_at: event.created_at,
        data: event.data.map(|data| EventData {
            timestamp: data.timestamp,
            recipients: data.recipients,
            remote_mta_ip: data.remote_mta_ip,
            reporting_mta: data.reporting_mta,
            smtp_response: data.smtp_response,
            processing_time_millis: data.processing_time_millis,
        }),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime, TimeZone, Utc};
    use serde_json::Value;

    use crate::domain::{
        Attachment, DEFAULT_SEND_DELAY_SECONDS, Recipients, SendEmail, SendEmailOptions,
    };

    use super::*;

    fn minimal_send() -> SendEmail {
        SendEmail::to_one(
            "to@example.com",
            "from@example.com",
            "hello",
            SendEmailOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn unset_scalars_encode_as_empty_strings() {
        let body = encode_send_email_json(&minimal_send()).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();

        for key in ["templateId", "replyTo", "text", "html"] {
            assert_eq!(value[key], Value::String(String::new()), "key {key}");
        }
    }

    #[test]
    fn unset_lists_encode_as_empty_arrays() {
        let body = encode_send_email_json(&minimal_send()).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();

        for key in ["cc", "bcc", "attachments"] {
            assert_eq!(value[key], Value::Array(Vec::new()), "key {key}");
        }
    }

    #[test]
    fn single_recipient_and_one_element_list_encode_identically() {
        let fixed = ScheduledAt::new(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        let options = || SendEmailOptions {
            scheduled_at: Some(fixed),
            ..Default::default()
        };

        let single =
            SendEmail::to_one("to@example.com", "from@example.com", "hello", options()).unwrap();
        let list = SendEmail::new(
            Recipients::many(vec!["to@example.com".to_owned()]).unwrap(),
            "from@example.com",
            "hello",
            options(),
        )
        .unwrap();

        assert_eq!(
            encode_send_email_json(&single).unwrap(),
            encode_send_email_json(&list).unwrap()
        );
    }

    #[test]
    fn default_scheduled_at_is_within_the_send_delay_window() {
        let before = Utc::now();
        let body = encode_send_email_json(&minimal_send()).unwrap();
        let after = Utc::now();

        let value: Value = serde_json::from_str(&body).unwrap();
        let raw = value["scheduledAt"].as_str().unwrap();
        let parsed = NaiveDateTime::parse_from_str(raw, ScheduledAt::WIRE_FORMAT)
            .unwrap()
            .and_utc();

        // Second precision truncates, so allow one second of slack downward.
        assert!(parsed >= before - Duration::seconds(1));
        assert!(parsed <= after + Duration::seconds(DEFAULT_SEND_DELAY_SECONDS));
    }

    #[test]
    fn explicit_fields_are_carried_verbatim() {
        let options = SendEmailOptions {
            template_id: Some("tpl_1".to_owned()),
            reply_to: Some("reply@example.com".to_owned()),
            cc: Recipients::one("cc@example.com").unwrap(),
            bcc: Recipients::many(vec![
                "bcc1@example.com".to_owned(),
                "bcc2@example.com".to_owned(),
            ])
            .unwrap(),
            text: Some("plain".to_owned()),
            html: Some("<b>rich</b>".to_owned()),
            attachments: vec![Attachment::new("hi.txt", "aGk=").unwrap()],
            scheduled_at: Some(ScheduledAt::new(
                Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            )),
        };
        let request = SendEmail::to_one("to@example.com", "from@example.com", "hello", options)
            .unwrap();

        let value: Value = serde_json::from_str(&encode_send_email_json(&request).unwrap()).unwrap();
        assert_eq!(value["to"], serde_json::json!(["to@example.com"]));
        assert_eq!(value["templateId"], "tpl_1");
        assert_eq!(
            value["bcc"],
            serde_json::json!(["bcc1@example.com", "bcc2@example.com"])
        );
        assert_eq!(
            value["attachments"],
            serde_json::json!([{"filename": "hi.txt", "content": "aGk="}])
        );
        assert_eq!(value["scheduledAt"], "2026-01-02T03:04:05Z");
    }

    #[test]
    fn schedule_patch_body_has_exactly_one_key() {
        let at = ScheduledAt::new(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        let body = encode_schedule_patch_json(&at).unwrap();

        let value: Value = serde_json::from_str(&body).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["scheduledAt"], "2026-01-02T03:04:05Z");
    }

    #[test]
    fn email_id_decodes_and_ignores_unknown_fields() {
        let id = decode_email_id_json(r#"{"emailId": "mail_1", "extra": 42}"#).unwrap();
        assert_eq!(id.as_str(), "mail_1");
    }

    #[test]
    fn email_id_missing_field_decodes_to_empty() {
        let id = decode_email_id_json("{}").unwrap();
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn email_data_decodes_partially_shaped_responses() {
        let json = r#"
        {
          "id": "mail_1",
          "teamId": 7,
          "to": ["to@example.com"],
          "from": "from@example.com",
          "subject": "hello",
          "emailEvents": [
            {
              "emailId": "mail_1",
              "status": "DELIVERED",
              "createdAt": "2026-01-02T03:04:05Z",
              "data": {
                "recipients": ["to@example.com"],
                "reportingMTA": "mta.example.com",
                "processingTimeMillis": 321
              }
            },
            {"status": "SENT"}
          ]
        }
        "#;

        let data = decode_email_data_json(json).unwrap();
        assert_eq!(data.id, "mail_1");
        assert_eq!(data.team_id, 7);
        assert_eq!(data.html, "");
        assert_eq!(data.email_events.len(), 2);

        let delivered = &data.email_events[0];
        assert_eq!(delivered.status, "DELIVERED");
        let event_data = delivered.data.as_ref().unwrap();
        assert_eq!(event_data.reporting_mta.as_deref(), Some("mta.example.com"));
        assert_eq!(event_data.processing_time_millis, Some(321));

        let sent = &data.email_events[1];
        assert_eq!(sent.status, "SENT");
        assert_eq!(sent.email_id, "");
        assert!(sent.data.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(decode_email_id_json("{ not json }").is_err());
        assert!(decode_email_data_json("[1, 2").is_err());
    }
}
