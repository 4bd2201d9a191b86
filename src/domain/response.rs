#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Delivery event data attached to an [`EmailEvent`].
pub struct EventData {
    pub timestamp: Option<String>,
    pub recipients: Option<Vec<String>>,
    pub remote_mta_ip: Option<String>,
    pub reporting_mta: Option<String>,
    pub smtp_response: Option<String>,
    pub processing_time_millis: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A single status transition in an email's delivery history.
pub struct EmailEvent {
    pub email_id: String,
    pub status: String,
    pub created_at: String,
    pub data: Option<EventData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Full server-side state of a sent email.
///
/// Fields absent from the response decode to their zero values; the server
/// is free to omit pieces of this shape.
pub struct EmailData {
    pub id: String,
    pub team_id: i64,
    pub to: Vec<String>,
    pub from: String,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub created_at: String,
    pub updated_at: String,
    pub email_events: Vec<EmailEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A contact in a contact book.
///
/// Doubles as the serialized shape of contact mutations: unset scalars go on
/// the wire as empty strings.
pub struct Contact {
    pub contact_book_id: String,
    pub contact_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub subscribed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A sending domain registered with Unsend.
pub struct DomainData {
    pub id: i64,
    pub name: String,
    pub team_id: i64,
    pub status: String,
    pub region: String,
    pub click_tracking: bool,
    pub open_tracking: bool,
    pub public_key: String,
    pub dkim_status: String,
    pub spf_details: String,
    pub created_at: String,
    pub updated_at: String,
}
