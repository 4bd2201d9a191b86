//! Transport layer: HTTP routes and wire-format details
//! (serialization/deserialization).

mod contacts;
mod domains;
mod emails;
pub mod routes;

pub use contacts::{decode_contact_json, encode_contact_json};
pub use domains::decode_domains_json;
pub use emails::{
    decode_email_data_json, decode_email_id_json, encode_schedule_patch_json,
    encode_send_email_json,
};
