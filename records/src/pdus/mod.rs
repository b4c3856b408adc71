//! Top-level PDU records.
//!
//! Every PDU embeds a [`PduHeader`](crate::PduHeader) by value as its first
//! field, followed by its family fields and then its own. Each PDU offers
//! `marshal_with_length`, which stamps the header's length field with the
//! PDU's marshalled size before encoding.

mod attribute;
mod electronic_emissions;
mod entity_state;
mod simulation_management;
mod warfare;

pub use attribute::AttributePdu;
pub use electronic_emissions::ElectronicEmissionsPdu;
pub use entity_state::EntityStatePdu;
pub use simulation_management::CommentPdu;
pub use warfare::{DetonationPdu, FirePdu};
