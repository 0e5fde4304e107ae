// Lead capture: the submit-form endpoint and its spreadsheet webhook.

pub mod handlers;
pub mod webhook;
