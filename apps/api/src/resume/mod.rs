// Resume builder: AI endpoint client, local Markdown template, HTTP handlers.

pub mod client;
pub mod handlers;
pub mod template;
